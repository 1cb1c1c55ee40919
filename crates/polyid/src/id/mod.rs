mod compound;
#[allow(clippy::module_inception)]
mod id;
mod kind;

pub use id::*;
pub use kind::*;
