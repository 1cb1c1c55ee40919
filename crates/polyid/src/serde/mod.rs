mod id;
mod string;

pub use string::*;
