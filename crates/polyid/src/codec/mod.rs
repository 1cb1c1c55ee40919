mod decimal;
mod envelope;
mod hyphenated;
mod packed;
mod sortable;

pub use decimal::*;
pub use envelope::*;
pub use hyphenated::*;
pub use packed::*;
pub use sortable::*;
