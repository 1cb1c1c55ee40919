//! # polyid
//!
//! A compact, self-describing identifier that is used as a row, column or
//! entity key. An [`Id`] can hold a UUID, a decimal integer of up to 128 bits,
//! a Google-style 128-bit token, a sortable 96-bit base64 token or an
//! arbitrary string, and every one of them lives in the same fixed-size value:
//! two 64-bit words plus a [`IdKind`] tag. Only long strings allocate.
//!
//! All variants share a single total order that agrees with byte-string order
//! for the textual variants, a hash, and a JSON representation that never
//! loses precision.
//!
//! ```
//! use polyid::{Id, IdKind};
//!
//! let id = Id::from("0828398c-5965-11e0-84c8-0026b937c8e1");
//! assert_eq!(id.kind(), IdKind::Uuid);
//! assert_eq!(id.to_string(), "0828398c-5965-11e0-84c8-0026b937c8e1");
//!
//! assert!(Id::from("[a") < Id::from("[aa"));
//! assert_eq!(Id::from("999999999999").kind(), IdKind::BigDec);
//! ```
mod classify;
mod codec;
mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;

pub use crate::classify::*;
pub use crate::error::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
