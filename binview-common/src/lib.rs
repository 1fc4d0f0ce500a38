//! Defines common types and functions used by all binview `crate`s.

#![forbid(unsafe_code)]

pub use encode::{Element, pack_bits};
pub use quantities::{AbsoluteOffset, Len, PageIndex};

mod encode;
mod quantities;
