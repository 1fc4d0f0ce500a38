//! Implements a read-only, byte-addressable view over paged data sources.
//!
//! Arbitrary element-indexed sources (typed slices, files, a debugger's
//! remote arrays) are adapted into byte pages by the types in [`data`], and
//! [`view::PagedView`] serves random single-byte and range reads over them
//! through a small page cache.

#![forbid(unsafe_code)]

pub mod data;
pub mod view;
