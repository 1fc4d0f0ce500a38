//! Implements typed quantities for byte offsets, byte lengths and page indices.

use std::{fmt, ops};

use size_format::SizeFormatterBinary;

/// A byte offset from the start of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AbsoluteOffset(u64);

impl AbsoluteOffset {
    /// The offset of the first byte.
    pub const ZERO: AbsoluteOffset = AbsoluteOffset(0);

    /// Creates an offset from a raw byte position.
    pub const fn from(value: u64) -> AbsoluteOffset {
        AbsoluteOffset(value)
    }

    /// The offset as a `u64`.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The index of the page containing this offset, for the given page byte-size.
    pub fn page(self, page_size: Len) -> PageIndex {
        PageIndex(self.0 / page_size.0)
    }

    /// The position of this offset within its page, for the given page byte-size.
    pub fn offset_in_page(self, page_size: Len) -> usize {
        (self.0 % page_size.0)
            .try_into()
            .expect("an offset within a page fits into `usize`")
    }
}

impl ops::Add<Len> for AbsoluteOffset {
    type Output = AbsoluteOffset;

    fn add(self, rhs: Len) -> AbsoluteOffset {
        AbsoluteOffset(self.0 + rhs.0)
    }
}

impl ops::AddAssign<Len> for AbsoluteOffset {
    fn add_assign(&mut self, rhs: Len) {
        self.0 += rhs.0;
    }
}

impl ops::Sub<AbsoluteOffset> for AbsoluteOffset {
    type Output = Len;

    fn sub(self, rhs: AbsoluteOffset) -> Len {
        Len(self.0 - rhs.0)
    }
}

impl fmt::Display for AbsoluteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A length in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Len(u64);

impl Len {
    /// The length of nothing.
    pub const ZERO: Len = Len(0);

    /// Creates a length from a raw byte count.
    pub const fn from(value: u64) -> Len {
        Len(value)
    }

    /// The length as a `u64`.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Determines if the length is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl ops::Add<Len> for Len {
    type Output = Len;

    fn add(self, rhs: Len) -> Len {
        Len(self.0 + rhs.0)
    }
}

impl ops::Sub<Len> for Len {
    type Output = Len;

    fn sub(self, rhs: Len) -> Len {
        Len(self.0 - rhs.0)
    }
}

impl fmt::Display for Len {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", SizeFormatterBinary::new(self.0))
    }
}

/// The index of a page within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PageIndex(u64);

impl PageIndex {
    /// The index of the first page.
    pub const ZERO: PageIndex = PageIndex(0);

    /// Creates a page index from a raw index.
    pub const fn from(value: u64) -> PageIndex {
        PageIndex(value)
    }

    /// The index as a `u64`.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The offset of the first byte of this page, for the given page byte-size.
    pub fn start_offset(self, page_size: Len) -> AbsoluteOffset {
        AbsoluteOffset(self.0 * page_size.0)
    }
}
