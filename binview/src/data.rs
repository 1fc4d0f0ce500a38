//! Models how paged data sources are accessed in binview.

use std::fmt;

use binview_common::{Len, PageIndex};

pub mod bits;
pub mod elements;
pub mod file;
pub mod slice;

/// The nominal page byte-size used when a provider does not choose its own.
pub const DEFAULT_PAGE_SIZE: Len = Len::from(2048);

/// A source of byte pages for a paged view to work with.
pub trait PageProvider {
    /// The error type for fallible providers.
    type Error: fmt::Debug + fmt::Display;

    /// The nominal byte-size of one page.
    ///
    /// Every returned page has exactly this many bytes, except the final
    /// page, which may be shorter.
    fn page_size(&self) -> Len {
        DEFAULT_PAGE_SIZE
    }

    /// The total size of the virtual document in bytes.
    fn document_size(&mut self) -> Result<Len, Self::Error>;

    /// Returns the encoded bytes of the requested page.
    ///
    /// Returns `None` for a page index at or beyond the end of the data. The
    /// whole page is materialized before returning; errors of the underlying
    /// source propagate unmodified.
    fn page(&mut self, index: PageIndex) -> Result<Option<Box<[u8]>>, Self::Error>;
}

/// An element-indexed underlying source, such as a local slice or a remote array.
pub trait ElementSource {
    /// The element type of the source.
    type Element: Copy;

    /// The error type for fallible sources.
    type Error: fmt::Debug + fmt::Display;

    /// The number of elements in the source.
    fn element_count(&mut self) -> Result<u64, Self::Error>;

    /// Fetches `count` elements starting at `start`.
    ///
    /// One call covers a whole page, so sources backed by a remote object
    /// batch all of a page's elements into a single round trip.
    fn fetch(&mut self, start: u64, count: usize) -> Result<Vec<Self::Element>, Self::Error>;
}
