//! Implements the bit-packing page adapter for boolean sources.

use binview_common::{Len, PageIndex, pack_bits};

use super::{DEFAULT_PAGE_SIZE, ElementSource, PageProvider};

/// Adapts a boolean source into a byte page provider by bit-packing.
///
/// Eight booleans pack into one output byte, most significant bit first, so
/// one page holds `page_size * 8` elements. A trailing partial byte has its
/// unused low bits set to zero.
#[derive(Debug)]
pub struct BitPages<S> {
    /// The underlying boolean source.
    source: S,
    /// The nominal byte-size of one page.
    page_size: Len,
}

impl<S> BitPages<S> {
    /// Creates an adapter with the default page size.
    pub fn new(source: S) -> BitPages<S> {
        BitPages::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    /// Creates an adapter with the given page size.
    ///
    /// `page_size` must be positive.
    pub fn with_page_size(source: S, page_size: Len) -> BitPages<S> {
        BitPages { source, page_size }
    }
}

impl<S> PageProvider for BitPages<S>
where
    S: ElementSource<Element = bool>,
{
    type Error = S::Error;

    fn page_size(&self) -> Len {
        self.page_size
    }

    fn document_size(&mut self) -> Result<Len, Self::Error> {
        let count = self.source.element_count()?;

        Ok(Len::from(count.div_ceil(8)))
    }

    fn page(&mut self, index: PageIndex) -> Result<Option<Box<[u8]>>, Self::Error> {
        let elements_per_page = self.page_size.as_u64() * 8;
        let count = self.source.element_count()?;
        let start = index.as_u64() * elements_per_page;

        if start >= count {
            return Ok(None);
        }

        let length = std::cmp::min(elements_per_page, count - start);
        let length_usize = usize::try_from(length).expect("one page always fits into `usize`");
        let elements = self.source.fetch(start, length_usize)?;

        Ok(Some(pack_bits(&elements).into_boxed_slice()))
    }
}
