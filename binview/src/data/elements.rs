//! Implements the page adapter for fixed-width element sources.

use binview_common::{Element, Len, PageIndex};

use super::{DEFAULT_PAGE_SIZE, ElementSource, PageProvider};

/// Adapts a fixed-width element source into a byte page provider.
///
/// Each element encodes to `Element::BYTE_SIZE` big-endian bytes, so one
/// page holds `page_size / BYTE_SIZE` elements. Bytes themselves pass
/// through unchanged, which makes `ElementPages<&[u8]>` the plain
/// already-byte provider.
#[derive(Debug)]
pub struct ElementPages<S> {
    /// The underlying element source.
    source: S,
    /// The nominal byte-size of one page.
    page_size: Len,
}

impl<S> ElementPages<S> {
    /// Creates an adapter with the default page size.
    pub fn new(source: S) -> ElementPages<S> {
        ElementPages::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    /// Creates an adapter with the given page size.
    ///
    /// `page_size` must be a positive multiple of the element byte-size.
    pub fn with_page_size(source: S, page_size: Len) -> ElementPages<S> {
        ElementPages { source, page_size }
    }
}

impl<S> PageProvider for ElementPages<S>
where
    S: ElementSource,
    S::Element: Element,
{
    type Error = S::Error;

    fn page_size(&self) -> Len {
        self.page_size
    }

    fn document_size(&mut self) -> Result<Len, Self::Error> {
        let count = self.source.element_count()?;

        Ok(Len::from(count * S::Element::BYTE_SIZE as u64))
    }

    fn page(&mut self, index: PageIndex) -> Result<Option<Box<[u8]>>, Self::Error> {
        let elements_per_page = self.page_size.as_u64() / S::Element::BYTE_SIZE as u64;
        let count = self.source.element_count()?;
        let start = index.as_u64() * elements_per_page;

        if start >= count {
            return Ok(None);
        }

        let length = std::cmp::min(elements_per_page, count - start);
        let length_usize = usize::try_from(length).expect("one page always fits into `usize`");
        let elements = self.source.fetch(start, length_usize)?;

        let mut encoded = Vec::with_capacity(length_usize * S::Element::BYTE_SIZE);
        for element in elements {
            element.write_be(&mut encoded);
        }

        Ok(Some(encoded.into_boxed_slice()))
    }
}
