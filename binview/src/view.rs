//! Implements the byte-addressable paged view over a page provider.

use std::fmt;

use binview_common::{AbsoluteOffset, Len, PageIndex};

use crate::data::PageProvider;

/// Represents the possible read errors of a paged view.
#[derive(Debug)]
pub enum ReadErr<SourceErr> {
    /// The requested range extends beyond the document.
    OutOfBounds {
        /// The first offset that could not be served.
        offset: AbsoluteOffset,
        /// The size of the document.
        size: Len,
    },
    /// A source specific error occurred.
    SourceErr(SourceErr),
}

impl<SourceErr> From<SourceErr> for ReadErr<SourceErr> {
    fn from(value: SourceErr) -> Self {
        ReadErr::SourceErr(value)
    }
}

impl<SourceErr: fmt::Display> fmt::Display for ReadErr<SourceErr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadErr::OutOfBounds { offset, size } => {
                write!(f, "offset {offset} is beyond the document of size {size}")
            }
            ReadErr::SourceErr(err) => err.fmt(f),
        }
    }
}

/// One filled cache slot.
#[derive(Debug)]
struct CachePage {
    /// The index of the cached page.
    index: PageIndex,
    /// The encoded bytes of the cached page.
    data: Box<[u8]>,
}

/// A random-access, read-only byte view over a page provider.
///
/// The view owns a two-slot page cache. On a miss the fetched page lands in
/// the slots in strict rotation, irrespective of recency of use: two slots
/// and rotate-on-miss are enough for the mostly sequential access pattern of
/// a viewer scrolling through a document, and keep the hot [`byte_at`] path
/// trivial. The cache is invisible in the results, only in the number of
/// provider calls.
///
/// The view is single-threaded; reads take `&mut self` because they may
/// fetch and cache pages. Page fetches block for as long as the underlying
/// source takes, so callers should prefer one ranged [`copy_into`] over many
/// scattered [`byte_at`] calls when the source is remote. Dropping the view
/// releases the provider and both slots.
///
/// [`byte_at`]: Self::byte_at
/// [`copy_into`]: Self::copy_into
#[derive(Debug)]
pub struct PagedView<P> {
    /// The provider supplying pages.
    provider: P,
    /// The two cache slots.
    slots: [Option<CachePage>; 2],
    /// The slot the next fetched page overwrites.
    next_slot: usize,
    /// The nominal byte-size of one page, captured at construction.
    page_size: Len,
    /// The size of the document, captured at construction.
    size: Len,
}

impl<P: PageProvider> PagedView<P> {
    /// Creates a view over the given provider.
    ///
    /// The document size is queried once here; the provider's data must not
    /// change for the lifetime of the view.
    pub fn new(mut provider: P) -> Result<PagedView<P>, P::Error> {
        let size = provider.document_size()?;
        let page_size = provider.page_size();

        Ok(PagedView {
            provider,
            slots: [None, None],
            next_slot: 0,
            page_size,
            size,
        })
    }

    /// The size of the document in bytes.
    pub fn data_size(&self) -> Len {
        self.size
    }

    /// Determines if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.size.is_zero()
    }

    /// Returns the cached page with the given index, fetching it on a miss.
    ///
    /// Returns `None` for a page beyond the data. Fetch failures are not
    /// cached, so the next access re-attempts the fetch.
    fn resolve(&mut self, index: PageIndex) -> Result<Option<&CachePage>, P::Error> {
        if let Some(slot) = (0..self.slots.len()).find(|&slot| {
            self.slots[slot]
                .as_ref()
                .is_some_and(|page| page.index == index)
        }) {
            return Ok(self.slots[slot].as_ref());
        }

        let Some(data) = self.provider.page(index)? else {
            return Ok(None);
        };

        let slot = self.next_slot;
        self.next_slot = (self.next_slot + 1) % self.slots.len();
        self.slots[slot] = Some(CachePage { index, data });

        Ok(self.slots[slot].as_ref())
    }

    /// Returns the byte at the given offset.
    ///
    /// Returns `None` for offsets past the end of the document, including
    /// offsets past the real length of a short final page.
    pub fn byte_at(&mut self, offset: AbsoluteOffset) -> Result<Option<u8>, P::Error> {
        let index = offset.page(self.page_size);
        let offset_in_page = offset.offset_in_page(self.page_size);

        Ok(self
            .resolve(index)?
            .and_then(|page| page.data.get(offset_in_page))
            .copied())
    }

    /// Copies the entire document into a new buffer.
    pub fn copy_all(&mut self) -> Result<Vec<u8>, ReadErr<P::Error>> {
        self.copy(AbsoluteOffset::ZERO, self.size)
    }

    /// Copies `len` bytes starting at `start` into a new buffer.
    pub fn copy(&mut self, start: AbsoluteOffset, len: Len) -> Result<Vec<u8>, ReadErr<P::Error>> {
        let mut buf = vec![
            0;
            usize::try_from(len.as_u64()).expect("copied range does not fit into `usize`")
        ];

        self.copy_into(start, &mut buf)?;

        Ok(buf)
    }

    /// Fills `target` with the bytes starting at `start`.
    ///
    /// The range is stitched together across however many page boundaries it
    /// crosses. Fails with [`ReadErr::OutOfBounds`] if any part of the range
    /// lies beyond the document; such a failure is fatal to this call and
    /// signals an inconsistency between the document size and the actual
    /// page content, not a transient condition.
    pub fn copy_into(
        &mut self,
        start: AbsoluteOffset,
        target: &mut [u8],
    ) -> Result<(), ReadErr<P::Error>> {
        let size = self.size;
        let mut cursor = start;
        let mut filled = 0;

        while filled < target.len() {
            let index = cursor.page(self.page_size);
            let offset_in_page = cursor.offset_in_page(self.page_size);

            let Some(page) = self.resolve(index)? else {
                return Err(ReadErr::OutOfBounds {
                    offset: cursor,
                    size,
                });
            };

            if offset_in_page >= page.data.len() {
                return Err(ReadErr::OutOfBounds {
                    offset: cursor,
                    size,
                });
            }

            // The maximal contiguous run available in this page.
            let run = std::cmp::min(page.data.len() - offset_in_page, target.len() - filled);
            target[filled..filled + run]
                .copy_from_slice(&page.data[offset_in_page..offset_in_page + run]);

            filled += run;
            cursor += Len::from(u64::try_from(run).expect("a run within a page fits into `u64`"));
        }

        Ok(())
    }
}
