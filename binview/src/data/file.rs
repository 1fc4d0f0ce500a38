//! Implements files as an already-byte page provider.

use std::{io, path::Path};

use binview_common::{Len, PageIndex};
use positioned_io::{RandomAccessFile, ReadAt as _, Size as _};

use super::{DEFAULT_PAGE_SIZE, PageProvider};

/// A page provider reading directly from a file.
#[derive(Debug)]
pub struct FilePages {
    /// The open file handle.
    file: RandomAccessFile,
    /// The length of the file in bytes, captured at open.
    len: u64,
    /// The nominal byte-size of one page.
    page_size: Len,
}

impl FilePages {
    /// Creates a provider from the given path.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<FilePages> {
        let file = RandomAccessFile::open(path)?;
        let len = file
            .size()?
            .ok_or_else(|| io::Error::other("cannot get file size"))?;

        Ok(FilePages {
            file,
            len,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Sets the nominal page size.
    pub fn with_page_size(mut self, page_size: Len) -> FilePages {
        self.page_size = page_size;
        self
    }
}

impl PageProvider for FilePages {
    type Error = io::Error;

    fn page_size(&self) -> Len {
        self.page_size
    }

    fn document_size(&mut self) -> Result<Len, Self::Error> {
        Ok(Len::from(self.len))
    }

    fn page(&mut self, index: PageIndex) -> Result<Option<Box<[u8]>>, Self::Error> {
        let offset = index.start_offset(self.page_size);

        if offset.as_u64() >= self.len {
            return Ok(None);
        }

        let len_left = self.len - offset.as_u64();
        let output_size = std::cmp::min(len_left, self.page_size.as_u64());
        let mut buf =
            vec![0; usize::try_from(output_size).expect("one page always fits into `usize`")];

        self.file.read_exact_at(offset.as_u64(), &mut buf)?;

        Ok(Some(buf.into_boxed_slice()))
    }
}
