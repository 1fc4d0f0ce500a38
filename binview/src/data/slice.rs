//! Implements slices as an element source.

use super::ElementSource;

impl<T: Copy> ElementSource for &[T] {
    type Element = T;
    type Error = &'static str;

    fn element_count(&mut self) -> Result<u64, Self::Error> {
        u64::try_from(self.len()).map_err(|_| "length does not fit into `u64`")
    }

    fn fetch(&mut self, start: u64, count: usize) -> Result<Vec<T>, Self::Error> {
        let start_usize: usize = start
            .try_into()
            .map_err(|_| "start does not fit into `usize`")?;

        if start_usize > self.len() || count > self.len() - start_usize {
            return Err("fetch extends beyond the source");
        }

        Ok(self[start_usize..start_usize + count].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_returns_the_requested_batch() {
        let mut source: &[i32] = &[10, 20, 30, 40, 50];

        assert_eq!(source.element_count(), Ok(5));
        assert_eq!(source.fetch(1, 3), Ok(vec![20, 30, 40]));
        assert_eq!(source.fetch(5, 0), Ok(vec![]));
    }

    #[test]
    fn fetch_beyond_the_source_fails() {
        let mut source: &[i32] = &[10, 20, 30];

        assert!(source.fetch(2, 2).is_err());
        assert!(source.fetch(4, 0).is_err());
    }
}
