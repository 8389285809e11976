use std::io::{self, ErrorKind, Read};

/// Sequential fixed-size page source.
///
/// # Read contract
/// [`next_page`] fills one reusable buffer of `page_size` bytes and lends it
/// out until the next call. Short reads from the underlying source are
/// stitched together, so every page is exactly `page_size` bytes except the
/// last, which holds whatever remained. An empty page is never produced:
/// once the source reports end-of-input with nothing buffered the sequence
/// ends.
///
/// The sequence cannot be restarted; the reader consumes its source.
///
/// [`next_page`]: PageReader::next_page
pub struct PageReader<R> {
    inner: R,
    buf: Vec<u8>,
    bytes_read: u64,
    done: bool,
}

impl<R: Read> PageReader<R> {
    /// Wrap `inner`. `page_size` must be non-zero.
    pub fn new(inner: R, page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be non-zero");
        Self {
            inner,
            buf: vec![0u8; page_size],
            bytes_read: 0,
            done: false,
        }
    }

    /// Total bytes handed out so far.
    #[inline]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read the next page, or `None` at end-of-input.
    ///
    /// Any read error other than `Interrupted` is returned as-is and leaves
    /// the reader in an unspecified position.
    pub fn next_page(&mut self) -> io::Result<Option<&[u8]>> {
        if self.done {
            return Ok(None);
        }

        let mut filled = 0;
        while filled < self.buf.len() {
            match self.inner.read(&mut self.buf[filled..]) {
                Ok(0) => {
                    self.done = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        if filled == 0 {
            return Ok(None);
        }
        self.bytes_read += filled as u64;
        Ok(Some(&self.buf[..filled]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most `chunk` bytes per `read`, and an `Interrupted`
    /// error before every other call.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
        interrupt_next: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            self.interrupt_next = !self.interrupt_next;
            if self.interrupt_next {
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            let n = self.chunk.min(out.len()).min(self.data.len() - self.pos);
            out[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _out: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "device error"))
        }
    }

    fn page_lengths<R: Read>(mut pages: PageReader<R>) -> Vec<usize> {
        let mut lens = Vec::new();
        while let Some(page) = pages.next_page().unwrap() {
            lens.push(page.len());
        }
        lens
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        let mut pages = PageReader::new(Cursor::new(Vec::new()), 4096);
        assert!(pages.next_page().unwrap().is_none());
        assert!(pages.next_page().unwrap().is_none());
        assert_eq!(pages.bytes_read(), 0);
    }

    #[test]
    fn test_partial_last_page() {
        let lens = page_lengths(PageReader::new(Cursor::new(vec![7u8; 10_000]), 4096));
        assert_eq!(lens, vec![4096, 4096, 1808]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_page() {
        let lens = page_lengths(PageReader::new(Cursor::new(vec![1u8; 3 * 512]), 512));
        assert_eq!(lens, vec![512, 512, 512]);
    }

    #[test]
    fn test_page_larger_than_source() {
        let lens = page_lengths(PageReader::new(Cursor::new(vec![1u8; 100]), 8192));
        assert_eq!(lens, vec![100]);
    }

    #[test]
    fn test_page_size_one() {
        let lens = page_lengths(PageReader::new(Cursor::new(b"abc".to_vec()), 1));
        assert_eq!(lens, vec![1, 1, 1]);
    }

    #[test]
    fn test_short_reads_are_stitched_into_full_pages() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let src = Trickle {
            data: data.clone(),
            pos: 0,
            chunk: 300,
            interrupt_next: false,
        };
        let mut pages = PageReader::new(src, 1024);
        let mut rebuilt = Vec::new();
        let mut lens = Vec::new();
        while let Some(page) = pages.next_page().unwrap() {
            lens.push(page.len());
            rebuilt.extend_from_slice(page);
        }
        assert_eq!(lens, vec![1024, 1024, 1024, 1024, 904]);
        assert_eq!(rebuilt, data, "no byte dropped or duplicated");
        assert_eq!(pages.bytes_read(), 5000);
    }

    #[test]
    fn test_read_error_propagates() {
        let mut pages = PageReader::new(Broken, 64);
        let err = pages.next_page().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_byte_total_matches_for_many_sizes() {
        for size in [0usize, 1, 63, 64, 65, 1000, 4096] {
            for page_size in [1usize, 7, 64, 4096, 10_000] {
                let mut pages = PageReader::new(Cursor::new(vec![0u8; size]), page_size);
                let mut count = 0u64;
                while pages.next_page().unwrap().is_some() {
                    count += 1;
                }
                assert_eq!(pages.bytes_read(), size as u64);
                assert_eq!(count, (size as u64).div_ceil(page_size as u64));
            }
        }
    }
}
