use std::io::{self, Write};

use flate2::write::GzEncoder;
use flate2::Compression;
use pagecomp_core::{Codec, CompressMethod};

/// Fixed bytes in every gzip member: 10-byte header plus 8-byte CRC/size trailer.
pub const GZIP_FRAMING: usize = 18;

/// Gzip page codec.
///
/// Every page is written as a complete gzip member, header and trailer
/// included, so small pages pay [`GZIP_FRAMING`] bytes each on top of the
/// deflate payload.
pub struct GzipCodec {
    /// Deflate level (0 = store, 9 = smallest).
    pub level: Compression,
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl GzipCodec {
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }
}

impl Codec for GzipCodec {
    fn method(&self) -> CompressMethod {
        CompressMethod::Gzip
    }

    fn name(&self) -> &'static str {
        "gzip"
    }

    fn compressed_len(&self, page: &[u8]) -> anyhow::Result<usize> {
        let mut encoder = GzEncoder::new(ByteCounter::default(), self.level);
        encoder.write_all(page)?;
        let sink = encoder.finish()?;
        Ok(sink.count)
    }
}

/// Write sink that keeps only the number of bytes it was given.
#[derive(Default)]
struct ByteCounter {
    count: usize,
}

impl Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.count += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
