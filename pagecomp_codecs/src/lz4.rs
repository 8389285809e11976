use lz4_flex::compress_prepend_size;
use pagecomp_core::{Codec, CompressMethod};

/// Size of the little-endian length prefix in front of every LZ4 page.
pub const LZ4_SIZE_PREFIX: usize = 4;

/// LZ4 block codec.
///
/// Each page becomes one LZ4 block prefixed with its uncompressed length, so a
/// page could be decoded on its own. Much faster than gzip, with a lower
/// ratio on most inputs.
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn method(&self) -> CompressMethod {
        CompressMethod::Lz4
    }

    fn name(&self) -> &'static str {
        "lz4"
    }

    fn compressed_len(&self, page: &[u8]) -> anyhow::Result<usize> {
        Ok(compress_prepend_size(page).len())
    }
}
