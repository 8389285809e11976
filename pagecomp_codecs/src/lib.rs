mod gzip;
mod lz4;

pub use gzip::GzipCodec;
pub use lz4::Lz4Codec;

use pagecomp_core::{Codec, CompressMethod};

/// Build the codec selected by `method`.
///
/// The method set is closed, so every selector maps to exactly one bundled
/// implementation; unknown selectors are already rejected while parsing the
/// run configuration.
pub fn codec_for(method: CompressMethod) -> Box<dyn Codec> {
    match method {
        CompressMethod::Gzip => Box::new(GzipCodec::default()),
        CompressMethod::Lz4 => Box::new(Lz4Codec),
    }
}
