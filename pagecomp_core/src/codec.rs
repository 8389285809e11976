use crate::config::CompressMethod;

/// Core compression abstraction.
///
/// Each `Codec` implementation:
/// - Is identified by the [`CompressMethod`] that selects it.
/// - Must compress every page independently, as a self-contained stream with
///   its own framing. No state carries from one page to the next.
/// - Reports only the compressed length. The compressed bytes are dropped
///   inside the call and never reach the caller.
pub trait Codec: Send + Sync {
    /// Selector this codec answers to.
    fn method(&self) -> CompressMethod;

    /// Human-readable codec name for CLI display.
    fn name(&self) -> &'static str;

    /// Compress a single page and return the size of the encoded stream.
    fn compressed_len(&self, page: &[u8]) -> anyhow::Result<usize>;
}
