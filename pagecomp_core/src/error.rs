//! Error types for pagecomp-core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a benchmark run can fail.
///
/// None of these are recoverable: the driver stops at the first one and the
/// partial totals are dropped with it.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Command-line values that cannot form a valid [`RunConfig`](crate::RunConfig).
    #[error("bad arguments: {0}")]
    BadArguments(String),

    /// The input file could not be opened.
    #[error("open error: {path:?}: {source}")]
    FileOpen {
        /// Path given on the command line.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file's metadata could not be read.
    #[error("file stat error: {path:?}: {source}")]
    FileStat {
        /// Path given on the command line.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failed part-way through the file.
    #[error("read error at page {page}: {source}")]
    Read {
        /// Zero-based index of the page being filled.
        page: u64,
        #[source]
        source: io::Error,
    },

    /// The codec rejected a page.
    #[error("compress error at page {page}: {source}")]
    Codec {
        /// Zero-based index of the page being compressed.
        page: u64,
        #[source]
        source: anyhow::Error,
    },
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;
