pub mod bench;
pub mod codec;
pub mod config;
pub mod error;
pub mod page;
pub mod report;

pub use bench::{measure, run, RunReport, RunStats};
pub use codec::Codec;
pub use config::{CompressMethod, LogLevel, RunConfig, DEFAULT_PAGE_SIZE};
pub use error::{BenchError, Result};
pub use page::PageReader;
