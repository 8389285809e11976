use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};

/// Default raw bytes per page: 8 KB.
pub const DEFAULT_PAGE_SIZE: usize = 8192;

// ── Compression method ─────────────────────────────────────────────────────

/// The closed set of codecs a run can select.
///
/// The discriminants are the `-cmethod` selector values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressMethod {
    Gzip = 0,
    Lz4 = 1,
}

impl CompressMethod {
    /// Numeric selector as accepted on the command line.
    pub fn selector(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressMethod::Gzip => "gzip",
            CompressMethod::Lz4 => "lz4",
        }
    }
}

impl TryFrom<i64> for CompressMethod {
    type Error = BenchError;

    fn try_from(selector: i64) -> Result<Self> {
        match selector {
            0 => Ok(CompressMethod::Gzip),
            1 => Ok(CompressMethod::Lz4),
            other => Err(BenchError::BadArguments(format!(
                "wrong compression method {}; supported: 0 (gzip), 1 (lz4)",
                other
            ))),
        }
    }
}

impl fmt::Display for CompressMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Log level ──────────────────────────────────────────────────────────────

/// Diagnostic verbosity. Only affects stderr logging, never the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
}

impl LogLevel {
    /// Map a `-loglevel` selector. Out-of-range values clamp to the nearest level.
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            i64::MIN..=0 => LogLevel::Error,
            1 => LogLevel::Warn,
            _ => LogLevel::Info,
        }
    }

    pub fn as_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
        }
    }
}

// ── Run configuration ──────────────────────────────────────────────────────

/// Everything one run needs, fixed before the input file is touched.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    /// Raw bytes per page (the last page may be shorter).
    pub page_size: usize,
    pub method: CompressMethod,
    /// Print only the result row.
    pub terse: bool,
    pub log_level: LogLevel,
    /// Emit a column header before the result row.
    pub print_header: bool,
}

impl RunConfig {
    /// Validate raw command-line values.
    ///
    /// Fails with [`BenchError::BadArguments`] on a non-positive page size or an
    /// unknown compression selector. Performs no I/O.
    pub fn new(
        input_path: impl AsRef<Path>,
        page_size: i64,
        method: i64,
        terse: bool,
        log_level: i64,
        print_header: bool,
    ) -> Result<Self> {
        let method = CompressMethod::try_from(method)?;
        if page_size < 1 {
            return Err(BenchError::BadArguments(format!(
                "page size must be at least 1 byte, got {}",
                page_size
            )));
        }
        let page_size = usize::try_from(page_size).map_err(|_| {
            BenchError::BadArguments(format!("page size {} does not fit in memory", page_size))
        })?;

        Ok(Self {
            input_path: input_path.as_ref().to_path_buf(),
            page_size,
            method,
            terse,
            log_level: LogLevel::from_selector(log_level),
            print_header,
        })
    }
}
