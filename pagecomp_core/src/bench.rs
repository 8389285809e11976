use std::fs::File;
use std::io::Read;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use log::{debug, info, warn};

use crate::codec::Codec;
use crate::config::RunConfig;
use crate::error::{BenchError, Result};
use crate::page::PageReader;

/// Totals accumulated over one pass through the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub page_count: u64,
    /// Sum of every page's compressed length.
    pub total_compressed: u64,
    /// Input size as reported by file metadata before the run.
    pub total_uncompressed: u64,
    /// Sum of the page lengths actually read. Equals `total_uncompressed`
    /// unless the file changed during the run.
    pub bytes_read: u64,
}

impl RunStats {
    /// Compression ratio (uncompressed / compressed).
    ///
    /// Defined as `0.0` when nothing was compressed, which only happens for
    /// an empty input.
    pub fn ratio(&self) -> f64 {
        if self.total_compressed == 0 {
            return 0.0;
        }
        self.total_uncompressed as f64 / self.total_compressed as f64
    }
}

/// A finished run: totals plus wall-clock bounds.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub stats: RunStats,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub elapsed: Duration,
    pub ratio: f64,
}

/// Compress every page of `pages` with `codec` and total the sizes.
///
/// `file_size` is taken as the uncompressed total; it is not derived from
/// the pages. The first read or codec failure aborts the pass.
pub fn measure<R: Read>(
    mut pages: PageReader<R>,
    codec: &dyn Codec,
    file_size: u64,
) -> Result<RunStats> {
    let mut stats = RunStats {
        total_uncompressed: file_size,
        ..RunStats::default()
    };

    loop {
        let index = stats.page_count;
        let page = match pages.next_page() {
            Ok(Some(page)) => page,
            Ok(None) => break,
            Err(source) => return Err(BenchError::Read { page: index, source }),
        };

        let compressed = codec
            .compressed_len(page)
            .map_err(|source| BenchError::Codec { page: index, source })?;
        debug!("page {}: {} -> {} bytes", index, page.len(), compressed);

        stats.total_compressed += compressed as u64;
        stats.page_count += 1;
    }

    stats.bytes_read = pages.bytes_read();
    if stats.bytes_read != file_size {
        warn!(
            "read {} bytes but metadata reported {}; file changed during the run",
            stats.bytes_read, file_size
        );
    }
    Ok(stats)
}

/// Execute one benchmark run for `config`.
///
/// Opens and stats the input, walks it page by page through `codec`, and
/// returns the finished report. The file handle is released on every exit
/// path, including errors.
pub fn run(config: &RunConfig, codec: &dyn Codec) -> Result<RunReport> {
    let started_at = Local::now();
    let t0 = Instant::now();

    let path = &config.input_path;
    let file = File::open(path).map_err(|source| BenchError::FileOpen {
        path: path.clone(),
        source,
    })?;
    let file_size = file
        .metadata()
        .map_err(|source| BenchError::FileStat {
            path: path.clone(),
            source,
        })?
        .len();

    info!(
        "measuring {:?}: {} bytes, page size {}, codec {}",
        path,
        file_size,
        config.page_size,
        codec.name()
    );

    // No page can be longer than the file, so the buffer never needs to be
    // either. Keeps huge `-pgsz` values from allocating memory they never use.
    let buf_len = usize::try_from(file_size.max(1))
        .map_or(config.page_size, |len| config.page_size.min(len));
    let stats = measure(PageReader::new(file, buf_len), codec, file_size)?;

    let elapsed = t0.elapsed();
    let finished_at = Local::now();
    let ratio = stats.ratio();

    info!(
        "{} pages, {} -> {} bytes (ratio {:.2}) in {:.3}s",
        stats.page_count,
        stats.total_uncompressed,
        stats.total_compressed,
        ratio,
        elapsed.as_secs_f64()
    );

    Ok(RunReport {
        stats,
        started_at,
        finished_at,
        elapsed,
        ratio,
    })
}
