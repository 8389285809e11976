//! Text rendering of a finished run.
//!
//! Layout, with the bracketed parts present only when not terse:
//!
//! ```text
//! [Page Size: 8192]
//! [Compress method: 0 (gzip)]
//! [Start time: 2024-05-01 09:30:00]
//! []
//!       PageSz        Pages   Compressed Uncompressed        Ratio   <- with -h
//!         8192           13        41297       100000         2.42
//! []
//! [End time: 2024-05-01 09:30:01]
//! [Elapsed time: 1.234ms]
//! ```

use crate::bench::{RunReport, RunStats};
use crate::config::RunConfig;

/// strftime layout for the start/end lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of every table column.
pub const COLUMN_WIDTH: usize = 12;

pub fn header_row() -> String {
    format!(
        "{:>w$} {:>w$} {:>w$} {:>w$} {:>w$}",
        "PageSz",
        "Pages",
        "Compressed",
        "Uncompressed",
        "Ratio",
        w = COLUMN_WIDTH
    )
}

pub fn result_row(config: &RunConfig, stats: &RunStats, ratio: f64) -> String {
    format!(
        "{:>w$} {:>w$} {:>w$} {:>w$} {:>w$.2}",
        config.page_size,
        stats.page_count,
        stats.total_compressed,
        stats.total_uncompressed,
        ratio,
        w = COLUMN_WIDTH
    )
}

/// Full stdout text for `report`, newline-terminated.
pub fn render(config: &RunConfig, report: &RunReport) -> String {
    let mut out = String::new();

    if !config.terse {
        out.push_str(&format!(
            "Page Size: {}\nCompress method: {} ({})\nStart time: {}\n\n",
            config.page_size,
            config.method.selector(),
            config.method,
            report.started_at.format(TIMESTAMP_FORMAT)
        ));
    }

    if config.print_header {
        out.push_str(&header_row());
        out.push('\n');
    }
    out.push_str(&result_row(config, &report.stats, report.ratio));
    out.push('\n');

    if !config.terse {
        out.push_str(&format!(
            "\nEnd time: {}\nElapsed time: {:?}\n",
            report.finished_at.format(TIMESTAMP_FORMAT),
            report.elapsed
        ));
    }

    out
}
