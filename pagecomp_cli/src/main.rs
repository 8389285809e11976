use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use env_logger::{Builder, Env};
use log::error;

use pagecomp_codecs::codec_for;
use pagecomp_core::{report, LogLevel, RunConfig, DEFAULT_PAGE_SIZE};

// ── CLI definition ─────────────────────────────────────────────────────────

/// Long flags that may also be spelled with a single dash (`-pgsz 4096`).
const SINGLE_DASH_LONGS: &[&str] = &["pgsz", "cmethod", "terse", "loglevel", "help"];

#[derive(Parser, Debug)]
#[command(
    name = "pagecomp",
    about = "Compress a file page by page and report the aggregate compression ratio",
    version,
    disable_help_flag = true
)]
struct Cli {
    /// File to measure
    input: PathBuf,

    /// Page size in bytes
    #[arg(long = "pgsz", default_value_t = DEFAULT_PAGE_SIZE as i64, allow_negative_numbers = true)]
    page_size: i64,

    /// Compression method: 0 = gzip, 1 = lz4
    #[arg(long = "cmethod", default_value_t = 0, allow_negative_numbers = true)]
    method: i64,

    /// Print only the result row (-terse=false adds timing lines)
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    terse: bool,

    /// Log level for stderr diagnostics: 0 = error, 1 = warn, 2 = info
    #[arg(long = "loglevel", default_value_t = 0, allow_negative_numbers = true)]
    log_level: i64,

    /// Print a header row before the result row
    #[arg(
        short = 'h',
        action = ArgAction::Set,
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    header: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Rewrite `-name` / `-name=value` to `--name...` for the known long flags.
///
/// Everything after a bare `--` is left alone, as are non-UTF-8 arguments.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if s.starts_with('-') && !s.starts_with("--") => {
                let name = s[1..].split('=').next().unwrap_or_default();
                SINGLE_DASH_LONGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{}", s)))
            }
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

fn init_logger(level: LogLevel) {
    // RUST_LOG wins over -loglevel when set.
    Builder::from_env(Env::default().default_filter_or(level.as_filter().as_str()))
        .format_timestamp_millis()
        .init();
}

// ── Run ────────────────────────────────────────────────────────────────────

impl Cli {
    /// Validate the raw flag values. Performs no I/O.
    fn run_config(&self) -> pagecomp_core::Result<RunConfig> {
        RunConfig::new(
            &self.input,
            self.page_size,
            self.method,
            self.terse,
            self.log_level,
            self.header,
        )
    }
}

/// Run the benchmark and return the text for stdout.
fn run_bench(config: &RunConfig) -> anyhow::Result<String> {
    let codec = codec_for(config.method);
    let finished = pagecomp_core::run(config, codec.as_ref())?;
    Ok(report::render(config, &finished))
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let outcome = match cli.run_config() {
        Ok(config) => {
            init_logger(config.log_level);
            run_bench(&config)
        }
        Err(e) => {
            // Errors are logged at every level.
            init_logger(LogLevel::Error);
            Err(e.into())
        }
    };

    match outcome {
        Ok(text) => print!("{}", text),
        Err(e) => {
            println!("{}", e);
            error!("{:?}", e);
            std::process::exit(1);
        }
    }
}
