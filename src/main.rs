use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod expect;
mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "thread-exit-audit")]
#[command(
    about = "Check that every worker thread of a timer stress run logged its exit",
    long_about = None
)]
struct Cli {
    /// Log file written by the stress harness.
    #[arg(long, default_value = "../src/log.txt")]
    log: PathBuf,

    /// Number of worker threads the harness spawned (IDs 0..N).
    #[arg(
        long,
        default_value_t = expect::DEFAULT_THREAD_COUNT,
        value_parser = clap::value_parser!(u64).range(1..=65536)
    )]
    threads: u64,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Emit debug events on stderr.
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Settings for one audit run.
#[derive(Debug, Clone)]
struct AuditConfig {
    log: PathBuf,
    expected: expect::ExpectedThreads,
    format: Format,
}

impl From<Cli> for AuditConfig {
    fn from(cli: Cli) -> Self {
        Self {
            log: cli.log,
            expected: expect::ExpectedThreads::new(cli.threads),
            format: cli.format,
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read, analyze, render. Read failures end up in the report, not in the result.
fn run(config: &AuditConfig) -> Result<String> {
    // 1) Read the whole log; a missing or unreadable file yields no lines.
    let loaded = log::load_log(&config.log);

    // 2) Extract completion records and the end-of-test marker.
    let parser = log::CompletionParser::new()?;
    let scan = parser.scan(&loaded.lines);

    // 3) Compare against the expected population.
    let report = model::build_audit_report(config.expected, &scan, loaded.error.as_ref());

    // 4) Render.
    match config.format {
        Format::Text => render::render_text_report(&report),
        Format::Json => render::render_json_report(&report),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = AuditConfig::from(cli);
    let out = run(&config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
