use clap::Parser;
use log::LevelFilter;
use procex::{AppError, TaskSource};
use procex::core::config::{self, CliOverrides, ResolvedConfig, SummaryFormat};
use procex::core::stats::SessionStats;
use procex::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "procex", about = "Interactive process and thread explorer")]
struct Args {
    /// Where to read tasks from
    #[arg(short, long, value_enum)]
    source: Option<TaskSource>,

    /// Start with the debug panel open
    #[arg(short, long)]
    debug_panel: bool,

    /// Refresh interval in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Format of the session summary printed on exit
    #[arg(long, value_enum)]
    summary: Option<SummaryFormat>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            source: self.source,
            interval_ms: self.interval_ms,
            debug_panel: self.debug_panel,
            summary: self.summary,
            log_file: self.log_file.clone(),
            log_level: self.log_level,
        }
    }
}

fn init_logging(config: &ResolvedConfig) {
    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn print_summary(stats: &SessionStats, format: SummaryFormat) {
    match format {
        SummaryFormat::Text => {
            println!("{stats}");
            println!("Thank you for using ProcessExplorerLite!");
        }
        SummaryFormat::Json => match serde_json::to_string_pretty(stats) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("procex: failed to serialize summary: {e}"),
        },
    }
}

/// Loads settings, runs the dashboard and prints the summary.
fn run(args: &Args) -> Result<(), AppError> {
    let loaded = config::load_config()?;
    let config = config::resolve(&loaded.config, &args.overrides());
    init_logging(&config);
    loaded.log_origin();

    log::info!(
        "procex starting: source={:?} interval={:?} max_tasks={}",
        config.source,
        config.refresh_interval,
        config.max_tasks
    );

    let stats = tui::run(&config)?;
    print_summary(&stats, config.summary);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {}", e);
            eprintln!("procex: {e}");
            ExitCode::FAILURE
        }
    }
}
