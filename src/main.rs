//! CLI entry point for the bike-sharing report generator.
//!
//! Provides subcommands for rendering the full report document, exporting
//! the statistics tables as CSV, and printing a JSON summary of the report
//! structure.

use anyhow::Result;
use bikeshare_report::model::Summary;
use bikeshare_report::{dataset, output, render};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_report")]
#[command(about = "Render the bike-sharing analysis report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full report to a file
    Render {
        /// Output file to write
        #[arg(short, long, default_value = "report.html")]
        output: String,

        /// Document format
        #[arg(short, long, value_enum, default_value = "html")]
        format: Format,
    },
    /// Export the statistics tables as CSV files
    Export {
        /// Directory to write one CSV per table into
        #[arg(short = 'd', long, default_value = "tables")]
        output_dir: String,
    },
    /// Print a JSON summary of the report structure
    Summary,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { output, format } => {
            let report = dataset::report();
            let contents = match format {
                Format::Html => render::html::render_report(&report),
                Format::Markdown => render::text::render_report(&report),
            };
            output::write_report(&output, &contents)?;
        }
        Commands::Export { output_dir } => {
            output::export_tables(&output_dir)?;
        }
        Commands::Summary => {
            let report = dataset::report();
            let summary = Summary::of(&report);
            info!(
                blocks = summary.block_count,
                tables = summary.tables.len(),
                charts = summary.charts.len(),
                "Report summary"
            );
            output::print_json(&summary)?;
        }
    }

    Ok(())
}
