// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use crate::config::consts::{CONTAINER_SELECTOR, ROW_SELECTOR, SHEET_URL, SHEET_URL_ENV};
use crate::config::options::{AppOptions, ExportFormat, Source};
use crate::error::ScrapeError;
use crate::log::LogOptions;
use crate::progress::Progress;
use crate::window::RowWindow;
use crate::{file, scrape};

/// Scrape the Kerala COVID-19 patient sheet into CSV/TSV/JSON.
#[derive(Debug, Parser)]
#[command(name = "kerala_scrape", version, about)]
pub struct Args {
    /// First patient row to scrape (1-based, inclusive; 0 = first row)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: i64,

    /// Last patient row to scrape (1-based, inclusive; 0 = last row)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub end: i64,

    /// Published sheet URL
    #[arg(long, env = SHEET_URL_ENV, default_value = SHEET_URL)]
    pub url: String,

    /// Read a saved copy of the page instead of fetching `--url`
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// CSS selector of the sheet tab holding the patient table
    #[arg(long, default_value = CONTAINER_SELECTOR)]
    pub container: String,

    /// CSS selector of patient rows inside the container
    #[arg(long, default_value = ROW_SELECTOR)]
    pub row_selector: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Output file or directory; `-` writes to stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Omit the header row (CSV/TSV)
    #[arg(long)]
    pub no_headers: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also log to .store/debug.log
    #[arg(long)]
    pub log_file: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
    Json,
    Jsonl,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
            Format::Jsonl => ExportFormat::JsonLines,
        }
    }
}

impl Args {
    pub fn log_options(&self) -> LogOptions {
        LogOptions { verbose: self.verbose, to_file: self.log_file }
    }

    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.source = match &self.html {
            Some(path) => Source::File(path.clone()),
            None => Source::Url(self.url.clone()),
        };
        opts.scrape.container = self.container.clone();
        opts.scrape.row_selector = self.row_selector.clone();
        opts.scrape.window = RowWindow::new(self.start, self.end);

        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

/// Progress sink that reports through `tracing`.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) { debug!(rows = total, "extracting patients"); }
    fn log(&mut self, msg: &str) { info!("{msg}"); }
    fn finish(&mut self, emitted: usize) { debug!(records = emitted, "extraction finished"); }
}

/// Scrape and export per `args`. Returns the number of records written.
pub fn run(args: &Args) -> Result<usize, ScrapeError> {
    let opts = args.to_options();
    let patients = scrape::collect_patients(&opts.scrape, Some(&mut LogProgress))?;

    match file::export_patients(&opts.export, &patients)? {
        Some(path) => info!("Wrote {} patients to {}", patients.len(), path.display()),
        None => debug!(records = patients.len(), "wrote patients to stdout"),
    }
    Ok(patients.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kerala_scrape").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_scrape_whole_sheet_to_csv() {
        let opts = parse(&[]).to_options();
        assert_eq!(opts.scrape.window, RowWindow::default());
        assert_eq!(opts.export.format, ExportFormat::Csv);
        assert!(opts.export.include_headers);
        assert!(matches!(opts.scrape.source, Source::Url(_)));
    }

    #[test]
    fn window_and_format_flags() {
        let opts = parse(&["--start", "3", "--end", "5", "-f", "jsonl", "-o", "-"]).to_options();
        assert_eq!(opts.scrape.window, RowWindow::new(3, 5));
        assert_eq!(opts.export.format, ExportFormat::JsonLines);
        assert!(opts.export.to_stdout());
    }

    #[test]
    fn negative_start_clamps() {
        let opts = parse(&["--start", "-2"]).to_options();
        assert_eq!(opts.scrape.window.start(), 1);
    }

    #[test]
    fn saved_html_replaces_url() {
        let opts = parse(&["--html", "sheet.html", "--no-headers"]).to_options();
        assert_eq!(opts.scrape.source, Source::File(PathBuf::from("sheet.html")));
        assert!(!opts.export.include_headers);
    }
}
