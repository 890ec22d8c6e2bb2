//! Display utilities and progress output for the stocksync CLI.

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use stocksync_lib::prelude::*;
use stocksync_lib::PushReport;

/// Export file format.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

/// One progress bar per push phase.
#[derive(Debug)]
pub(crate) struct PushProgress {
    quiet: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl PushProgress {
    pub(crate) const fn new(quiet: bool) -> Self {
        Self {
            quiet,
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(slot) = self.bar.lock()
            && let Some(bar) = slot.as_ref()
        {
            f(bar);
        }
    }
}

impl SyncProgress for PushProgress {
    fn phase_started(&self, phase: Phase, items: usize) {
        let bar = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(items as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("Invalid progress template")
                    .progress_chars("=>-"),
            );
            pb.set_message(phase.to_string());
            pb
        };
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn batch_pushed(&self, _phase: Phase, items: usize) {
        self.with_bar(|bar| bar.inc(items as u64));
    }

    fn phase_finished(&self, phase: Phase) {
        self.with_bar(|bar| bar.finish_with_message(format!("{phase} pushed")));
    }
}

/// Prints the outcome of one push phase.
pub(crate) fn print_push(label: &str, report: &PushReport) {
    println!(
        "{label}: {} sent in {} batches, {} rejected",
        report.items,
        report.batches,
        report.rejected.len()
    );
}

/// Prints the outcome of a full run.
pub(crate) fn print_summary(summary: &RunSummary) {
    println!(
        "Offers: {}, feed rows: {}, in stock: {}",
        summary.offers, summary.records, summary.in_stock
    );
    print_push("Stocks", &summary.stocks);
    print_push("Prices", &summary.prices);
    println!(
        "Finished in {:.1}s",
        summary.elapsed().num_milliseconds() as f64 / 1000.0
    );
}

/// Describes a failed run, labelled by failure kind.
pub(crate) fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<SyncError>().map(SyncError::kind) {
        Some(FailureKind::Timeout) => format!("request timed out: {err}"),
        Some(FailureKind::Connection) => format!("connection error: {err}"),
        _ => format!("sync failed: {err}"),
    }
}

/// Logs a failed run and prints it to standard output.
pub(crate) fn report_failure(err: &anyhow::Error) {
    let message = failure_message(err);
    tracing::error!("{message}");
    println!("{message}");
}
