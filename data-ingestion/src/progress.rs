//! Terminal progress rendering for an import run.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use data_ingestion_pipeline::ImportOutcome;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({eta})";

/// Renders import progress and the final summary.
///
/// Offsets reported to the operator are absolute positions in the input
/// file, so a run started with `--resume-from` still prints the value to pass
/// on the next attempt.
pub struct ProgressReporter {
    bar: ProgressBar,
    index_name: String,
    base_offset: usize,
}

impl ProgressReporter {
    /// Create a reporter drawing a progress bar on stdout.
    pub fn new(total: usize, base_offset: usize, index_name: impl Into<String>) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
        bar.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        Self {
            bar,
            index_name: index_name.into(),
            base_offset,
        }
    }

    /// Create a reporter that draws nothing.
    pub fn hidden(total: usize, base_offset: usize, index_name: impl Into<String>) -> Self {
        Self {
            bar: ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden()),
            index_name: index_name.into(),
            base_offset,
        }
    }

    /// Records reported as imported so far.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Record `count` more imported records.
    pub fn advance(&self, count: usize) {
        self.bar.inc(count as u64);
    }

    /// Stop the bar where the run failed. The summary describes the failure.
    pub fn batch_failed(&self) {
        self.bar.abandon();
    }

    /// Whether the bar has been closed.
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Close the bar and print the summary.
    pub fn finish(&self, outcome: &ImportOutcome) {
        if outcome.is_completed() {
            self.bar.finish();
        } else if !self.bar.is_finished() {
            self.bar.abandon();
        }

        for (i, line) in summary_lines(outcome, &self.index_name, self.base_offset)
            .iter()
            .enumerate()
        {
            match (outcome.is_completed(), i) {
                (true, _) => println!("{}", line.green()),
                (false, 0) => println!("{}", line.red().bold()),
                (false, _) => println!("  {}", line),
            }
        }
    }
}

/// Plain-text summary of a finished run.
pub fn summary_lines(outcome: &ImportOutcome, index_name: &str, base_offset: usize) -> Vec<String> {
    match outcome {
        ImportOutcome::Completed { records_processed } => vec![format!(
            "✓ Imported {} records into index '{}'",
            records_processed, index_name
        )],
        ImportOutcome::Failed {
            error,
            batch,
            records_processed,
        } => vec![
            format!("✗ Import into index '{}' aborted: {}", index_name, error.cause),
            format!(
                "Failed batch: offset {}, {} records",
                base_offset + batch.offset,
                batch.len()
            ),
            format!("Records imported before the failure: {}", records_processed),
            format!("Resume with: --resume-from {}", base_offset + records_processed),
        ],
    }
}
