//! Progress reporting while a reading is produced

use chatlens_application::ReadingProgressNotifier;
use chatlens_domain::{AnalysisRequest, Reading};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingProgressNotifier for ProgressReporter {
    fn on_request_prepared(&self, request: &AnalysisRequest) {
        eprintln!(
            "{} {} ({}, {} vs {})",
            "->".cyan(),
            "Prepared request".bold(),
            request.format,
            request.speakers.self_name,
            request.speakers.other_name
        );
    }

    fn on_analysis_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Analysis");
        pb.set_message("waiting for result...");
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_analysis_complete(&self, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{}", "done".green()));
        } else {
            pb.finish_with_message(format!("{}", "failed".red()));
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl ReadingProgressNotifier for SimpleProgress {
    fn on_request_prepared(&self, request: &AnalysisRequest) {
        eprintln!("{} {} text", "->".cyan(), request.format);
    }

    fn on_analysis_complete(&self, success: bool) {
        if success {
            eprintln!("  {} analysis", "v".green());
        } else {
            eprintln!("  {} analysis (failed)", "x".red());
        }
    }

    fn on_reading_ready(&self, reading: &Reading) {
        eprintln!(
            "  {} {} evidence item(s)",
            "v".green(),
            reading.evidence.len() + reading.hidden_evidence
        );
    }
}
