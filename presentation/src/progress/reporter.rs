//! Progress reporting for tutoring calls

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tutor_application::ProgressNotifier;
use tutor_domain::TutorMode;

/// Shows a spinner while a request to the language-model service is in flight
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
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn waiting_message(mode: TutorMode) -> &'static str {
        match mode {
            TutorMode::Review => "Reading the end of your story...",
            _ => "Thinking of a question...",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, mode: TutorMode) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Tutor");
        pb.set_message(Self::waiting_message(mode));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_end(&self, _mode: TutorMode) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, mode: TutorMode) {
        println!("{} {}", "->".cyan(), ProgressReporter::waiting_message(mode));
    }

    fn on_request_end(&self, _mode: TutorMode) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start(TutorMode::Onboarding);
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_request_end(TutorMode::Onboarding);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_end_without_start_is_harmless() {
        let reporter = ProgressReporter::new();
        reporter.on_request_end(TutorMode::Review);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
