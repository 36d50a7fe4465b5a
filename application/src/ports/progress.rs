//! Progress notification port
//!
//! Lets the presentation layer show that the tutor is waiting on the
//! language-model service.

use tutor_domain::TutorMode;

/// Callback for progress updates during a tutoring call
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the outbound request, after the gate admitted the call.
    fn on_request_start(&self, mode: TutorMode);

    /// Called once the response (or its error string) is available.
    fn on_request_end(&self, mode: TutorMode);
}

/// No-op notifier
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _mode: TutorMode) {}
    fn on_request_end(&self, _mode: TutorMode) {}
}
