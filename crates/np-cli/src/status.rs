//! Spinner status line for pipeline progress

use indicatif::{ProgressBar, ProgressStyle};
use np_pipeline::Reporter;
use std::cell::RefCell;
use std::fmt::Display;
use std::time::Duration;

/// One spinner per pipeline step, finished with `[OK]` or `[FAIL]`.
///
/// Errors are not printed here; `main` reports them once the command
/// returns.
pub(crate) struct StatusLine {
    current: RefCell<Option<(ProgressBar, String)>>,
}

impl StatusLine {
    pub(crate) fn new() -> Self {
        Self {
            current: RefCell::new(None),
        }
    }

    fn finish(&self, outcome: &str) {
        if let Some((bar, message)) = self.current.borrow_mut().take() {
            bar.finish_with_message(format!("{message} {outcome}"));
        }
    }
}

impl Reporter for StatusLine {
    fn step(&self, message: &str) {
        // a step left open by a caller is closed as unfinished
        self.finish("");
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        *self.current.borrow_mut() = Some((bar, message.to_string()));
    }

    fn item(&self, name: &str) {
        if let Some((bar, message)) = &*self.current.borrow() {
            bar.set_message(format!("{message} {name}"));
        }
    }

    fn success(&self) {
        self.finish("[OK]");
    }

    fn failure(&self, error: &dyn Display) {
        log::debug!("Step failed: {error}");
        self.finish("[FAIL]");
    }
}

impl Drop for StatusLine {
    fn drop(&mut self) {
        self.finish("");
    }
}
