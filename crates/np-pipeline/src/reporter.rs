//! Progress reporting

use std::fmt::Display;

/// Receives progress of the pipeline stages.
///
/// One `step` is followed by exactly one `success` or `failure`. `item`
/// may be called any number of times in between.
pub trait Reporter {
    /// A stage is starting
    fn step(&self, message: &str);

    /// Progress within the current stage
    fn item(&self, _name: &str) {}

    /// The current stage finished
    fn success(&self);

    /// The current stage failed
    fn failure(&self, error: &dyn Display);
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn step(&self, _message: &str) {}

    fn success(&self) {}

    fn failure(&self, _error: &dyn Display) {}
}

/// Run one stage, reporting its start and its outcome
pub fn run_step<T, E, F>(reporter: &dyn Reporter, message: &str, f: F) -> Result<T, E>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    reporter.step(message);
    match f() {
        Ok(value) => {
            reporter.success();
            Ok(value)
        }
        Err(e) => {
            reporter.failure(&e);
            Err(e)
        }
    }
}
