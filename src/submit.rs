//! Submission handler seam
//!
//! The form never talks to a backend; submission goes through this trait so
//! the flow stays testable and a real sink can be dropped in later.

use crate::state::FormValues;
use thiserror::Error;

/// Submission failure surfaced in the status bar
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Receives the snapshot of values from a successful validation pass
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn submit(&mut self, values: &FormValues) -> Result<(), SubmitError>;
}

/// Default handler: logs the snapshot and succeeds
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn submit(&mut self, values: &FormValues) -> Result<(), SubmitError> {
        let snapshot = serde_json::to_string_pretty(values).unwrap_or_default();
        tracing::info!("form submitted:\n{snapshot}");
        Ok(())
    }
}
