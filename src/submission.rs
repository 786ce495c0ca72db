//! The primary submission channel.
//!
//! The site has no backend yet; [`SimulatedSubmitter`] stands in for one by
//! waiting a fixed delay and accepting every payload.

use crate::form::SubmissionPayload;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission channel unavailable: {0}")]
    Unavailable(String),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Acknowledgement of a delivered submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: String,
    pub accepted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// A receipt stamped now, with a time-based reference.
    pub fn new() -> Self {
        let accepted_at = Utc::now();
        Self {
            reference: format!("MS-{}", accepted_at.format("%Y%m%d%H%M%S%3f")),
            accepted_at,
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivers a form payload somewhere.
pub trait Submitter {
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>> + Send;
}

#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>> + Send {
        let delay = self.delay;
        let kind = payload.kind();
        let images = payload.image_count();

        async move {
            info!("Simulating {} submission ({} images)", kind, images);
            sleep(delay).await;
            Ok(SubmissionReceipt::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormSchema, GeneralInquiry};
    use std::time::Instant;

    #[test]
    fn test_receipt_reference_format() {
        let receipt = SubmissionReceipt::new();
        assert!(receipt.reference.starts_with("MS-"));
        // MS- + yyyymmddHHMMSS + millis
        assert_eq!(receipt.reference.len(), 3 + 14 + 3);
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(
            SimulatedSubmitter::default().delay(),
            Duration::from_millis(1500)
        );
    }

    #[tokio::test]
    async fn test_simulated_submitter_waits_and_accepts() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(20));
        let payload = GeneralInquiry::new().submission_payload();

        let started = Instant::now();
        let receipt = submitter.submit(&payload).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(receipt.accepted_at <= Utc::now());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SubmissionError::Unavailable("timeout".to_string()).to_string(),
            "submission channel unavailable: timeout"
        );
    }
}
