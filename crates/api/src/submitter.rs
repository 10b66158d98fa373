//! Contact submission delivery.
//!
//! There is no inquiry backend: [`SimulatedSubmitter`] waits a fixed delay
//! and reports success. The [`Submitter`] trait is the seam a real delivery
//! channel would plug into.

use std::time::Duration;

use async_trait::async_trait;
use atelier_core::contact::ContactSubmission;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver one inquiry. A single attempt; callers do not retry.
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Resolves successfully after a fixed delay.
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            name = %submission.name,
            phone = %submission.phone,
            email = ?submission.email,
            project_type = ?submission.project_type,
            submitted_at = %submission.submitted_at,
            "Contact inquiry received"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn simulated_submit_waits_then_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1000));
        let submission = ContactSubmission {
            name: "A".into(),
            phone: "010-1234-5678".into(),
            email: None,
            project_type: None,
            message: "hi".into(),
            submitted_at: Utc::now(),
        };

        let started = tokio::time::Instant::now();
        submitter.submit(&submission).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
