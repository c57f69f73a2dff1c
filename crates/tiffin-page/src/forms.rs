//! Form submission as an explicit asynchronous operation.
//!
//! Submissions validate locally, then run against a [`RequestBackend`]
//! with a timeout. A spawned submission returns a handle that can be
//! aborted, so an in-flight request is cancellable.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tiffin_commerce::error::CommerceError;
use tiffin_commerce::request::{ContactMessage, DishRequest, SubmitReceipt};

/// Errors surfaced by a form submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Local validation failed; the submission never left the page.
    #[error("Validation failed: {0}")]
    Validation(#[from] CommerceError),

    /// The backend did not answer within the configured timeout.
    #[error("Submission timed out")]
    Timeout,

    /// The submission was cancelled while in flight.
    #[error("Submission cancelled")]
    Cancelled,

    /// The backend reported a failure.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Submit button lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Submission running; button shows its loading state.
    InFlight,
    /// Last submission succeeded.
    Succeeded,
    /// Last submission failed.
    Failed,
}

impl SubmitState {
    /// Whether the button should render its loading treatment.
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitState::InFlight)
    }

    /// Whether the button should be disabled.
    pub fn button_disabled(&self) -> bool {
        self.is_loading()
    }
}

/// Destination for validated form submissions.
#[async_trait]
pub trait RequestBackend: Send + Sync {
    /// Submit a dish request.
    async fn submit_dish_request(&self, request: &DishRequest)
        -> Result<SubmitReceipt, SubmitError>;

    /// Submit a contact message.
    async fn submit_contact(&self, message: &ContactMessage) -> Result<SubmitReceipt, SubmitError>;
}

/// Backend that always succeeds after a fixed delay.
///
/// Stands in for a real service until one exists; the delay makes the
/// loading state observable.
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    /// Create a backend with the given response delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl RequestBackend for SimulatedBackend {
    async fn submit_dish_request(
        &self,
        request: &DishRequest,
    ) -> Result<SubmitReceipt, SubmitError> {
        tokio::time::sleep(self.delay).await;
        Ok(SubmitReceipt::new(format!(
            "Thank you {}! Your request for \"{}\" has been submitted.",
            request.name, request.dish
        )))
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<SubmitReceipt, SubmitError> {
        tokio::time::sleep(self.delay).await;
        Ok(SubmitReceipt::new(format!(
            "Thank you {}! Your message has been submitted. We will contact you within 48 hours.",
            message.name
        )))
    }
}

/// Handle to a spawned submission.
pub struct SubmissionHandle {
    task: tokio::task::JoinHandle<Result<SubmitReceipt, SubmitError>>,
}

impl SubmissionHandle {
    /// Cancel the in-flight submission.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Wait for the submission's outcome.
    pub async fn outcome(self) -> Result<SubmitReceipt, SubmitError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(SubmitError::Cancelled),
            Err(e) => Err(SubmitError::Backend(e.to_string())),
        }
    }
}

/// Drives validated submissions against a backend with a timeout.
#[derive(Clone)]
pub struct Submitter {
    backend: Arc<dyn RequestBackend>,
    timeout: Duration,
}

impl Submitter {
    /// Create a submitter.
    pub fn new(backend: Arc<dyn RequestBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Validate and submit a dish request, waiting for the outcome.
    pub async fn dish_request(&self, request: DishRequest) -> Result<SubmitReceipt, SubmitError> {
        request.validate()?;
        match tokio::time::timeout(self.timeout, self.backend.submit_dish_request(&request)).await {
            Ok(result) => result,
            Err(_) => Err(SubmitError::Timeout),
        }
    }

    /// Validate and submit a contact message, waiting for the outcome.
    pub async fn contact(&self, message: ContactMessage) -> Result<SubmitReceipt, SubmitError> {
        message.validate()?;
        match tokio::time::timeout(self.timeout, self.backend.submit_contact(&message)).await {
            Ok(result) => result,
            Err(_) => Err(SubmitError::Timeout),
        }
    }

    /// Spawn a dish request as a cancellable task.
    pub fn spawn_dish_request(&self, request: DishRequest) -> SubmissionHandle {
        let backend = Arc::clone(&self.backend);
        let timeout = self.timeout;
        let task = tokio::spawn(async move {
            request.validate().map_err(SubmitError::from)?;
            match tokio::time::timeout(timeout, backend.submit_dish_request(&request)).await {
                Ok(result) => result,
                Err(_) => Err(SubmitError::Timeout),
            }
        });
        SubmissionHandle { task }
    }

    /// Spawn a contact message as a cancellable task.
    pub fn spawn_contact(&self, message: ContactMessage) -> SubmissionHandle {
        let backend = Arc::clone(&self.backend);
        let timeout = self.timeout;
        let task = tokio::spawn(async move {
            message.validate().map_err(SubmitError::from)?;
            match tokio::time::timeout(timeout, backend.submit_contact(&message)).await {
                Ok(result) => result,
                Err(_) => Err(SubmitError::Timeout),
            }
        });
        SubmissionHandle { task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitter(delay_ms: u64, timeout_ms: u64) -> Submitter {
        Submitter::new(
            Arc::new(SimulatedBackend::new(Duration::from_millis(delay_ms))),
            Duration::from_millis(timeout_ms),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_dish_request_succeeds_after_delay() {
        let submitter = submitter(1500, 5000);
        let request = DishRequest::new(Some("Biryani".to_string()), "Asha", "asha@example.com");

        let receipt = submitter.dish_request(request).await.unwrap();
        assert_eq!(
            receipt.message,
            "Thank you Asha! Your request for \"Biryani\" has been submitted."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_succeeds_after_delay() {
        let submitter = submitter(1500, 5000);
        let message = ContactMessage::new("Asha", "asha@example.com", "Loved the thali!");

        let receipt = submitter.contact(message).await.unwrap();
        assert!(receipt.message.starts_with("Thank you Asha!"));
    }

    #[tokio::test]
    async fn test_validation_aborts_before_backend() {
        let submitter = submitter(1500, 5000);
        let request = DishRequest::new(None, "", "asha@example.com");

        let result = submitter.dish_request(request).await;
        assert!(matches!(result, Err(SubmitError::Validation(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_backend_times_out() {
        let submitter = submitter(10_000, 100);
        let request = DishRequest::new(None, "Asha", "asha@example.com");

        let result = submitter.dish_request(request).await;
        assert!(matches!(result, Err(SubmitError::Timeout)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_submission_is_cancellable() {
        let submitter = submitter(10_000, 60_000);
        let request = DishRequest::new(None, "Asha", "asha@example.com");

        let handle = submitter.spawn_dish_request(request);
        handle.abort();

        let result = handle.outcome().await;
        assert!(matches!(result, Err(SubmitError::Cancelled)));
    }
}
