//! Request lifecycle controller
//!
//! Owns the request phase and the single call to the generation backend.
//! The in-flight guard lives here rather than in the presentation layer, so
//! overlapping submissions can never install stale replies over fresh ones.

use crate::api::{EmailRequest, GenerateClient, Reply};
use crate::error::GenerationError;

/// Request lifecycle phase. Exactly one is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    Submitting,
    Error(String),
}

impl RequestPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Current user-visible error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

pub struct RequestController {
    client: GenerateClient,
    phase: RequestPhase,
}

impl RequestController {
    pub fn new(client: GenerateClient) -> Self {
        Self {
            client,
            phase: RequestPhase::Idle,
        }
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    /// Validate and submit one generation request.
    ///
    /// Blank input and an in-flight request are rejected before any network
    /// traffic. Otherwise exactly one request is issued, its single response
    /// awaited, and the outcome classified. No automatic retries; a failure
    /// is surfaced and the user may resubmit.
    pub async fn submit(
        &mut self,
        raw_content: &str,
        sender_name: Option<&str>,
        sender_email: Option<&str>,
    ) -> Result<Vec<Reply>, GenerationError> {
        if self.phase.is_submitting() {
            tracing::warn!("submit rejected: request already in flight");
            return Err(GenerationError::InFlight);
        }

        if raw_content.trim().is_empty() {
            self.phase = RequestPhase::Error(GenerationError::Validation.to_string());
            return Err(GenerationError::Validation);
        }

        // Entering Submitting clears any previous error.
        self.phase = RequestPhase::Submitting;

        let request = EmailRequest {
            email_content: raw_content.to_string(),
            sender_name: sender_name.map(str::to_string),
            sender_email: sender_email.map(str::to_string),
        };

        match self.client.generate_replies(&request).await {
            Ok(response) => {
                tracing::debug!(count = response.replies.len(), "generation succeeded");
                self.phase = RequestPhase::Idle;
                Ok(response.replies)
            }
            Err(err) => {
                tracing::warn!("generation failed: {err}");
                self.phase = RequestPhase::Error(err.to_string());
                Err(err)
            }
        }
    }
}
