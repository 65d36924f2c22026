#![deny(warnings)]

//! Advisory text for a finished projection.
//!
//! The engine's figures are rendered into a prompt (see [`AdvisoryRequest`])
//! and sent to an external text-generation service behind the [`Advisor`]
//! trait. Every failure here is recoverable: the projection stays valid and
//! callers only report the error.

use thiserror::Error;
use tracing::{info, warn};

pub mod gemini;
pub mod prompt;

pub use gemini::{GeminiAdvisor, GeminiConfig};
pub use prompt::{AdvisoryFigures, AdvisoryRequest};

/// Errors produced while requesting advisory text.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AdvisorError {
    /// No API key configured.
    #[error("no API key configured for the advisory service")]
    MissingCredential,
    /// Network or client failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),
    /// Service answered with a non-success status.
    #[error("advisory service returned {status}: {message}")]
    Service { status: u16, message: String },
    /// Response body could not be understood.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Service answered without any text.
    #[error("advisory service returned an empty response")]
    EmptyResponse,
}

/// A text-generation backend.
pub trait Advisor {
    /// Generate advisory text for `prompt`.
    fn advise(&self, prompt: &str) -> Result<String, AdvisorError>;
}

/// Render the prompt for `request`, ask `advisor`, and reject blank answers.
pub fn diagnose<A: Advisor + ?Sized>(
    advisor: &A,
    request: &AdvisoryRequest,
) -> Result<String, AdvisorError> {
    let prompt = request.prompt();
    info!(prompt_chars = prompt.len(), "requesting advisory text");
    match advisor.advise(&prompt) {
        Ok(text) if text.trim().is_empty() => {
            warn!("advisory service returned no text");
            Err(AdvisorError::EmptyResponse)
        }
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(error = %e, "advisory request failed");
            Err(e)
        }
    }
}
