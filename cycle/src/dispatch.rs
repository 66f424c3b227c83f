//! Module with [`Dispatch`] trait and the platform-independent part of the `analyze-url` protocol.

use std::future::Future;

use detective_data_model::{AnalysisRequest, AnalysisResponse, AnalysisResult};
use tracing::warn;

/// Path of the analysis endpoint, relative to the page.
pub const ANALYZE_ENDPOINT: &str = "analyze-url";

/// Shown when the service didn't tell what went wrong.
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not retrieve the analysis result";

/// Failure shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct AnalysisError {
    pub message: String,
}

impl AnalysisError {
    /// Create a new error with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error during a single `analyze-url` request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, displaydoc::Display)]
pub enum DispatchError {
    /// Failed to encode request: {0}
    Encode(String),
    /// Failed to reach the analysis service: {0}
    Transport(String),
    /// Analysis service responded with status {status}
    Status {
        /// HTTP status of the response.
        status: u16,
        /// Message provided by the service.
        message: Option<String>,
    },
    /// Analysis service responded without a result
    MissingResult {
        /// Message provided by the service.
        message: Option<String>,
    },
    /// Failed to decode analysis response: {0}
    Decode(String),
}

impl DispatchError {
    /// Message provided by the analysis service, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::MissingResult { message } => message.as_deref(),
            Self::Encode(_) | Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl From<DispatchError> for AnalysisError {
    fn from(error: DispatchError) -> Self {
        Self::new(error.server_message().unwrap_or(GENERIC_FAILURE_MESSAGE))
    }
}

/// Sender of `analyze-url` requests.
///
/// Exactly one [`submit()`](Dispatch::submit) is in flight per cycle and it's never retried.
/// Dropping the returned future abandons the request.
pub trait Dispatch {
    /// Send `request` and wait for the outcome.
    fn submit(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>>;
}

/// Encode `request` into the JSON body of `analyze-url`.
///
/// # Errors
///
/// Fails if `serde_json` fails to serialize the request.
pub fn encode_request(request: &AnalysisRequest) -> Result<String, DispatchError> {
    serde_json::to_string(request).map_err(|err| DispatchError::Encode(err.to_string()))
}

/// Turn a raw `analyze-url` response into its outcome.
///
/// # Errors
///
/// Fails on a non-2xx `status`, on a body which is not a valid envelope and on an envelope without
/// a result.
pub fn decode_response(status: u16, body: &str) -> Result<AnalysisResult, DispatchError> {
    let success = (200..300).contains(&status);

    let response = match serde_json::from_str::<AnalysisResponse>(body) {
        Ok(response) => response,
        Err(_err) if !success => {
            return Err(DispatchError::Status {
                status,
                message: None,
            });
        }
        Err(err) => return Err(DispatchError::Decode(err.to_string())),
    };
    let message = response.error_message().map(ToOwned::to_owned);

    if !success {
        return Err(DispatchError::Status { status, message });
    }
    response
        .result
        .ok_or(DispatchError::MissingResult { message })
}

/// Log the failure of a request and convert it into the user-facing [`AnalysisError`].
///
/// # Errors
///
/// Passes `outcome` errors through as [`AnalysisError`].
pub fn settle(
    outcome: Result<AnalysisResult, DispatchError>,
) -> Result<AnalysisResult, AnalysisError> {
    outcome.map_err(|error| {
        warn!(%error, "Analysis request failed");
        error.into()
    })
}
