use thiserror::Error;

/// Failure of an outbound call to the GitHub API, normalized so callers
/// never have to inspect reqwest internals.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The remote call failed: transport error, non-2xx status, or a body
    /// that did not decode. `status` is present when the remote answered.
    #[error("failed to {operation}: {message}")]
    RemoteCallFailed {
        operation: &'static str,
        status: Option<u16>,
        message: String,
    },
}

impl ServiceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::RemoteCallFailed { status, .. } => *status,
        }
    }
}
