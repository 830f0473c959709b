//! Error types for the lifecycle reconciler.

use searchwave_api::ApiError;
use thiserror::Error;

/// A result type using `ControlError`.
pub type Result<T> = std::result::Result<T, ControlError>;

/// Errors that can occur while reconciling deployment lifecycles.
#[derive(Debug, Error)]
pub enum ControlError {
    /// An underlying API call failed. Never retried.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// The backend reported the deployment as failed during the convergence
    /// wait.
    #[error("provisioning failed with status {status}")]
    ProvisioningFailed {
        /// Status string reported by the backend.
        status: String,
    },

    /// The convergence wait ran out of its poll budget without observing a
    /// terminal state.
    #[error("no terminal state observed within {polls} polls")]
    ConvergenceTimeout {
        /// Number of status polls performed before giving up.
        polls: u32,
    },

    /// The delete phase of a replace failed; nothing was recreated and the
    /// existing resource is untouched.
    #[error("delete phase of replace failed: {0}")]
    DeletePhase(#[source] Box<ControlError>),

    /// The create phase of a replace failed; the old resource is already
    /// gone and no replacement exists.
    #[error("create phase of replace failed: {0}")]
    CreatePhase(#[source] Box<ControlError>),
}

impl ControlError {
    /// True when a replace left a partial state behind: the old resource was
    /// deleted but no replacement was created.
    #[must_use]
    pub const fn is_partial_replace(&self) -> bool {
        matches!(self, Self::CreatePhase(_))
    }
}
