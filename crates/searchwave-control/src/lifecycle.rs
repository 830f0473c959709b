//! Deployment convergence phases.
//!
//! The backend reports lifecycle progress through two string fields,
//! `status` and `provision_state`. This module folds them into the phase
//! model the reconciler polls against.
//!
//! # State Machine
//!
//! ```text
//! Absent --create--> Provisioning --[Running+Done]--> Converged
//!                          |
//!                          └--[Failed]--> Failed (terminal, reported)
//!
//! Converged --delete--> (deleting) --[get fails]--> Absent
//! Converged --replace--> Absent --(delay)--> Provisioning --> Converged
//! ```
//!
//! Absence has no phase of its own: it is observed as a failing status
//! fetch.

use searchwave_api::Deployment;

/// Backend status string for a running deployment.
pub const STATUS_RUNNING: &str = "Running";
/// Backend status string for a failed deployment.
pub const STATUS_FAILED: &str = "Failed";
/// Backend provision state once provisioning has finished.
pub const PROVISION_DONE: &str = "Done";

/// Convergence phase of a deployment as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Any non-terminal status combination; keep polling.
    Provisioning,
    /// `Running` + `Done`: terminal success, the only success exit.
    Converged,
    /// `Failed`: terminal failure, reported without retry.
    Failed,
}

impl Phase {
    /// Classify a backend-reported deployment record.
    #[must_use]
    pub fn of(deployment: &Deployment) -> Self {
        if deployment.status == STATUS_RUNNING && deployment.provision_state == PROVISION_DONE {
            Self::Converged
        } else if deployment.status == STATUS_FAILED {
            Self::Failed
        } else {
            Self::Provisioning
        }
    }

    /// True for phases where no further transition is expected without a new
    /// operation.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Converged | Self::Failed)
    }
}
