//! Create/replace/delete orchestration with convergence polling.
//!
//! The backend provisions clusters asynchronously over minutes; the only
//! observable contract is the `status` / `provision_state` pair on the
//! deployment record. The reconciler issues the mutation, then polls the
//! deployment at a fixed cadence until a terminal phase is observed. Failed
//! API calls are never retried; only the still-provisioning poll repeats.

use std::sync::Arc;
use std::time::Duration;

use searchwave_api::{Deployment, DeploymentUser};

use crate::backend::DeploymentBackend;
use crate::error::{ControlError, Result};
use crate::lifecycle::Phase;

/// How the reconciler polls for convergence.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Delay between status fetches.
    pub interval: Duration,
    /// Maximum number of polls before giving up; `None` polls forever.
    pub max_polls: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            max_polls: Some(240), // four hours at the default interval
        }
    }
}

/// Configuration for the reconciler.
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Convergence polling policy.
    pub poll: PollPolicy,
    /// Wait between the delete and create phases of a deployment replace.
    pub replace_delay: Duration,
    /// Wait between the delete and create phases of a user replace.
    pub user_replace_delay: Duration,
    /// Treat a still-converged deployment as deleted during the post-delete
    /// wait. Only useful against test doubles that never remove resources;
    /// a real backend makes the status fetch fail once the resource is gone.
    pub converged_means_deleted: bool,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            poll: PollPolicy::default(),
            replace_delay: Duration::from_secs(60),
            user_replace_delay: Duration::from_secs(5),
            converged_means_deleted: false,
        }
    }
}

/// Drives deployments and their auth users to a desired terminal state.
///
/// Each call occupies its future until the backend reports a terminal
/// condition; sleeps go through `tokio::time::sleep`, so the runtime stays
/// free for other work. The reconciler holds no state across calls.
pub struct Reconciler<B: DeploymentBackend> {
    backend: Arc<B>,
    config: ReconcilerConfig,
}

impl<B: DeploymentBackend> Reconciler<B> {
    /// Create a reconciler over the given backend.
    #[must_use]
    pub fn new(backend: Arc<B>, config: ReconcilerConfig) -> Self {
        Self { backend, config }
    }

    /// Create with the default configuration.
    #[must_use]
    pub fn with_defaults(backend: Arc<B>) -> Self {
        Self::new(backend, ReconcilerConfig::default())
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    // =========================================================================
    // Deployment lifecycle
    // =========================================================================

    /// Create a deployment and wait for it to converge.
    ///
    /// Returns the created record with `status`, `provision_state`, and
    /// `http_endpoint` copied from the converged backend state.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::ProvisioningFailed`] if the backend reports
    /// `Failed`, [`ControlError::ConvergenceTimeout`] if the poll budget runs
    /// out, or the underlying API error if any call fails.
    pub async fn create_deployment(
        &self,
        account: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        let mut created = self.backend.create_deployment(account, deployment).await?;
        tracing::debug!(account, uid = %created.uid, "deployment accepted, waiting for convergence");

        let converged = self.await_convergence(account, &created.uid).await?;
        created.status = converged.status;
        created.provision_state = converged.provision_state;
        created.http_endpoint = converged.http_endpoint;

        tracing::info!(account, uid = %created.uid, endpoint = %created.http_endpoint, "deployment converged");
        Ok(created)
    }

    /// Delete a deployment and wait until the backend no longer resolves it.
    ///
    /// Deletion is idempotent from the caller's view: a failing status fetch
    /// after the delete was accepted means the resource is gone.
    ///
    /// # Errors
    ///
    /// Returns [`searchwave_api::ApiError::Rejected`] (wrapped) immediately,
    /// with zero polls, when the backend's envelope refuses the deletion.
    pub async fn delete_deployment(&self, account: &str, uid: &str) -> Result<()> {
        self.backend.delete_deployment(account, uid).await?;
        self.await_deletion(account, uid, self.config.converged_means_deleted)
            .await
    }

    /// Replace a deployment: delete the old cluster, wait, create the new
    /// one.
    ///
    /// The backend offers no in-place update, so every replace tears the
    /// cluster down and rebuilds it; uid and endpoint continuity are lost.
    /// The two phases fail distinctly:
    ///
    /// - [`ControlError::DeletePhase`]: the old cluster is untouched and no
    ///   create was attempted.
    /// - [`ControlError::CreatePhase`]: the old cluster is gone and nothing
    ///   replaced it.
    ///
    /// # Errors
    ///
    /// See above; the partial-failure state is always surfaced, never
    /// swallowed.
    pub async fn replace_deployment(
        &self,
        account: &str,
        uid: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        self.delete_deployment(account, uid)
            .await
            .map_err(|e| ControlError::DeletePhase(Box::new(e)))?;

        tokio::time::sleep(self.config.replace_delay).await;

        self.create_deployment(account, deployment)
            .await
            .map_err(|e| ControlError::CreatePhase(Box::new(e)))
    }

    // =========================================================================
    // User lifecycle
    // =========================================================================

    /// Create a Solr auth user. Synchronous on the backend side; no
    /// convergence wait.
    ///
    /// # Errors
    ///
    /// Returns the underlying API error if the call fails or is rejected.
    pub async fn create_user(
        &self,
        account: &str,
        uid: &str,
        user: &DeploymentUser,
    ) -> Result<DeploymentUser> {
        Ok(self
            .backend
            .create_deployment_user(account, uid, user)
            .await?)
    }

    /// Delete a Solr auth user, confirming completion against the owning
    /// deployment's status.
    ///
    /// The backend exposes no per-user status, so the post-delete check
    /// fetches the owning deployment instead: either the fetch fails (the
    /// whole deployment is gone) or the deployment reports converged, which
    /// here confirms the backend has settled after the user change.
    ///
    /// # Errors
    ///
    /// Returns the envelope rejection immediately, with zero polls.
    pub async fn delete_user(&self, account: &str, uid: &str, username: &str) -> Result<()> {
        self.backend
            .delete_deployment_user(account, uid, username)
            .await?;
        self.await_deletion(account, uid, true).await
    }

    /// Replace a user: delete, short fixed wait, create.
    ///
    /// Same two-phase failure split as [`Reconciler::replace_deployment`].
    ///
    /// # Errors
    ///
    /// [`ControlError::DeletePhase`] or [`ControlError::CreatePhase`],
    /// wrapping the underlying failure.
    pub async fn replace_user(
        &self,
        account: &str,
        uid: &str,
        user: &DeploymentUser,
    ) -> Result<DeploymentUser> {
        self.delete_user(account, uid, &user.username)
            .await
            .map_err(|e| ControlError::DeletePhase(Box::new(e)))?;

        tokio::time::sleep(self.config.user_replace_delay).await;

        self.create_user(account, uid, user)
            .await
            .map_err(|e| ControlError::CreatePhase(Box::new(e)))
    }

    // =========================================================================
    // Polling
    // =========================================================================

    /// Poll until the deployment reaches a terminal phase.
    async fn await_convergence(&self, account: &str, uid: &str) -> Result<Deployment> {
        let mut polls = 0u32;
        loop {
            let fetched = self.backend.get_deployment(account, uid).await?;
            polls += 1;

            match Phase::of(&fetched) {
                Phase::Converged => return Ok(fetched),
                Phase::Failed => {
                    tracing::error!(account, uid, status = %fetched.status, "provisioning failed");
                    return Err(ControlError::ProvisioningFailed {
                        status: fetched.status,
                    });
                }
                Phase::Provisioning => {
                    if let Some(max) = self.config.poll.max_polls {
                        if polls >= max {
                            return Err(ControlError::ConvergenceTimeout { polls });
                        }
                    }
                    tracing::debug!(account, uid, polls, "still provisioning");
                    tokio::time::sleep(self.config.poll.interval).await;
                }
            }
        }
    }

    /// Poll until the deployment stops resolving.
    async fn await_deletion(&self, account: &str, uid: &str, accept_converged: bool) -> Result<()> {
        let mut polls = 0u32;
        loop {
            match self.backend.get_deployment(account, uid).await {
                Err(err) => {
                    tracing::debug!(account, uid, %err, "deployment no longer resolvable, delete complete");
                    return Ok(());
                }
                Ok(fetched) if accept_converged && Phase::of(&fetched) == Phase::Converged => {
                    return Ok(());
                }
                Ok(_) => {
                    polls += 1;
                    if let Some(max) = self.config.poll.max_polls {
                        if polls >= max {
                            return Err(ControlError::ConvergenceTimeout { polls });
                        }
                    }
                    tokio::time::sleep(self.config.poll.interval).await;
                }
            }
        }
    }
}
