//! Deployment lifecycle reconciler for the Searchwave control plane.
//!
//! This crate turns desired-state requests — create, replace, or delete a
//! deployment or one of its Solr auth users — into the API call sequence the
//! backend needs, plus the polling loop that waits for its asynchronous
//! provisioning to converge.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              caller (IaC tool)              │
//! └─────────────────────────────────────────────┘
//!                       │ desired record
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │                 Reconciler                  │
//! │   create / replace / delete + poll loop     │
//! └─────────────────────────────────────────────┘
//!                       │ DeploymentBackend
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │        ApiClient (searchwave-api)           │
//! └─────────────────────────────────────────────┘
//!                       │ JSON over HTTPS
//!                       ▼
//!                Searchwave backend
//! ```
//!
//! # Convergence
//!
//! A deployment is converged once the backend reports `status == "Running"`
//! and `provision_state == "Done"`; `status == "Failed"` is the terminal
//! failure. Anything else means provisioning is still in flight and the
//! reconciler keeps polling at a fixed interval, bounded by the configured
//! poll budget.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use searchwave_api::{ApiClient, ApiConfig, Deployment};
//! use searchwave_control::Reconciler;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::new("user@example.com", "secret");
//! let client = Arc::new(ApiClient::sign_in(&config).await?);
//! let reconciler = Reconciler::with_defaults(client);
//!
//! let desired = Deployment {
//!     name: "search-prod".to_string(),
//!     application: "Solr".to_string(),
//!     application_version: "8.11.2".to_string(),
//!     tier: "Gold".to_string(),
//!     ..Deployment::default()
//! };
//!
//! // Blocks (asynchronously) until the cluster is Running+Done or Failed.
//! let deployment = reconciler.create_deployment("acct1", &desired).await?;
//! println!("endpoint: {}", deployment.http_endpoint);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod backend;
pub mod error;
pub mod lifecycle;
pub mod reconciler;

pub use backend::DeploymentBackend;
pub use error::{ControlError, Result};
pub use lifecycle::Phase;
pub use reconciler::{PollPolicy, Reconciler, ReconcilerConfig};

// Re-export the record types callers hand to the reconciler.
pub use searchwave_api::{Deployment, DeploymentUser};
