//! Typed client for the Searchwave deployment API.
//!
//! This crate provides [`ApiClient`], a thin JSON-over-HTTPS client for the
//! Searchwave control plane: token sign-in, deployment CRUD, Solr auth user
//! management, and private VPC listing.
//!
//! The client performs no lifecycle orchestration of its own. Creating a
//! deployment returns as soon as the backend has accepted the request and
//! assigned a uid; provisioning continues asynchronously on the backend for
//! minutes afterwards. See the `searchwave-control` crate for the reconciler
//! that polls deployments to a terminal state.
//!
//! # Example
//!
//! ```no_run
//! use searchwave_api::{ApiClient, ApiConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::new("user@example.com", "secret");
//! let client = ApiClient::sign_in(&config).await?;
//!
//! let deployments = client.list_deployments("acct1").await?;
//! println!("{} deployments", deployments.count);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod config;
pub mod deployment;
pub mod error;
pub mod user;
pub mod vpc;

pub use client::{ApiClient, DeleteEnvelope};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use deployment::{Deployment, DeploymentList};
pub use error::{ApiError, Result};
pub use user::{DeploymentUser, DeploymentUserList};
pub use vpc::{PrivateVpc, PrivateVpcList};
