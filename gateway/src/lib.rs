//! Typed client for the course notes REST backend.
//!
//! Every request goes through [`client::ApiClient`], which resolves the base
//! address, attaches the session identity headers and turns non-success
//! responses into [`error::ApiError`]. The endpoint functions live in [`api`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, DownloadedFile};
pub use config::{AuthExpiryPolicy, ExpiryReaction, GatewayConfig};
pub use error::ApiError;
