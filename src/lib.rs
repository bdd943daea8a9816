//! # Incident Relay
//!
//! Accepts an incident alert over HTTP, exchanges an IBM Cloud API key for
//! an IAM bearer token, asks a watsonx.ai model for a structured incident
//! report and hands the provider's raw JSON back to the caller.
//!
//! Modules:
//! - `config` — service configuration, loading and validation
//! - `sources` — bearer token sources (IAM API-key exchange)
//! - `relay` — prompt construction and the generation call
//! - `server` — axum surface (`/api/orchestrate`, `/health`, metrics)

pub mod config;
pub mod observability;
pub mod relay;
pub mod server;
pub mod sources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::config::service::ServiceConfig;
pub use crate::relay::Relay;
