//! Sources module
//!
//! Credential sources the relay exchanges for bearer tokens.

use anyhow::Result;
use reqwest::Client;

pub mod iam;

pub trait FetchToken {
    /// Obtain a fresh bearer token. Implementations never cache.
    fn fetch_token(
        &self,
        client: &Client,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
