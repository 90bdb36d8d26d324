//! How the order service asks whether a user exists.

use crate::model::UserId;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Outcome of an existence check against the user service.
#[derive(Debug, Clone, PartialEq)]
pub enum UserLookup {
    Found,
    NotFound,
    /// The user service could not give an answer (transport failure, timeout, or an
    /// unexpected status).
    Unreachable(String),
}

/// Source of truth for user existence, injected into the order actor as its context.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    async fn lookup(&self, user_id: UserId) -> UserLookup;
}

/// [`UserDirectory`] backed by the user service's `GET /users/{id}`.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: String,
}

impl HttpUserDirectory {
    /// `base_url` is the user service root, e.g. `http://localhost:5001`. Every lookup is
    /// bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn lookup(&self, user_id: UserId) -> UserLookup {
        let url = format!("{}/users/{}", self.base_url, user_id.0);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(%user_id, error = %e, "User service unavailable");
                return UserLookup::Unreachable(e.to_string());
            }
        };

        match resp.status() {
            status if status.is_success() => {
                debug!(%user_id, "User exists");
                UserLookup::Found
            }
            StatusCode::NOT_FOUND => {
                debug!(%user_id, "User does not exist");
                UserLookup::NotFound
            }
            status => {
                warn!(%user_id, %status, "User service returned an unexpected status");
                UserLookup::Unreachable(format!("User service returned {status}"))
            }
        }
    }
}
