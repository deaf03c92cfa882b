//! Typed Rust client for the Pterodactyl Panel application API.
//!
//! Covers the subset needed for provisioning game servers:
//! users (lookup by email, create) and servers (create).

mod types;

pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pterodactyl api request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("pterodactyl api {endpoint} returned {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
}

impl Error {
    /// Upstream HTTP status, if the panel answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Api { status, .. } => Some(*status),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Pterodactyl application REST API.
#[derive(Clone)]
pub struct PterodactylClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl PterodactylClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/application{path}", self.base_url)
    }

    fn auth(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    async fn check(resp: reqwest::Response, endpoint: &'static str) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    // ── Users ────────────────────────────────────────────────────────

    /// List users whose email matches `email` exactly.
    pub async fn list_users_by_email(&self, email: &str) -> Result<Vec<User>> {
        let resp = self
            .http
            .get(self.url("/users"))
            .header("Authorization", self.auth())
            .header("Accept", "application/json")
            .query(&[("filter[email]", email)])
            .send()
            .await?;

        let list: List<UserAttributes> = Self::check(resp, "list users").await?.json().await?;
        Ok(list.data)
    }

    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<User> {
        let resp = self
            .http
            .post(self.url("/users"))
            .header("Authorization", self.auth())
            .header("Accept", "application/json")
            .json(req)
            .send()
            .await?;

        Self::check(resp, "create user")
            .await?
            .json()
            .await
            .map_err(Error::from)
    }

    // ── Servers ──────────────────────────────────────────────────────

    pub async fn create_server(&self, req: &CreateServerRequest) -> Result<Server> {
        let resp = self
            .http
            .post(self.url("/servers"))
            .header("Authorization", self.auth())
            .header("Accept", "application/json")
            .json(req)
            .send()
            .await?;

        Self::check(resp, "create server")
            .await?
            .json()
            .await
            .map_err(Error::from)
    }
}
