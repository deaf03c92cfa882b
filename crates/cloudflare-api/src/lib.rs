//! Typed Rust client for the Cloudflare v4 API.
//!
//! Covers DNS record creation only.

mod types;

pub use types::*;

pub const BASE_URL: &str = "https://api.cloudflare.com/client/v4";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cloudflare api request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Cloudflare API error: {status} - {body}")]
    Api { status: u16, body: String },
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Api { status, .. } => Some(*status),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Cloudflare REST API, authenticated with an API token.
#[derive(Clone)]
pub struct CloudflareClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl CloudflareClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(BASE_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    // ── DNS records ──────────────────────────────────────────────────

    pub async fn create_dns_record(
        &self,
        zone_id: &str,
        req: &CreateDnsRecordRequest,
    ) -> Result<DnsRecordResponse> {
        let resp = self
            .http
            .post(self.url(&format!("/zones/{zone_id}/dns_records")))
            .header("Authorization", self.auth())
            .json(req)
            .send()
            .await?;

        Self::check(resp).await?.json().await.map_err(Error::from)
    }
}
