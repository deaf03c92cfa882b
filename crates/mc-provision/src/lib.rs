pub mod dns;
pub mod extract;
pub mod order;
pub mod panel;
pub mod provisioner;
pub mod settings;

use async_trait::async_trait;
use cloudflare_api::DnsRecordResponse;

pub use extract::{ProvisioningConfig, ServerType};
pub use order::{MetaValue, OrderEvent};
pub use provisioner::Provisioner;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("provisioning failed: {0}")]
    Provisioning(#[from] pterodactyl_api::Error),

    #[error(transparent)]
    Dns(#[from] cloudflare_api::Error),

    #[error("missing env var: {0}")]
    MissingEnv(String),

    #[error("invalid value for env var {name}: {value:?}")]
    InvalidEnv { name: String, value: String },
}

impl Error {
    /// Upstream HTTP status for panel and DNS failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provisioning(e) => e.status(),
            Self::Dns(e) => e.status(),
            Self::MissingEnv(_) | Self::InvalidEnv { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// What a successful provisioning run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    pub order_id: u64,
    pub user_id: u64,
    pub server_id: Option<u64>,
    pub fqdn: String,
}

/// Turns a completed order into a running game server with a DNS name.
///
/// `Provisioner` is the HTTP-backed implementation; the webhook only depends
/// on this trait.
#[async_trait]
pub trait OrderProvisioner: Send + Sync + 'static {
    /// Panel user, then server, then DNS record, strictly in that order.
    async fn provision(&self, config: &ProvisioningConfig) -> Result<Provisioned>;

    /// Create the fixed `test.<base domain>` record to check DNS credentials.
    async fn create_test_record(&self) -> Result<DnsRecordResponse>;
}
