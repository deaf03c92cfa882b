use async_trait::async_trait;
use cloudflare_api::DnsRecordResponse;
use tracing::info;

use crate::dns::DnsClient;
use crate::extract::ProvisioningConfig;
use crate::panel::PanelClient;
use crate::settings::{DnsSettings, PanelSettings};
use crate::{OrderProvisioner, Provisioned, Result};

pub const TEST_SUBDOMAIN: &str = "test";

/// Pterodactyl + Cloudflare provisioner.
pub struct Provisioner {
    panel: PanelClient,
    dns: DnsClient,
    origin_ip: String,
    base_domain: String,
}

impl Provisioner {
    pub fn new(panel: &PanelSettings, dns: &DnsSettings) -> Self {
        Self {
            panel: PanelClient::new(panel),
            dns: DnsClient::new(dns),
            origin_ip: dns.origin_ip.clone(),
            base_domain: dns.base_domain.clone(),
        }
    }

    /// Bind all settings from the environment, failing on the first missing one.
    pub fn from_env() -> Result<Self> {
        let panel = PanelSettings::from_env()?;
        let dns = DnsSettings::from_env()?;
        info!(
            panel = %panel.url,
            egg = panel.egg,
            nest = panel.nest,
            location = panel.location,
            base_domain = %dns.base_domain,
            "provisioner configured"
        );
        Ok(Self::new(&panel, &dns))
    }
}

#[async_trait]
impl OrderProvisioner for Provisioner {
    async fn provision(&self, config: &ProvisioningConfig) -> Result<Provisioned> {
        let user_id = self
            .panel
            .find_or_create_user(&config.email, &config.first_name)
            .await?;

        let server = self.panel.create_server(user_id, config).await?;

        let fqdn = config.fqdn(&self.base_domain);
        self.dns.create_a_record(&fqdn, &self.origin_ip).await?;

        Ok(Provisioned {
            order_id: config.order_id,
            user_id,
            server_id: server.attributes.id,
            fqdn,
        })
    }

    async fn create_test_record(&self) -> Result<DnsRecordResponse> {
        let fqdn = format!("{TEST_SUBDOMAIN}.{}", self.base_domain);
        self.dns.create_a_record(&fqdn, &self.origin_ip).await
    }
}
