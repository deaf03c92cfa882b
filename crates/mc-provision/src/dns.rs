use cloudflare_api::{CloudflareClient, CreateDnsRecordRequest, DnsRecordResponse, RecordType};
use tracing::info;

use crate::Result;
use crate::settings::DnsSettings;

pub const RECORD_TTL: u32 = 120;

/// Creates records in a single Cloudflare zone.
pub struct DnsClient {
    client: CloudflareClient,
    zone_id: String,
}

impl DnsClient {
    pub fn new(settings: &DnsSettings) -> Self {
        Self {
            client: CloudflareClient::with_base_url(&settings.api_url, &settings.api_token),
            zone_id: settings.zone_id.clone(),
        }
    }

    /// Point `fqdn` at `ip` through the Cloudflare proxy. Not idempotent:
    /// duplicates are left to Cloudflare to reject.
    pub async fn create_a_record(&self, fqdn: &str, ip: &str) -> Result<DnsRecordResponse> {
        let resp = self
            .client
            .create_dns_record(
                &self.zone_id,
                &CreateDnsRecordRequest {
                    record_type: RecordType::A,
                    name: fqdn.to_string(),
                    content: ip.to_string(),
                    ttl: RECORD_TTL,
                    proxied: true,
                },
            )
            .await?;

        info!(fqdn, ip, record_id = ?resp.record_id(), "dns: record created");
        Ok(resp)
    }
}
