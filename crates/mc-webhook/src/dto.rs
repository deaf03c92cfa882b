use cloudflare_api::DnsRecordResponse;
use serde::Serialize;

/// Acknowledgement returned to the store before any provisioning happens.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[derive(Debug, Serialize)]
pub struct TestDnsResponse {
    pub ok: bool,
    pub dns: DnsRecordResponse,
}
