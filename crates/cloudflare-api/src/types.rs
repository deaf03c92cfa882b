use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── DNS records ──────────────────────────────────────────────────────

/// Response body of a DNS record call, kept exactly as Cloudflare sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DnsRecordResponse(pub Value);

impl DnsRecordResponse {
    pub fn success(&self) -> bool {
        self.0.get("success").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Id of the created record, if the body carries one.
    pub fn record_id(&self) -> Option<&str> {
        self.0.get("result")?.get("id")?.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordType {
    A,
    #[serde(rename = "AAAA")]
    Aaaa,
    #[serde(rename = "CNAME")]
    Cname,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateDnsRecordRequest {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}
