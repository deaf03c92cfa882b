use std::fmt;

use crate::order::{MetaValue, OrderEvent};

pub const DEFAULT_RAM_MB: u32 = 4096;
pub const DEFAULT_SLOTS: u32 = 10;
pub const DEFAULT_VERSION: &str = "1.20.6";
pub const DEFAULT_EMAIL: &str = "no-reply@example.com";
pub const DEFAULT_FIRST_NAME: &str = "Client";

/// Server flavour requested on the order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServerType {
    #[default]
    Paper,
    Vanilla,
    Forge,
    Fabric,
    Other(String),
}

impl ServerType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paper => "paper",
            Self::Vanilla => "vanilla",
            Self::Forge => "forge",
            Self::Fabric => "fabric",
            Self::Other(s) => s,
        }
    }

    /// Jar the egg should boot. Only Paper gets its own jar name.
    pub fn jarfile(&self) -> &'static str {
        match self {
            Self::Paper => "paper.jar",
            _ => "server.jar",
        }
    }
}

impl From<&str> for ServerType {
    fn from(s: &str) -> Self {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "paper" => Self::Paper,
            "vanilla" => Self::Vanilla,
            "forge" => Self::Forge,
            "fabric" => Self::Fabric,
            _ => Self::Other(s),
        }
    }
}

impl From<String> for ServerType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to provision one order, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningConfig {
    pub order_id: u64,
    pub ram_mb: u32,
    pub slots: u32,
    pub version: String,
    pub server_type: ServerType,
    pub subdomain: String,
    pub email: String,
    pub first_name: String,
}

impl ProvisioningConfig {
    /// Extract server options from an order. Never fails: every field has a
    /// default and malformed values are treated as absent.
    pub fn from_order(order: &OrderEvent) -> Self {
        let line = order.first_line_item();
        let line_meta = |key: &str| line.and_then(|l| l.meta(key));

        let ram_mb = line_meta("RAM")
            .and_then(MetaValue::as_positive_u32)
            .unwrap_or(DEFAULT_RAM_MB);
        let slots = line_meta("SLOTS")
            .and_then(MetaValue::as_positive_u32)
            .unwrap_or(DEFAULT_SLOTS);
        let version = line_meta("VERSION")
            .and_then(MetaValue::as_text)
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let server_type = line_meta("TYPE")
            .and_then(MetaValue::as_text)
            .map(ServerType::from)
            .unwrap_or_default();

        let subdomain = order
            .meta("subdomain")
            .and_then(MetaValue::as_text)
            .or_else(|| line_meta("SUBDOMAIN").and_then(MetaValue::as_text))
            .unwrap_or_else(|| format!("srv-{}", order.id));

        let email = non_empty(order.billing.email.as_deref()).unwrap_or(DEFAULT_EMAIL);
        let first_name =
            non_empty(order.billing.first_name.as_deref()).unwrap_or(DEFAULT_FIRST_NAME);

        Self {
            order_id: order.id,
            ram_mb,
            slots,
            version,
            server_type,
            subdomain,
            email: email.to_string(),
            first_name: first_name.to_string(),
        }
    }

    /// Panel-side server name, e.g. `mc-alex-1042`.
    pub fn server_name(&self) -> String {
        format!("mc-{}-{}", self.first_name.to_lowercase(), self.order_id)
    }

    pub fn fqdn(&self, base_domain: &str) -> String {
        format!("{}.{base_domain}", self.subdomain)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn extract(v: Value) -> ProvisioningConfig {
        ProvisioningConfig::from_order(&serde_json::from_value(v).unwrap())
    }

    #[test]
    fn missing_metadata_yields_defaults() {
        let cfg = extract(json!({ "id": 42 }));

        assert_eq!(cfg.ram_mb, 4096);
        assert_eq!(cfg.slots, 10);
        assert_eq!(cfg.version, "1.20.6");
        assert_eq!(cfg.server_type, ServerType::Paper);
        assert_eq!(cfg.subdomain, "srv-42");
        assert_eq!(cfg.email, "no-reply@example.com");
        assert_eq!(cfg.first_name, "Client");
    }

    #[test]
    fn empty_line_item_metadata_yields_defaults() {
        let cfg = extract(json!({ "id": 7, "line_items": [{ "meta_data": [] }] }));
        assert_eq!(
            (cfg.ram_mb, cfg.slots, cfg.version.as_str(), cfg.server_type),
            (4096, 10, "1.20.6", ServerType::Paper)
        );
    }

    #[test]
    fn reads_first_line_item_case_insensitively() {
        let cfg = extract(json!({
            "id": 9,
            "line_items": [
                { "meta_data": [
                    { "key": "ram", "value": "8192" },
                    { "key": "Slots", "value": 32 },
                    { "key": "version", "value": "1.21.1" },
                    { "key": "Type", "value": "Fabric" }
                ]},
                { "meta_data": [{ "key": "RAM", "value": 512 }] }
            ]
        }));

        assert_eq!(cfg.ram_mb, 8192);
        assert_eq!(cfg.slots, 32);
        assert_eq!(cfg.version, "1.21.1");
        assert_eq!(cfg.server_type, ServerType::Fabric);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let cfg = extract(json!({
            "id": 1,
            "line_items": [{ "meta_data": [
                { "key": "RAM", "value": "plenty" },
                { "key": "SLOTS", "value": 0 },
                { "key": "VERSION", "value": "" },
                { "key": "TYPE", "value": true }
            ]}]
        }));

        assert_eq!(cfg.ram_mb, 4096);
        assert_eq!(cfg.slots, 10);
        assert_eq!(cfg.version, "1.20.6");
        assert_eq!(cfg.server_type, ServerType::Paper);
    }

    #[test]
    fn subdomain_prefers_order_meta_then_line_item_then_order_id() {
        let both = extract(json!({
            "id": 42,
            "line_items": [{ "meta_data": [{ "key": "SUBDOMAIN", "value": "from-line" }] }],
            "meta_data": [{ "key": "subdomain", "value": "from-order" }]
        }));
        assert_eq!(both.subdomain, "from-order");

        let line_only = extract(json!({
            "id": 42,
            "line_items": [{ "meta_data": [{ "key": "SUBDOMAIN", "value": "from-line" }] }],
            "meta_data": [{ "key": "subdomain", "value": "" }]
        }));
        assert_eq!(line_only.subdomain, "from-line");

        let neither = extract(json!({ "id": 42, "line_items": [{}] }));
        assert_eq!(neither.subdomain, "srv-42");
    }

    #[test]
    fn billing_falls_back_when_blank() {
        let cfg = extract(json!({
            "id": 3,
            "billing": { "email": "", "first_name": "  " }
        }));
        assert_eq!(cfg.email, "no-reply@example.com");
        assert_eq!(cfg.first_name, "Client");

        let cfg = extract(json!({
            "id": 3,
            "billing": { "email": "alex@example.com", "first_name": "Alex" }
        }));
        assert_eq!(cfg.email, "alex@example.com");
        assert_eq!(cfg.first_name, "Alex");
    }

    #[test]
    fn server_type_keeps_unrecognized_values() {
        assert_eq!(ServerType::from(" PAPER "), ServerType::Paper);
        assert_eq!(ServerType::from("Forge"), ServerType::Forge);
        assert_eq!(ServerType::from("Spigot"), ServerType::Other("spigot".into()));
        assert_eq!(ServerType::from("Spigot").to_string(), "spigot");
    }

    #[test]
    fn only_paper_gets_paper_jar() {
        assert_eq!(ServerType::Paper.jarfile(), "paper.jar");
        for t in ["vanilla", "forge", "fabric", "purpur", ""] {
            assert_eq!(ServerType::from(t).jarfile(), "server.jar", "type {t:?}");
        }
    }

    #[test]
    fn derived_names() {
        let cfg = extract(json!({
            "id": 1042,
            "billing": { "first_name": "Alex" },
            "meta_data": [{ "key": "subdomain", "value": "alexsmp" }]
        }));
        assert_eq!(cfg.server_name(), "mc-alex-1042");
        assert_eq!(cfg.fqdn("cumpara.host"), "alexsmp.cumpara.host");
    }
}
