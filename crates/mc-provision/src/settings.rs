//! Provisioning settings, bound once from the environment at startup.

use crate::{Error, Result};

pub const DEFAULT_EGG: u32 = 2;
pub const DEFAULT_NEST: u32 = 1;
pub const DEFAULT_LOCATION: u32 = 1;
pub const DEFAULT_BASE_DOMAIN: &str = "cumpara.host";

/// Pterodactyl panel access and deployment template.
#[derive(Debug, Clone)]
pub struct PanelSettings {
    pub url: String,
    pub api_key: String,
    pub egg: u32,
    pub nest: u32,
    pub location: u32,
}

impl PanelSettings {
    /// Create from env vars:
    ///
    /// - `PANEL_URL` (required)
    /// - `PTERO_APP_KEY` (required)
    /// - `MC_EGG` (default: 2)
    /// - `MC_NEST` (default: 1)
    /// - `PTERO_LOCATION` (default: 1)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            url: required(&var, "PANEL_URL")?
                .trim_end_matches('/')
                .to_string(),
            api_key: required(&var, "PTERO_APP_KEY")?,
            egg: number_or(&var, "MC_EGG", DEFAULT_EGG)?,
            nest: number_or(&var, "MC_NEST", DEFAULT_NEST)?,
            location: number_or(&var, "PTERO_LOCATION", DEFAULT_LOCATION)?,
        })
    }
}

/// Cloudflare zone access plus the record target.
#[derive(Debug, Clone)]
pub struct DnsSettings {
    pub zone_id: String,
    pub api_token: String,
    pub api_url: String,
    pub origin_ip: String,
    pub base_domain: String,
}

impl DnsSettings {
    /// Create from env vars:
    ///
    /// - `CF_ZONE_ID` (required)
    /// - `CF_API_TOKEN` (required)
    /// - `NODE_IP` (required)
    /// - `CF_API_URL` (default: the public v4 endpoint)
    /// - `BASE_DOMAIN` (default: `"cumpara.host"`)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            zone_id: required(&var, "CF_ZONE_ID")?,
            api_token: required(&var, "CF_API_TOKEN")?,
            api_url: optional(&var, "CF_API_URL")
                .unwrap_or_else(|| cloudflare_api::BASE_URL.to_string()),
            origin_ip: required(&var, "NODE_IP")?,
            base_domain: optional(&var, "BASE_DOMAIN")
                .map(|d| d.trim_matches('.').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_DOMAIN.to_string()),
        })
    }
}

fn optional(var: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    var(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(var: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    optional(var, name).ok_or_else(|| Error::MissingEnv(name.to_string()))
}

fn number_or(var: &impl Fn(&str) -> Option<String>, name: &str, default: u32) -> Result<u32> {
    match optional(var, name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| Error::InvalidEnv {
            name: name.to_string(),
            value,
        }),
    }
}
