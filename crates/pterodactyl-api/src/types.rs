use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Envelopes ────────────────────────────────────────────────────────

/// A single resource as wrapped by the application API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<T> {
    #[serde(default)]
    pub object: String,
    pub attributes: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct List<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<Resource<T>>,
}

// ── Users ────────────────────────────────────────────────────────────

pub type User = Resource<UserAttributes>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAttributes {
    pub id: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Leaving `password` empty makes the panel email the user a setup link.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: Option<String>,
}

// ── Servers ──────────────────────────────────────────────────────────

/// Created server. Every field is optional: a 2xx from create-server counts
/// as success whatever its body looks like.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub attributes: ServerAttributes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerAttributes {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateServerRequest {
    pub name: String,
    pub user: u64,
    pub egg: u32,
    pub nest: u32,
    pub docker_image: String,
    pub limits: Limits,
    pub feature_limits: FeatureLimits,
    pub environment: BTreeMap<String, String>,
    pub start_on_completion: bool,
    pub deploy: Deploy,
}

/// Resource limits; `cpu: 0` means unlimited.
#[derive(Debug, Clone, Serialize)]
pub struct Limits {
    pub memory: u32,
    pub swap: i32,
    pub disk: u32,
    pub io: u32,
    pub cpu: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureLimits {
    pub databases: u32,
    pub allocations: u32,
    pub backups: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Deploy {
    pub locations: Vec<u32>,
    pub dedicated_ip: bool,
    pub port_range: Vec<String>,
}
