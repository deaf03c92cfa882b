use std::collections::BTreeMap;

use pterodactyl_api::{
    CreateServerRequest, CreateUserRequest, Deploy, FeatureLimits, Limits, PterodactylClient,
    Server,
};
use tracing::{info, warn};

use crate::Result;
use crate::extract::ProvisioningConfig;
use crate::settings::PanelSettings;

pub const DOCKER_IMAGE: &str = "ghcr.io/pterodactyl/yolks:java_17";
const DISK_MB: u32 = 10240;
const IO_WEIGHT: u32 = 500;
const USERNAME_MAX: usize = 30;
const AUTO_LAST_NAME: &str = "Auto";

/// Pterodactyl operations needed per order.
///
/// Delegates to `pterodactyl_api::PterodactylClient` for all HTTP calls.
pub struct PanelClient {
    client: PterodactylClient,
    egg: u32,
    nest: u32,
    location: u32,
}

impl PanelClient {
    pub fn new(settings: &PanelSettings) -> Self {
        Self {
            client: PterodactylClient::new(&settings.url, &settings.api_key),
            egg: settings.egg,
            nest: settings.nest,
            location: settings.location,
        }
    }

    /// Return the id of the panel user owning `email`, creating one if needed.
    ///
    /// A lookup the panel refuses is not fatal; creation is attempted anyway
    /// and the panel's own uniqueness rules decide.
    pub async fn find_or_create_user(&self, email: &str, first_name: &str) -> Result<u64> {
        match self.client.list_users_by_email(email).await {
            Ok(users) => {
                if let Some(user) = users.first() {
                    info!(user_id = user.attributes.id, "panel: existing user");
                    return Ok(user.attributes.id);
                }
            }
            Err(e @ pterodactyl_api::Error::Api { .. }) => {
                warn!(error = %e, "panel: user lookup failed, creating instead");
            }
            Err(e) => return Err(e.into()),
        }

        let user = self
            .client
            .create_user(&CreateUserRequest {
                email: email.to_string(),
                username: username_for(email),
                first_name: first_name.to_string(),
                last_name: AUTO_LAST_NAME.into(),
                password: None,
            })
            .await?;

        info!(user_id = user.attributes.id, "panel: user created");
        Ok(user.attributes.id)
    }

    /// Build the server creation payload for `config`, owned by `user_id`.
    pub fn server_request(&self, user_id: u64, config: &ProvisioningConfig) -> CreateServerRequest {
        let mut environment = BTreeMap::new();
        environment.insert("MINECRAFT_VERSION".to_string(), config.version.clone());
        environment.insert(
            "SERVER_JARFILE".to_string(),
            config.server_type.jarfile().to_string(),
        );

        CreateServerRequest {
            name: config.server_name(),
            user: user_id,
            egg: self.egg,
            nest: self.nest,
            docker_image: DOCKER_IMAGE.into(),
            limits: Limits {
                memory: config.ram_mb,
                swap: 0,
                disk: DISK_MB,
                io: IO_WEIGHT,
                cpu: 0,
            },
            feature_limits: FeatureLimits {
                databases: 1,
                allocations: 1,
                backups: 1,
            },
            environment,
            start_on_completion: true,
            deploy: Deploy {
                locations: vec![self.location],
                dedicated_ip: false,
                port_range: Vec::new(),
            },
        }
    }

    /// Always creates a new server; there is no dedup on order id.
    pub async fn create_server(&self, user_id: u64, config: &ProvisioningConfig) -> Result<Server> {
        let server = self
            .client
            .create_server(&self.server_request(user_id, config))
            .await?;

        info!(
            server_id = ?server.attributes.id,
            ram_mb = config.ram_mb,
            slots = config.slots,
            version = %config.version,
            server_type = %config.server_type,
            "panel: server created"
        );
        Ok(server)
    }
}

/// Panel username derived from the email local part.
///
/// Keeps `[A-Za-z0-9_-]`, caps the length, and falls back to a
/// timestamped name when nothing usable remains.
pub fn username_for(email: &str) -> String {
    sanitize_username(email)
        .unwrap_or_else(|| format!("user{}", chrono::Utc::now().timestamp_millis()))
}

fn sanitize_username(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or_default();
    let name: String = local
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(USERNAME_MAX)
        .collect();
    (!name.is_empty()).then_some(name)
}
