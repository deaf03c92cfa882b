use std::env;
use std::net::SocketAddr;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, mc_provision::Error> {
        Self::from_listen_addr(env::var("LISTEN_ADDR").ok())
    }

    fn from_listen_addr(value: Option<String>) -> Result<Self, mc_provision::Error> {
        let value = value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());

        let listen_addr = value
            .trim()
            .parse()
            .map_err(|_| mc_provision::Error::InvalidEnv {
                name: "LISTEN_ADDR".into(),
                value,
            })?;

        Ok(Self { listen_addr })
    }
}
