// src/config.rs
const ENV_PORT: &str = "PORT";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Read from the environment: $PORT, defaulting to 5000.
    pub fn from_env() -> Self {
        Self {
            port: port_from(std::env::var(ENV_PORT).ok()),
        }
    }
}

fn port_from(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}
