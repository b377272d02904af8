use std::{env, path::PathBuf};

pub const DEFAULT_API_HOST: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_DEPLOYMENT_ID: &str = "default";
pub const DEFAULT_DATA_PATH: &str = "data/todo.json";
pub const DEFAULT_PORT: u16 = 8080;

/// Where the client finds the to-do service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub deployment_id: String,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, deployment_id: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            deployment_id: deployment_id.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            env_or("TODO_API_HOST", DEFAULT_API_HOST),
            env_or("TODO_DEPLOYMENT_ID", DEFAULT_DEPLOYMENT_ID),
        )
    }

    /// `<host>/<deployment-id>` without a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.host.trim_end_matches('/'),
            self.deployment_id.trim_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST, DEFAULT_DEPLOYMENT_ID)
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub default_deployment: String,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            data_path: PathBuf::from(env_or("APP_DATA_PATH", DEFAULT_DATA_PATH)),
            default_deployment: env_or("TODO_DEPLOYMENT_ID", DEFAULT_DEPLOYMENT_ID),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_joins_host_and_deployment() {
        let config = ClientConfig::new("http://localhost:9000/api/", "11201721446");
        assert_eq!(config.base_url(), "http://localhost:9000/api/11201721446");
        assert_eq!(
            ClientConfig::default().base_url(),
            "http://127.0.0.1:8080/api/default"
        );
    }
}
