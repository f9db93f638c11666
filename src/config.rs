use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// PostgreSQL connection URL; overridden by the DATABASE_URL env var.
    #[serde(default)]
    pub postgres_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }

    /// Resolved store URL: DATABASE_URL wins over the config file.
    pub fn database_url(&self) -> Option<String> {
        std::env::var("DATABASE_URL")
            .ok()
            .or_else(|| self.postgres_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let yaml = r#"
log_level: "info"
log_dir: "./logs"
log_file: "payflow.log"
use_json: false
rotation: "daily"
gateway:
  host: "0.0.0.0"
  port: 8080
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.gateway.port, 8080);
        assert!(config.postgres_url.is_none());
    }

    #[test]
    fn parse_config_with_postgres_url() {
        let yaml = r#"
log_level: "debug"
log_dir: "./logs"
log_file: "payflow.log"
use_json: true
rotation: "never"
gateway:
  host: "127.0.0.1"
  port: 8081
postgres_url: "postgresql://u:p@localhost/payflow"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.postgres_url.as_deref(),
            Some("postgresql://u:p@localhost/payflow")
        );
    }
}
