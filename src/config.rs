use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// 环境变量前缀, 例如 TIPOUT_SERVER__PORT=9000
pub const ENV_PREFIX: &str = "TIPOUT";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置 (未设置的项使用默认值)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// 监听地址 host:port
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(vars))
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AppConfig::from_source(env_of(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn env_overrides_host_and_port() {
        let cfg = AppConfig::from_source(env_of(&[
            ("TIPOUT_SERVER__HOST", "0.0.0.0"),
            ("TIPOUT_SERVER__PORT", "9000"),
        ]))
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
    }

    #[test]
    fn bad_port_is_an_error() {
        let res = AppConfig::from_source(env_of(&[("TIPOUT_SERVER__PORT", "not-a-port")]));
        assert!(res.is_err());
    }
}
