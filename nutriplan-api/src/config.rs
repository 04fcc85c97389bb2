use std::{env, num::ParseIntError, path::PathBuf};

use dotenv::dotenv;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_DIR: &str = "dist";
const DEFAULT_REPORTS_DIR: &str = "pdfs";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port \"{value}\": {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

/// Server settings, read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Prebuilt frontend, with `index.html` and an `assets` directory.
    pub frontend_dir: PathBuf,
    /// Where rendered reports are stored and served from.
    pub reports_dir: PathBuf,
    pub log_config: PathBuf,
}

impl Config {
    /// Read settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("NUTRIPLAN_PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("NUTRIPLAN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            frontend_dir: lookup("NUTRIPLAN_FRONTEND_DIR")
                .unwrap_or_else(|| DEFAULT_FRONTEND_DIR.to_owned())
                .into(),
            reports_dir: lookup("NUTRIPLAN_REPORTS_DIR")
                .unwrap_or_else(|| DEFAULT_REPORTS_DIR.to_owned())
                .into(),
            log_config: lookup("NUTRIPLAN_LOG_CONFIG")
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            config,
            Config {
                host: "127.0.0.1".to_owned(),
                port: 8080,
                frontend_dir: PathBuf::from("dist"),
                reports_dir: PathBuf::from("pdfs"),
                log_config: PathBuf::from("log4rs.yml"),
            }
        );
    }

    #[test]
    fn overrides_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("NUTRIPLAN_HOST", "0.0.0.0"),
            ("NUTRIPLAN_PORT", "9000"),
            ("NUTRIPLAN_FRONTEND_DIR", "/srv/frontend"),
            ("NUTRIPLAN_REPORTS_DIR", "/var/lib/nutriplan"),
            ("NUTRIPLAN_LOG_CONFIG", "/etc/nutriplan/log4rs.yml"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.frontend_dir, PathBuf::from("/srv/frontend"));
        assert_eq!(config.reports_dir, PathBuf::from("/var/lib/nutriplan"));
        assert_eq!(config.log_config, PathBuf::from("/etc/nutriplan/log4rs.yml"));
    }

    #[test]
    fn rejects_invalid_port() {
        for value in ["http", "-1", "70000", ""] {
            let result = Config::from_lookup(lookup_from(&[("NUTRIPLAN_PORT", value)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidPort { .. })),
                "port {:?}",
                value
            );
        }
    }
}
