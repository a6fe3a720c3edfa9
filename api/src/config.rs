use std::env;

use anyhow::{bail, Context};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Create missing tables at start-up
    pub ensure_schema: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", port))?,
            None => 8080,
        };

        let ensure_schema = match lookup("ENSURE_SCHEMA") {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("ENSURE_SCHEMA must be true or false, got {:?}", value))?,
            None => true,
        };

        Ok(Self {
            database_url,
            port,
            ensure_schema,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/mydb")]).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/mydb");
        assert_eq!(config.port, 8080);
        assert!(config.ensure_schema);
    }

    #[test]
    fn database_url_is_required() {
        let err = config_from(&[("PORT", "3000")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/bikes"),
            ("PORT", "3000"),
            ("ENSURE_SCHEMA", "no"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert!(!config.ensure_schema);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("DATABASE_URL", "postgres://db"), ("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn invalid_flag_is_rejected() {
        assert!(config_from(&[("DATABASE_URL", "postgres://db"), ("ENSURE_SCHEMA", "maybe")]).is_err());
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" 1 ").unwrap());
        assert!(!parse_flag("off").unwrap());
    }
}
