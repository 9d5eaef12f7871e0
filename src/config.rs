use std::env;
use sea_orm::DatabaseConnection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub seed_on_start: bool,
}

/// Everything handlers share. The connection is opened in `main` and handed
/// in here, so tests can inject their own.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = parse_var("PORT", 9090)?;

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 10)?;
        let seed_on_start = parse_var("SEED_ON_START", false)?;

        Ok(Config {
            server_host,
            server_port,
            database_url,
            database_max_connections,
            seed_on_start,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        assert_eq!(parse_var("NEWS_API_TEST_UNSET_PORT", 9090u16).unwrap(), 9090);
    }

    #[test]
    fn unparsable_values_are_rejected() {
        env::set_var("NEWS_API_TEST_BAD_BOOL", "sometimes");
        let err = parse_var("NEWS_API_TEST_BAD_BOOL", false).unwrap_err();
        assert_eq!(err.to_string(), "NEWS_API_TEST_BAD_BOOL has an invalid value: sometimes");
    }
}
