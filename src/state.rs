use std::sync::Arc;
use tokio::sync::broadcast;

use crate::error::{AppError, Result};
use crate::notification::{initial_store, NotificationService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notification_service: NotificationService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let (notification_tx, _) = broadcast::channel(config.event_channel_capacity);
        let store = initial_store(config.seed_mock_data);

        Self {
            notification_service: NotificationService::new(store, notification_tx),
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_mock_data: bool,
    pub event_channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            seed_mock_data: true,
            event_channel_capacity: 100,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got {:?}", raw)))?,
            None => defaults.port,
        };

        let seed_mock_data = match lookup("SEED_MOCK_DATA") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("SEED_MOCK_DATA must be true or false, got {:?}", raw)))?,
            None => defaults.seed_mock_data,
        };

        let event_channel_capacity = match lookup("EVENT_CHANNEL_CAPACITY") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(AppError::Config(format!(
                        "EVENT_CHANNEL_CAPACITY must be a positive number, got {:?}",
                        raw
                    )))
                }
            },
            None => defaults.event_channel_capacity,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            seed_mock_data,
            event_channel_capacity,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("SEED_MOCK_DATA", "false"),
            ("EVENT_CHANNEL_CAPACITY", "16"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert!(!config.seed_mock_data);
        assert_eq!(config.event_channel_capacity, 16);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(config_from(&[("PORT", "http")]), Err(AppError::Config(_))));
        assert!(matches!(config_from(&[("SEED_MOCK_DATA", "yes")]), Err(AppError::Config(_))));
        assert!(matches!(
            config_from(&[("EVENT_CHANNEL_CAPACITY", "0")]),
            Err(AppError::Config(_))
        ));
    }
}
