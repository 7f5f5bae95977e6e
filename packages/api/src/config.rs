use std::fmt;
use std::time::Duration;

use shared::repositories::move_cache_repository::MoveCacheSettings;
use shared::services::move_guesser_service::OutOfBoardPolicy;

/// Largest board the single digit row notation can address.
pub const MAX_BOARD_SIZE: i32 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { name: String, value: String },
    UnsupportedBoardSize(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value for {}: {}", name, value)
            }
            ConfigError::UnsupportedBoardSize(size) => write!(
                f,
                "Unsupported board size {}: must be between 1 and {}",
                size, MAX_BOARD_SIZE
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub board_size: i32,
    pub out_of_board_policy: OutOfBoardPolicy,
    pub cache: MoveCacheSettings,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board_size: 8,
            out_of_board_policy: OutOfBoardPolicy::Filter,
            cache: MoveCacheSettings::default(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment. Unset variables
    /// keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let board_size = parse_or(&lookup, "BOARD_SIZE", defaults.board_size)?;
        if !(1..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::UnsupportedBoardSize(board_size));
        }

        let out_of_board_policy = match lookup("OUT_OF_BOARD_POLICY") {
            Some(value) => parse_policy(&value)?,
            None => defaults.out_of_board_policy,
        };

        let cache = MoveCacheSettings {
            initial_capacity: parse_or(
                &lookup,
                "MOVE_CACHE_INITIAL_CAPACITY",
                defaults.cache.initial_capacity,
            )?,
            max_capacity: parse_or(
                &lookup,
                "MOVE_CACHE_MAX_CAPACITY",
                defaults.cache.max_capacity,
            )?,
            time_to_live: Duration::from_secs(parse_or(
                &lookup,
                "MOVE_CACHE_TTL_SECS",
                defaults.cache.time_to_live.as_secs(),
            )?),
        };

        let port = parse_or(&lookup, "PORT", defaults.port)?;

        Ok(AppConfig {
            board_size,
            out_of_board_policy,
            cache,
            port,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_policy(value: &str) -> Result<OutOfBoardPolicy, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "filter" => Ok(OutOfBoardPolicy::Filter),
        "reject" => Ok(OutOfBoardPolicy::Reject),
        _ => Err(ConfigError::InvalidValue {
            name: "OUT_OF_BOARD_POLICY".to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.board_size, 8);
        assert_eq!(config.cache.max_capacity, 1000);
        assert_eq!(config.cache.initial_capacity, 100);
        assert_eq!(config.cache.time_to_live, Duration::from_secs(86_400));
    }

    #[test]
    fn test_reads_every_variable() {
        let config = config_from(&[
            ("BOARD_SIZE", "5"),
            ("OUT_OF_BOARD_POLICY", "Reject"),
            ("MOVE_CACHE_INITIAL_CAPACITY", "10"),
            ("MOVE_CACHE_MAX_CAPACITY", "50"),
            ("MOVE_CACHE_TTL_SECS", "60"),
            ("PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.board_size, 5);
        assert_eq!(config.out_of_board_policy, OutOfBoardPolicy::Reject);
        assert_eq!(config.cache.initial_capacity, 10);
        assert_eq!(config.cache.max_capacity, 50);
        assert_eq!(config.cache.time_to_live, Duration::from_secs(60));
        assert_eq!(config.port, 8080);
    }

    #[rstest]
    #[case("0")]
    #[case("10")]
    #[case("-2")]
    fn test_rejects_board_sizes_outside_digit_range(#[case] size: &str) {
        let err = config_from(&[("BOARD_SIZE", size)]).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedBoardSize(_)));
    }

    #[rstest]
    #[case("BOARD_SIZE", "eight")]
    #[case("OUT_OF_BOARD_POLICY", "ignore")]
    #[case("MOVE_CACHE_TTL_SECS", "-1")]
    #[case("PORT", "70000")]
    fn test_rejects_unparseable_values(#[case] name: &str, #[case] value: &str) {
        assert_eq!(
            config_from(&[(name, value)]),
            Err(ConfigError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            })
        );
    }
}
