use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::Level;

use crate::entities::Coordinates;
use crate::error::{config_error, Error};

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Clone, Debug)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub center: Coordinates,
    pub default_max_distance_km: f64,
    pub min_distance_km: f64,
    pub max_distance_km: f64,
    pub image_timeout: Duration,
    /// Stale itinerary indices fail loudly when set, and are ignored otherwise.
    pub strict_indices: bool,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/spots.csv"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            center: Coordinates {
                latitude: 33.813,
                longitude: 10.900,
            },
            default_max_distance_km: 20.0,
            min_distance_km: 1.0,
            max_distance_km: 30.0,
            image_timeout: Duration::from_secs(10),
            strict_indices: cfg!(debug_assertions),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults
    /// for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            catalog_path: lookup("DJERBAGO_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            bind_addr: parse_or(&lookup, "DJERBAGO_BIND_ADDR", defaults.bind_addr)?,
            center: Coordinates {
                latitude: parse_or(&lookup, "DJERBAGO_CENTER_LAT", defaults.center.latitude)?,
                longitude: parse_or(&lookup, "DJERBAGO_CENTER_LON", defaults.center.longitude)?,
            },
            default_max_distance_km: parse_or(
                &lookup,
                "DJERBAGO_DEFAULT_MAX_DISTANCE_KM",
                defaults.default_max_distance_km,
            )?,
            min_distance_km: defaults.min_distance_km,
            max_distance_km: defaults.max_distance_km,
            image_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DJERBAGO_IMAGE_TIMEOUT_SECS",
                defaults.image_timeout.as_secs(),
            )?),
            strict_indices: parse_or(&lookup, "DJERBAGO_STRICT_INDICES", defaults.strict_indices)?,
            log_level: parse_or(&lookup, "DJERBAGO_LOG", defaults.log_level)?,
        };

        if !config.center.is_valid() {
            return Err(config_error(
                "DJERBAGO_CENTER_LAT/DJERBAGO_CENTER_LON",
                &format!("{:?}", config.center),
            ));
        }

        if !(config.min_distance_km..=config.max_distance_km)
            .contains(&config.default_max_distance_km)
        {
            return Err(config_error(
                "DJERBAGO_DEFAULT_MAX_DISTANCE_KM",
                &config.default_max_distance_km.to_string(),
            ));
        }

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| config_error(key, &raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("data/spots.csv"));
        assert_eq!(config.default_max_distance_km, 20.0);
        assert_eq!(config.center.latitude, 33.813);
        assert_eq!(config.image_timeout, Duration::from_secs(10));
    }

    #[test]
    fn keys_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DJERBAGO_BIND_ADDR", "0.0.0.0:8080"),
            ("DJERBAGO_DEFAULT_MAX_DISTANCE_KM", "5"),
            ("DJERBAGO_STRICT_INDICES", "false"),
            ("DJERBAGO_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.default_max_distance_km, 5.0);
        assert!(!config.strict_indices);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn malformed_value_names_the_key() {
        let err = Config::from_lookup(lookup_from(&[("DJERBAGO_CENTER_LAT", "north")])).unwrap_err();

        assert!(err.message.contains("DJERBAGO_CENTER_LAT"));
    }

    #[test]
    fn default_distance_outside_bounds_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("DJERBAGO_DEFAULT_MAX_DISTANCE_KM", "45")]));

        assert!(result.is_err());
    }
}
