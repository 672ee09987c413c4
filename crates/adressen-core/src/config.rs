use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_PDOK_ENDPOINT: &str = "https://api.pdok.nl/bzk/locatieserver/search/v3_1/free";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let pdok_endpoint = or_default("ADRESSEN_PDOK_ENDPOINT", DEFAULT_PDOK_ENDPOINT);

    let page_size = parse_u32("ADRESSEN_PAGE_SIZE", "100")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ADRESSEN_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }

    let request_delay_ms = parse_u64("ADRESSEN_REQUEST_DELAY_MS", "500")?;
    let request_timeout_secs = parse_u64("ADRESSEN_REQUEST_TIMEOUT_SECS", "30")?;
    let connect_timeout_secs = parse_u64("ADRESSEN_CONNECT_TIMEOUT_SECS", "10")?;
    let user_agent = or_default(
        "ADRESSEN_USER_AGENT",
        "adressen/0.1 (windturbine-visualisatie)",
    );
    let log_level = or_default("ADRESSEN_LOG_LEVEL", "info");
    let output_path = PathBuf::from(or_default(
        "ADRESSEN_OUTPUT_PATH",
        "adressen_windturbine.csv",
    ));

    Ok(AppConfig {
        pdok_endpoint,
        page_size,
        request_delay_ms,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        log_level,
        output_path,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_uses_defaults_for_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.pdok_endpoint, DEFAULT_PDOK_ENDPOINT);
        assert_eq!(cfg.page_size, 100);
        assert_eq!(cfg.request_delay_ms, 500);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.connect_timeout_secs, 10);
        assert_eq!(cfg.user_agent, "adressen/0.1 (windturbine-visualisatie)");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.output_path, PathBuf::from("adressen_windturbine.csv"));
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = HashMap::new();
        map.insert("ADRESSEN_PDOK_ENDPOINT", "http://localhost:8080/free");
        map.insert("ADRESSEN_PAGE_SIZE", "25");
        map.insert("ADRESSEN_REQUEST_DELAY_MS", "0");
        map.insert("ADRESSEN_OUTPUT_PATH", "/tmp/out.csv");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.pdok_endpoint, "http://localhost:8080/free");
        assert_eq!(cfg.page_size, 25);
        assert_eq!(cfg.request_delay_ms, 0);
        assert_eq!(cfg.output_path, PathBuf::from("/tmp/out.csv"));
    }

    #[test]
    fn build_app_config_rejects_non_numeric_page_size() {
        let mut map = HashMap::new();
        map.insert("ADRESSEN_PAGE_SIZE", "lots");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADRESSEN_PAGE_SIZE"),
            "expected InvalidEnvVar(ADRESSEN_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_zero_page_size() {
        let mut map = HashMap::new();
        map.insert("ADRESSEN_PAGE_SIZE", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADRESSEN_PAGE_SIZE"),
            "expected InvalidEnvVar(ADRESSEN_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_timeout() {
        let mut map = HashMap::new();
        map.insert("ADRESSEN_REQUEST_TIMEOUT_SECS", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ADRESSEN_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(ADRESSEN_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
