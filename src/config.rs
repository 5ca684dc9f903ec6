use crate::error::ConfigError;
use reqwest::Url;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

// Every variable `from_env` reads; nothing else in the environment is touched.
const ENV_VARS: [&str; 5] = [
    "PAGESPEED_API_KEY",
    "PAGESPEED_ENDPOINT",
    "PAGESPEED_TIMEOUT_SECS",
    "BIND_ADDR",
    "SESSION_TTL_SECS",
];

/// Runtime settings, read from the environment (and `.env`) at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoint: Url,
    /// `None` keeps reqwest's default behaviour.
    pub request_timeout: Option<Duration>,
    pub bind_addr: SocketAddr,
    /// Idle sessions older than this are swept.
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = ENV_VARS
            .iter()
            .filter_map(|name| {
                std::env::var(name)
                    .ok()
                    .map(|value| (name.to_string(), value))
            })
            .collect();
        Self::from_vars(vars)
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &'static str| lookup(&vars, name);

        let endpoint_raw = get("PAGESPEED_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT);
        let endpoint = Url::parse(endpoint_raw).map_err(|_| ConfigError::InvalidEndpoint {
            name: "PAGESPEED_ENDPOINT",
            value: endpoint_raw.to_string(),
        })?;

        let request_timeout = get("PAGESPEED_TIMEOUT_SECS")
            .map(|raw| positive_secs("PAGESPEED_TIMEOUT_SECS", raw))
            .transpose()?;
        let session_ttl = get("SESSION_TTL_SECS")
            .map(|raw| positive_secs("SESSION_TTL_SECS", raw))
            .transpose()?
            .unwrap_or(DEFAULT_SESSION_TTL);

        let bind_raw = get("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                name: "BIND_ADDR",
                value: bind_raw.to_string(),
            })?;

        Ok(Config {
            api_key: get("PAGESPEED_API_KEY").map(str::to_string),
            endpoint,
            request_timeout,
            bind_addr,
            session_ttl,
        })
    }

    /// How often idle sessions are looked for.
    pub fn sweep_period(&self) -> Duration {
        self.session_ttl.min(Duration::from_secs(60))
    }
}

fn positive_secs(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout {
            name,
            value: raw.to_string(),
        })
}

// unset and blank values are treated alike
fn lookup<'a>(vars: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    vars.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_vars(HashMap::new()).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.bind_addr.port(), 3043);
        assert_eq!(config.session_ttl, DEFAULT_SESSION_TTL);
        assert_eq!(config.sweep_period(), Duration::from_secs(60));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_vars(vars(&[
            ("PAGESPEED_API_KEY", "secret"),
            ("PAGESPEED_ENDPOINT", "http://127.0.0.1:9000/runPagespeed"),
            ("PAGESPEED_TIMEOUT_SECS", "90"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("SESSION_TTL_SECS", "20"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.endpoint.port(), Some(9000));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.session_ttl, Duration::from_secs(20));
        assert_eq!(config.sweep_period(), Duration::from_secs(20));
    }

    #[test]
    fn blank_key_counts_as_unset() {
        let config = Config::from_vars(vars(&[("PAGESPEED_API_KEY", "  ")])).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_vars(vars(&[("PAGESPEED_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            Config::from_vars(vars(&[("SESSION_TTL_SECS", "soon")])),
            Err(ConfigError::InvalidTimeout { name: "SESSION_TTL_SECS", .. })
        ));
        assert!(matches!(
            Config::from_vars(vars(&[("BIND_ADDR", "localhost")])),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            Config::from_vars(vars(&[("PAGESPEED_ENDPOINT", "not a url")])),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_environment_is_ignored() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var(
            "PAGESPEED_PRO_UNRELATED_BYTES",
            OsStr::from_bytes(b"caf\xe9"),
        );
        let loaded = Config::from_env();
        std::env::remove_var("PAGESPEED_PRO_UNRELATED_BYTES");

        assert!(loaded.is_ok());
    }
}
