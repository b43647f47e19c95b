const DEFAULT_FILTER: &str = "info,lectern=debug,tower_http=debug";

/// Subscriber options resolved from settings. `RUST_LOG` still wins over
/// `default_filter` at init time, and `LOG_FORMAT=json` forces JSON output.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, default_filter: impl Into<String>, json: bool) -> Self {
        let forced_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        Self {
            environment: environment.into(),
            json_format: json || forced_json,
            default_filter: default_filter.into(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        Self::new(environment, DEFAULT_FILTER, false)
    }
}
