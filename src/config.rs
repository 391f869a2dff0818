use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // Backend API
    pub backend_base_url: String,
    pub request_timeout_seconds: u64,

    // Live polling
    pub poll_interval_seconds: u64,

    // Heatmap lux range
    pub lux_min: f64,
    pub lux_max: f64,

    // Terminal event poll cadence
    pub tick_rate_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the lux range is empty or inverted.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self {
            // Backend API
            backend_base_url: env::var("SOLARTRACE_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            request_timeout_seconds: env::var("SOLARTRACE_REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),

            // Live polling
            poll_interval_seconds: env::var("SOLARTRACE_POLL_INTERVAL_SECONDS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            // Heatmap lux range
            lux_min: env::var("SOLARTRACE_LUX_MIN")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0.0),
            lux_max: env::var("SOLARTRACE_LUX_MAX")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .unwrap_or(2000.0),

            // Terminal event poll cadence
            tick_rate_ms: env::var("SOLARTRACE_TICK_RATE_MS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        };

        if config.lux_max <= config.lux_min {
            return Err(ConfigError::Invalid(
                "SOLARTRACE_LUX_MAX",
                format!(
                    "must be greater than SOLARTRACE_LUX_MIN ({} <= {})",
                    config.lux_max, config.lux_min
                ),
            ));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
