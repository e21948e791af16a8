/// Front desk configuration
///
/// # Environment variables
///
/// Every setting can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HOTEL_NAME | Marriott Hotel | Name shown in the welcome banner |
/// | LOG_LEVEL | warn | tracing max level |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | LOG_JSON | true in production, else false | Emit logs as JSON lines |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// HOTEL_NAME="Grand Budapest" LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Name shown in the welcome banner
    pub hotel_name: String,
    /// tracing max level: trace | debug | info | warn | error
    pub log_level: String,
    /// Log file directory; logs go to stderr when unset
    pub log_dir: Option<String>,
    /// JSON formatted log lines
    pub log_json: bool,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let production = environment == "production";

        Self {
            hotel_name: lookup("HOTEL_NAME").unwrap_or_else(|| "Marriott Hotel".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(production),
            environment,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
