#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for a shelfscope process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Root of the public catalog REST API, e.g. `"https://api.mercadolibre.com"`.
    pub catalog_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
