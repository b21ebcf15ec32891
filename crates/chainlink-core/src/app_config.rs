use std::net::SocketAddr;
use std::path::PathBuf;

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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Overrides the embedded supplier seed when set.
    pub suppliers_path: Option<PathBuf>,
    /// Overrides the embedded directory seed when set.
    pub directory_path: Option<PathBuf>,
    /// Overrides the embedded dashboard seed when set.
    pub dashboard_path: Option<PathBuf>,
    /// Single allowed CORS origin; `None` allows any origin.
    pub cors_origin: Option<String>,
}
