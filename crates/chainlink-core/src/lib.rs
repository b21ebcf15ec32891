//! Core domain model for the `ChainLink` Pro supplier dashboard.
//!
//! Everything here is pure and synchronous: the seed catalog is loaded once,
//! validated, and then queried in memory. Binaries layer presentation on top.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod materials;
pub mod onboarding;
pub mod query;
pub mod session;
pub mod suppliers;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{all_specialties, load_catalog, Catalog};
pub use config::{load_app_config, load_app_config_from_env};
pub use dashboard::{load_dashboard, ActivityKind, DashboardOverview};
pub use directory::{load_directory, Directory, DirectoryListing, DirectoryQuery};
pub use materials::{
    parse_lead_time_min, sort_materials, MaterialSort, MaterialSortField, SortDirection,
};
pub use onboarding::{
    password_strength, passwords_mismatch, PasswordStrength, VerificationDocuments,
};
pub use query::{network_view, run_query, NetworkStats, SortKey, StatusFilter, SupplierQuery};
pub use session::SupplierSession;
pub use suppliers::{ConnectionStatus, RawMaterial, StockStatus, Supplier};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    SeedFileParse(#[from] serde_yaml::Error),

    #[error("seed validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("supplier '{0}' not found")]
    SupplierNotFound(String),
}
