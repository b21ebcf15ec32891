use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::read_seed_file;
use crate::ConfigError;

const SEED_DASHBOARD: &str = include_str!("../../../config/dashboard.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
}

/// One point of a monthly chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub action: String,
    pub description: String,
    /// Relative, pre-rendered time such as `"2 hours ago"`.
    pub time: String,
    pub kind: ActivityKind,
}

/// Static mock data behind the main dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub company_name: String,
    pub verified: bool,
    pub stats: Vec<StatCard>,
    pub monthly_orders: Vec<MonthlyPoint>,
    pub demand_trend: Vec<MonthlyPoint>,
    pub recent_activity: Vec<Activity>,
}

/// Load the dashboard overview from `path`, or the embedded seed when `None`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_dashboard(path: Option<&Path>) -> Result<DashboardOverview, ConfigError> {
    let content = match path {
        Some(path) => read_seed_file(path)?,
        None => SEED_DASHBOARD.to_string(),
    };
    Ok(serde_yaml::from_str(&content)?)
}
