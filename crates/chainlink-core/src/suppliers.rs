use serde::{Deserialize, Serialize};

/// Demo-only relationship state between the viewing company and a supplier.
///
/// Only meaningful when [`Supplier::is_connected`] is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Active,
    Inactive,
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Pending => write!(f, "pending"),
            ConnectionStatus::Active => write!(f, "active"),
            ConnectionStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Stock availability of a raw material.
///
/// Values outside the three known states deserialize to `Unknown`, which
/// ranks after every known state when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    #[serde(other)]
    Unknown,
}

impl StockStatus {
    /// Urgency rank, low to high: in-stock (1) < low-stock (2) < out-of-stock (3) < anything else (4).
    #[must_use]
    pub fn urgency_rank(self) -> u8 {
        match self {
            StockStatus::InStock => 1,
            StockStatus::LowStock => 2,
            StockStatus::OutOfStock => 3,
            StockStatus::Unknown => 4,
        }
    }

    /// Human-readable badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "in-stock"),
            StockStatus::LowStock => write!(f, "low-stock"),
            StockStatus::OutOfStock => write!(f, "out-of-stock"),
            StockStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// A raw material offered by a single supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub id: String,
    pub name: String,
    pub category: String,
    pub specifications: String,
    /// Free-text range such as `"5-7 days"`; only the lower bound is ever parsed.
    pub lead_time: String,
    pub stock_status: StockStatus,
    /// Display string, e.g. `"$850/ton"`. Never parsed.
    pub price: String,
    pub min_order: String,
}

/// A supplier record as shown on discovery, network and detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub company_name: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub bio: String,
    pub location: String,
    /// 0.0 to 5.0, validated at load time.
    pub rating: f64,
    /// Display-ordered category tags.
    pub specialties: Vec<String>,
    pub is_connected: bool,
    #[serde(default)]
    pub connection_status: Option<ConnectionStatus>,
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    /// Informational count; not necessarily `materials.len()`.
    pub materials_count: u32,
    #[serde(default)]
    pub materials: Vec<RawMaterial>,
    pub founded: String,
    pub employees: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Supplier {
    /// The connection status, but only when the supplier is actually connected.
    #[must_use]
    pub fn effective_status(&self) -> Option<ConnectionStatus> {
        if self.is_connected {
            self.connection_status
        } else {
            None
        }
    }

    /// Returns `true` if any specialty tag is in `tags`.
    #[must_use]
    pub fn has_any_specialty<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .any(|tag| self.specialties.iter().any(|s| s == tag.as_ref()))
    }
}
