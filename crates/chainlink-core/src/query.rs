//! Supplier query engine: search, specialty/status filtering and sorting over
//! an in-memory supplier list.
//!
//! All functions are pure. Results borrow from the input slice and preserve
//! input order for equal sort keys.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::suppliers::{ConnectionStatus, Supplier};

/// Restricts results by connection status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Pending,
    Inactive,
}

impl StatusFilter {
    fn required_status(self) -> Option<ConnectionStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(ConnectionStatus::Active),
            StatusFilter::Pending => Some(ConnectionStatus::Pending),
            StatusFilter::Inactive => Some(ConnectionStatus::Inactive),
        }
    }

    /// Only connected suppliers can satisfy a concrete status.
    #[must_use]
    pub fn matches(self, supplier: &Supplier) -> bool {
        match self.required_status() {
            None => true,
            Some(status) => supplier.effective_status() == Some(status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "pending" => Ok(StatusFilter::Pending),
            "inactive" => Ok(StatusFilter::Inactive),
            other => Err(format!(
                "unknown status filter '{other}'; expected all, active, pending or inactive"
            )),
        }
    }
}

/// Result ordering for supplier lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Highest rated first.
    Rating,
    /// Company name, ascending.
    Name,
    /// Largest catalog first.
    MaterialsCount,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortKey::Rating),
            "name" => Ok(SortKey::Name),
            "materials_count" | "materials" => Ok(SortKey::MaterialsCount),
            other => Err(format!(
                "unknown sort key '{other}'; expected rating, name or materials_count"
            )),
        }
    }
}

/// User-editable query parameters. The default query matches everything and
/// keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierQuery {
    /// Case-insensitive substring tested against name, bio and location.
    pub search: String,
    /// A supplier passes if it carries at least one of these tags. Empty = no restriction.
    pub specialties: Vec<String>,
    pub status: StatusFilter,
    pub sort: Option<SortKey>,
}

impl SupplierQuery {
    fn matches(&self, supplier: &Supplier, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || contains_folded(&supplier.company_name, needle)
            || contains_folded(&supplier.bio, needle)
            || contains_folded(&supplier.location, needle);

        let matches_specialties =
            self.specialties.is_empty() || supplier.has_any_specialty(&self.specialties);

        matches_search && matches_specialties && self.status.matches(supplier)
    }
}

/// Apply `query` to `suppliers`, returning the matching subset in sorted order.
#[must_use]
pub fn run_query<'a>(suppliers: &'a [Supplier], query: &SupplierQuery) -> Vec<&'a Supplier> {
    let needle = query.search.to_lowercase();
    let mut results: Vec<&Supplier> = suppliers
        .iter()
        .filter(|s| query.matches(s, &needle))
        .collect();

    if let Some(sort) = query.sort {
        sort_suppliers(&mut results, sort);
    }

    results
}

/// Stable in-place sort by `key`.
pub fn sort_suppliers(suppliers: &mut [&Supplier], key: SortKey) {
    match key {
        SortKey::Rating => suppliers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Name => suppliers.sort_by(|a, b| a.company_name.cmp(&b.company_name)),
        SortKey::MaterialsCount => {
            suppliers.sort_by(|a, b| b.materials_count.cmp(&a.materials_count));
        }
    }
}

/// Connection counts shown above the network view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

impl NetworkStats {
    #[must_use]
    pub fn from_suppliers(suppliers: &[Supplier]) -> Self {
        let mut stats = NetworkStats::default();
        for supplier in suppliers.iter().filter(|s| s.is_connected) {
            stats.total += 1;
            match supplier.connection_status {
                Some(ConnectionStatus::Active) => stats.active += 1,
                Some(ConnectionStatus::Pending) => stats.pending += 1,
                Some(ConnectionStatus::Inactive) => stats.inactive += 1,
                None => {}
            }
        }
        stats
    }
}

/// The "My Network" view: connected suppliers only, searched by name and
/// location (bio is not searched here), filtered by status, in input order.
#[must_use]
pub fn network_view<'a>(
    suppliers: &'a [Supplier],
    search: &str,
    status: StatusFilter,
) -> Vec<&'a Supplier> {
    let needle = search.to_lowercase();
    suppliers
        .iter()
        .filter(|s| s.is_connected)
        .filter(|s| {
            needle.is_empty()
                || contains_folded(&s.company_name, &needle)
                || contains_folded(&s.location, &needle)
        })
        .filter(|s| status.matches(s))
        .collect()
}

/// `needle` must already be lowercased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
