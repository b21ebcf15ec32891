//! Public supplier directory for the marketing site.
//!
//! Separate from the dashboard catalog: listings carry review counts and a
//! verification flag instead of materials and connection state.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::read_seed_file;
use crate::ConfigError;

const SEED_DIRECTORY: &str = include_str!("../../../config/directory.yaml");

/// Dropdown sentinel meaning "no industry restriction".
pub const ALL_INDUSTRIES: &str = "All Industries";
/// Dropdown sentinel meaning "no location restriction".
pub const ALL_LOCATIONS: &str = "All Locations";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub id: u32,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub rating: f64,
    pub reviews: u32,
    pub specialties: Vec<String>,
    pub verified: bool,
    pub description: String,
    pub min_order: String,
    pub lead_time: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl DirectoryListing {
    /// Country part of `"City, Country"`; the whole string when there is no comma.
    #[must_use]
    pub fn country(&self) -> &str {
        self.location
            .rsplit(',')
            .next()
            .map_or(self.location.as_str(), str::trim)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directory {
    pub listings: Vec<DirectoryListing>,
}

impl Directory {
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded YAML fails to parse or validate.
    pub fn seed() -> Result<Self, ConfigError> {
        Self::from_yaml(SEED_DIRECTORY)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the YAML is malformed or has duplicate ids.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let directory: Directory = serde_yaml::from_str(content)?;
        let mut seen = HashSet::new();
        for listing in &directory.listings {
            if !seen.insert(listing.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate directory listing id: {}",
                    listing.id
                )));
            }
        }
        Ok(directory)
    }

    /// Distinct industries in first-seen order.
    #[must_use]
    pub fn industries(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.listings
            .iter()
            .map(|l| l.industry.as_str())
            .filter(|i| seen.insert(*i))
            .collect()
    }

    /// Distinct countries in first-seen order.
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.listings
            .iter()
            .map(DirectoryListing::country)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Listings matching `query`, in directory order.
    #[must_use]
    pub fn search(&self, query: &DirectoryQuery) -> Vec<&DirectoryListing> {
        let needle = query.search.to_lowercase();
        self.listings
            .iter()
            .filter(|l| query.matches(l, &needle))
            .collect()
    }
}

/// Directory search parameters. `None`, an empty value or the "All ..." sentinel
/// disables a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub search: String,
    pub industry: Option<String>,
    pub location: Option<String>,
}

impl DirectoryQuery {
    fn matches(&self, listing: &DirectoryListing, needle: &str) -> bool {
        let matches_search = listing.name.to_lowercase().contains(needle)
            || listing
                .specialties
                .iter()
                .any(|s| s.to_lowercase().contains(needle));

        let matches_industry = match self.industry.as_deref() {
            None | Some("" | ALL_INDUSTRIES) => true,
            Some(industry) => listing.industry == industry,
        };

        let matches_location = match self.location.as_deref() {
            None | Some("" | ALL_LOCATIONS) => true,
            Some(location) => listing.location.contains(location),
        };

        matches_search && matches_industry && matches_location
    }
}

/// Load the directory from `path`, or the embedded seed when `None`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_directory(path: Option<&Path>) -> Result<Directory, ConfigError> {
    match path {
        Some(path) => Directory::from_yaml(&read_seed_file(path)?),
        None => Directory::seed(),
    }
}
