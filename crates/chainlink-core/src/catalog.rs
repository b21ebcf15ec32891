use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::suppliers::Supplier;
use crate::ConfigError;

/// Supplier seed compiled into the binary; used unless a path override is configured.
const SEED_SUPPLIERS: &str = include_str!("../../../config/suppliers.yaml");

/// The fixed, read-only supplier catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub suppliers: Vec<Supplier>,
}

impl Catalog {
    /// Parse and validate the embedded seed catalog.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded YAML fails to parse or validate.
    pub fn seed() -> Result<Self, ConfigError> {
        Self::from_yaml(SEED_SUPPLIERS)
    }

    /// Parse and validate a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the YAML is malformed or fails validation.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        validate_catalog(&catalog)?;
        Ok(catalog)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }
}

/// Load the supplier catalog from `path`, or the embedded seed when `None`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, ConfigError> {
    let catalog = match path {
        Some(path) => Catalog::from_yaml(&read_seed_file(path)?)?,
        None => Catalog::seed()?,
    };
    tracing::debug!(
        suppliers = catalog.suppliers.len(),
        source = path.map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
        "supplier catalog loaded"
    );
    Ok(catalog)
}

/// Every distinct specialty tag across `suppliers`, in first-seen order.
#[must_use]
pub fn all_specialties(suppliers: &[Supplier]) -> Vec<String> {
    let mut seen = HashSet::new();
    suppliers
        .iter()
        .flat_map(|s| s.specialties.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

pub(crate) fn read_seed_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for supplier in &catalog.suppliers {
        if supplier.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "supplier '{}' has an empty id",
                supplier.company_name
            )));
        }

        if supplier.company_name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "supplier '{}' has an empty company_name",
                supplier.id
            )));
        }

        if !supplier.rating.is_finite() || !(0.0..=5.0).contains(&supplier.rating) {
            return Err(ConfigError::Validation(format!(
                "supplier '{}' has invalid rating {}; must be within 0.0-5.0",
                supplier.id, supplier.rating
            )));
        }

        if !seen_ids.insert(supplier.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate supplier id: '{}'",
                supplier.id
            )));
        }

        let mut seen_materials = HashSet::new();
        for material in &supplier.materials {
            if !seen_materials.insert(material.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate material id '{}' in supplier '{}'",
                    material.id, supplier.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
