use crate::catalog::Catalog;
use crate::suppliers::{ConnectionStatus, Supplier};
use crate::CoreError;

/// A session-local working copy of the supplier catalog.
///
/// The only mutation is [`SupplierSession::connect`]; nothing is written back
/// to the catalog it was created from.
#[derive(Debug, Clone)]
pub struct SupplierSession {
    suppliers: Vec<Supplier>,
}

impl SupplierSession {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            suppliers: catalog.suppliers.clone(),
        }
    }

    #[must_use]
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    /// Request a connection with supplier `id`.
    ///
    /// An unconnected supplier becomes connected with `pending` status. An
    /// already-connected supplier is left as is, so repeated calls never
    /// downgrade an `active` link or disconnect.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SupplierNotFound`] if no supplier has this id.
    pub fn connect(&mut self, id: &str) -> Result<&Supplier, CoreError> {
        let supplier = self
            .suppliers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::SupplierNotFound(id.to_string()))?;

        if supplier.is_connected {
            tracing::debug!(supplier_id = %id, "connect ignored; supplier already connected");
        } else {
            supplier.is_connected = true;
            supplier.connection_status = Some(ConnectionStatus::Pending);
            tracing::info!(supplier_id = %id, company = %supplier.company_name, "connection requested");
        }

        Ok(&*supplier)
    }
}
