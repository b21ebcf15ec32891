//! Supplier API handlers.
//!
//! - `GET  /api/v1/suppliers`              : filtered and sorted supplier list
//! - `GET  /api/v1/suppliers/specialties`  : every specialty tag, first-seen order
//! - `GET  /api/v1/suppliers/network`      : connected suppliers plus counts
//! - `GET  /api/v1/suppliers/{id}`         : one supplier with a sorted material table
//! - `POST /api/v1/suppliers/{id}/connect` : request a connection

mod connect;
mod detail;
mod list;
mod network;

pub(super) use connect::connect_supplier;
pub(super) use detail::get_supplier;
pub(super) use list::{list_specialties, list_suppliers};
pub(super) use network::get_network;

use chainlink_core::{ConnectionStatus, Supplier};
use serde::Serialize;

/// List-view projection of a supplier; materials are only served by the detail route.
#[derive(Debug, Serialize)]
pub(in crate::api) struct SupplierItem {
    id: String,
    company_name: String,
    logo: Option<String>,
    bio: String,
    location: String,
    rating: f64,
    specialties: Vec<String>,
    is_connected: bool,
    connection_status: Option<ConnectionStatus>,
    materials_count: u32,
}

impl From<&Supplier> for SupplierItem {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id.clone(),
            company_name: supplier.company_name.clone(),
            logo: supplier.logo.clone(),
            bio: supplier.bio.clone(),
            location: supplier.location.clone(),
            rating: supplier.rating,
            specialties: supplier.specialties.clone(),
            is_connected: supplier.is_connected,
            connection_status: supplier.effective_status(),
            materials_count: supplier.materials_count,
        }
    }
}
