//! Supplier command handlers for the CLI.
//!
//! Each invocation loads the catalog into a fresh session, so `connect` only
//! changes state for the lifetime of the command.

mod query;

use chainlink_core::{Catalog, MaterialSortField, SortDirection, SortKey, StatusFilter};
use clap::Subcommand;

pub(crate) use query::{
    run_suppliers_connect, run_suppliers_discover, run_suppliers_network, run_suppliers_show,
    run_suppliers_specialties,
};

/// Sub-commands available under `suppliers`.
#[derive(Debug, Subcommand)]
pub enum SuppliersCommands {
    /// Search and filter the full supplier catalog
    Discover {
        /// Case-insensitive match against name, bio and location
        #[arg(long, default_value = "")]
        search: String,
        /// Keep suppliers carrying any of these specialties (repeatable)
        #[arg(long = "specialty")]
        specialties: Vec<String>,
        /// all, active, pending or inactive
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// rating, name or `materials_count`; omitted keeps catalog order
        #[arg(long)]
        sort: Option<SortKey>,
    },
    /// List connected suppliers with connection counts
    Network {
        /// Case-insensitive match against name and location
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Show one supplier and its raw material table
    Show {
        id: String,
        /// name, category, `lead_time` or `stock_status`
        #[arg(long, default_value = "name")]
        sort_field: MaterialSortField,
        /// asc or desc
        #[arg(long, default_value = "asc")]
        direction: SortDirection,
    },
    /// Request a connection with a supplier
    Connect { id: String },
    /// List every specialty tag in first-seen order
    Specialties,
}

/// Dispatch a `suppliers` sub-command against `catalog`.
///
/// # Errors
///
/// Returns an error if the requested supplier does not exist.
pub(crate) fn run(catalog: &Catalog, command: SuppliersCommands) -> anyhow::Result<()> {
    match command {
        SuppliersCommands::Discover {
            search,
            specialties,
            status,
            sort,
        } => {
            let query = chainlink_core::SupplierQuery {
                search,
                specialties,
                status,
                sort,
            };
            run_suppliers_discover(catalog, &query);
        }
        SuppliersCommands::Network { search, status } => {
            run_suppliers_network(catalog, &search, status);
        }
        SuppliersCommands::Show {
            id,
            sort_field,
            direction,
        } => {
            let sort = chainlink_core::MaterialSort::new(sort_field, direction);
            run_suppliers_show(catalog, &id, sort)?;
        }
        SuppliersCommands::Connect { id } => run_suppliers_connect(catalog, &id)?,
        SuppliersCommands::Specialties => run_suppliers_specialties(catalog),
    }
    Ok(())
}

/// Shorten `text` to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}
