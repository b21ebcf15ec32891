//! Read-only supplier views plus the in-process `connect` action.

use chainlink_core::{
    all_specialties, network_view, run_query, sort_materials, Catalog, MaterialSort,
    NetworkStats, StatusFilter, Supplier, SupplierQuery, SupplierSession,
};

use super::truncate;

fn status_label(supplier: &Supplier) -> String {
    supplier
        .effective_status()
        .map_or_else(|| "\u{2014}".to_string(), |s| s.to_string())
}

fn print_supplier_table(suppliers: &[&Supplier]) {
    println!(
        "{:<6}{:<32}{:<24}{:<8}{:<11}{:<10}SPECIALTIES",
        "ID", "COMPANY", "LOCATION", "RATING", "MATERIALS", "STATUS"
    );
    for supplier in suppliers {
        println!(
            "{:<6}{:<32}{:<24}{:<8.1}{:<11}{:<10}{}",
            supplier.id,
            truncate(&supplier.company_name, 28),
            truncate(&supplier.location, 20),
            supplier.rating,
            supplier.materials_count,
            status_label(supplier),
            supplier.specialties.join(", ")
        );
    }
}

/// Print the discovery view for `query`.
pub(crate) fn run_suppliers_discover(catalog: &Catalog, query: &SupplierQuery) {
    let results = run_query(&catalog.suppliers, query);
    tracing::debug!(matches = results.len(), "supplier query finished");

    if results.is_empty() {
        println!("no suppliers match the current filters");
        return;
    }

    print_supplier_table(&results);
    println!();
    println!("{} of {} suppliers", results.len(), catalog.suppliers.len());
}

/// Print the "My Network" view with connection counts.
pub(crate) fn run_suppliers_network(catalog: &Catalog, search: &str, status: StatusFilter) {
    let stats = NetworkStats::from_suppliers(&catalog.suppliers);
    println!(
        "Connections: {} total, {} active, {} pending, {} inactive",
        stats.total, stats.active, stats.pending, stats.inactive
    );
    println!();

    let results = network_view(&catalog.suppliers, search, status);
    if results.is_empty() {
        println!("no connected suppliers match the current filters");
        return;
    }

    print_supplier_table(&results);
}

/// Print supplier `id` with its material table sorted by `sort`.
///
/// # Errors
///
/// Returns an error if no supplier has this id.
pub(crate) fn run_suppliers_show(
    catalog: &Catalog,
    id: &str,
    sort: MaterialSort,
) -> anyhow::Result<()> {
    let supplier = catalog
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("supplier '{id}' not found; run `suppliers discover`"))?;

    println!("{} ({})", supplier.company_name, supplier.location);
    println!("Rating: {:.1}  Status: {}", supplier.rating, status_label(supplier));
    println!(
        "Founded: {}  Employees: {}",
        supplier.founded, supplier.employees
    );
    println!(
        "Contact: {} | {} | {}",
        supplier.contact_email, supplier.contact_phone, supplier.website
    );
    if !supplier.certifications.is_empty() {
        println!("Certifications: {}", supplier.certifications.join(", "));
    }
    println!();
    println!("{}", supplier.bio);
    println!();

    if supplier.materials.is_empty() {
        println!("no raw materials listed");
        return Ok(());
    }

    println!(
        "{:<28}{:<18}{:<14}{:<14}{:<16}MIN ORDER",
        "MATERIAL", "CATEGORY", "LEAD TIME", "STOCK", "PRICE"
    );
    for material in sort_materials(&supplier.materials, sort) {
        println!(
            "{:<28}{:<18}{:<14}{:<14}{:<16}{}",
            truncate(&material.name, 24),
            truncate(&material.category, 14),
            material.lead_time,
            material.stock_status.label(),
            material.price,
            material.min_order
        );
    }

    Ok(())
}

/// Request a connection with supplier `id` in a throwaway session.
///
/// # Errors
///
/// Returns an error if no supplier has this id.
pub(crate) fn run_suppliers_connect(catalog: &Catalog, id: &str) -> anyhow::Result<()> {
    let mut session = SupplierSession::new(catalog);
    let supplier = session.connect(id)?;
    println!(
        "{} is connected with status {}",
        supplier.company_name,
        status_label(supplier)
    );
    Ok(())
}

/// Print every specialty tag in first-seen order.
pub(crate) fn run_suppliers_specialties(catalog: &Catalog) {
    for specialty in all_specialties(&catalog.suppliers) {
        println!("{specialty}");
    }
}
