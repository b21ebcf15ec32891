use super::*;
use crate::catalog::Catalog;
use crate::suppliers::fixtures::{connected, supplier};

fn ids(results: &[&Supplier]) -> Vec<String> {
    results.iter().map(|s| s.id.clone()).collect()
}

fn sample() -> Vec<Supplier> {
    vec![
        supplier("1", "Steel Corp India", 4.8, &["Carbon Steel", "Tool Steel"]),
        supplier("2", "Polymer Solutions Ltd", 4.6, &["Elastomers"]),
        supplier("3", "MetalWorks Germany", 4.9, &["Aluminum", "Carbon Steel"]),
        supplier("4", "EcoFiber Textiles", 4.4, &[]),
    ]
}

#[test]
fn default_query_returns_everything_in_input_order() {
    let suppliers = sample();
    let results = run_query(&suppliers, &SupplierQuery::default());
    assert_eq!(ids(&results), vec!["1", "2", "3", "4"]);
}

#[test]
fn specialty_filter_uses_or_semantics() {
    let suppliers = sample();
    let query = SupplierQuery {
        specialties: vec!["Tool Steel".to_string(), "Elastomers".to_string()],
        ..SupplierQuery::default()
    };
    assert_eq!(ids(&run_query(&suppliers, &query)), vec!["1", "2"]);
}

#[test]
fn specialty_filter_excludes_suppliers_without_overlap() {
    let suppliers = sample();
    let query = SupplierQuery {
        specialties: vec!["Carbon Steel".to_string(), "Hardwood".to_string()],
        ..SupplierQuery::default()
    };
    let results = run_query(&suppliers, &query);
    // 1 and 3 overlap partially; 2 has no overlap; 4 has no tags at all.
    assert_eq!(ids(&results), vec!["1", "3"]);
    for s in &suppliers {
        let overlaps = s.specialties.iter().any(|t| query.specialties.contains(t));
        assert_eq!(results.iter().any(|r| r.id == s.id), overlaps, "supplier {}", s.id);
    }
}

#[test]
fn search_is_case_insensitive_both_ways() {
    let suppliers = sample();
    for needle in ["steel", "STEEL", "Steel"] {
        let query = SupplierQuery {
            search: needle.to_string(),
            ..SupplierQuery::default()
        };
        let results = run_query(&suppliers, &query);
        assert!(
            results.iter().any(|s| s.company_name == "Steel Corp India"),
            "search {needle:?} should match Steel Corp India"
        );
    }
}

#[test]
fn search_covers_bio_and_location() {
    let mut suppliers = sample();
    suppliers[1].location = "Singapore".to_string();
    suppliers[3].bio = "Sustainable textile materials".to_string();

    let by_location = SupplierQuery {
        search: "singapore".to_string(),
        ..SupplierQuery::default()
    };
    assert_eq!(ids(&run_query(&suppliers, &by_location)), vec!["2"]);

    let by_bio = SupplierQuery {
        search: "SUSTAINABLE".to_string(),
        ..SupplierQuery::default()
    };
    assert_eq!(ids(&run_query(&suppliers, &by_bio)), vec!["4"]);
}

#[test]
fn search_without_match_returns_empty() {
    let suppliers = sample();
    let query = SupplierQuery {
        search: "zzz-no-such-supplier".to_string(),
        ..SupplierQuery::default()
    };
    assert!(run_query(&suppliers, &query).is_empty());
}

#[test]
fn active_filter_excludes_unconnected_even_with_status_set() {
    let mut stray = supplier("9", "Stray Status Co", 4.0, &[]);
    stray.connection_status = Some(ConnectionStatus::Active);
    let suppliers = vec![
        connected(supplier("1", "A", 4.0, &[]), Some(ConnectionStatus::Active)),
        stray,
        supplier("3", "C", 4.0, &[]),
        connected(supplier("4", "D", 4.0, &[]), None),
    ];
    let query = SupplierQuery {
        status: StatusFilter::Active,
        ..SupplierQuery::default()
    };
    assert_eq!(ids(&run_query(&suppliers, &query)), vec!["1"]);
}

#[test]
fn status_all_does_not_restrict() {
    let suppliers = vec![
        connected(supplier("1", "A", 4.0, &[]), Some(ConnectionStatus::Pending)),
        supplier("2", "B", 4.0, &[]),
    ];
    let query = SupplierQuery {
        status: StatusFilter::All,
        ..SupplierQuery::default()
    };
    assert_eq!(run_query(&suppliers, &query).len(), 2);
}

#[test]
fn filters_combine_with_and() {
    let suppliers = vec![
        connected(
            supplier("1", "Steel Corp India", 4.8, &["Carbon Steel"]),
            Some(ConnectionStatus::Active),
        ),
        connected(
            supplier("2", "Steel Works Pending", 4.7, &["Carbon Steel"]),
            Some(ConnectionStatus::Pending),
        ),
        connected(
            supplier("3", "Steel Polymers", 4.7, &["Elastomers"]),
            Some(ConnectionStatus::Active),
        ),
    ];
    let query = SupplierQuery {
        search: "steel".to_string(),
        specialties: vec!["Carbon Steel".to_string()],
        status: StatusFilter::Active,
        sort: Some(SortKey::Rating),
    };
    assert_eq!(ids(&run_query(&suppliers, &query)), vec!["1"]);
}

#[test]
fn rating_sort_is_descending_and_stable() {
    let suppliers = vec![
        supplier("a", "First Tie", 4.5, &[]),
        supplier("b", "Top", 4.9, &[]),
        supplier("c", "Second Tie", 4.5, &[]),
        supplier("d", "Low", 3.0, &[]),
    ];
    let query = SupplierQuery {
        sort: Some(SortKey::Rating),
        ..SupplierQuery::default()
    };
    assert_eq!(ids(&run_query(&suppliers, &query)), vec!["b", "a", "c", "d"]);
}

#[test]
fn name_sort_is_ascending() {
    let suppliers = sample();
    let query = SupplierQuery {
        sort: Some(SortKey::Name),
        ..SupplierQuery::default()
    };
    let names: Vec<&str> = run_query(&suppliers, &query)
        .iter()
        .map(|s| s.company_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "EcoFiber Textiles",
            "MetalWorks Germany",
            "Polymer Solutions Ltd",
            "Steel Corp India"
        ]
    );
}

#[test]
fn materials_count_sort_is_descending() {
    let mut suppliers = sample();
    suppliers[0].materials_count = 45;
    suppliers[1].materials_count = 156;
    suppliers[2].materials_count = 45;
    suppliers[3].materials_count = 28;
    let query = SupplierQuery {
        sort: Some(SortKey::MaterialsCount),
        ..SupplierQuery::default()
    };
    assert_eq!(ids(&run_query(&suppliers, &query)), vec!["2", "1", "3", "4"]);
}

#[test]
fn seed_discovery_sorted_by_rating() {
    let catalog = Catalog::seed().expect("seed");
    let query = SupplierQuery {
        sort: Some(SortKey::Rating),
        ..SupplierQuery::default()
    };
    let results = run_query(&catalog.suppliers, &query);
    assert_eq!(results[0].company_name, "MetalWorks Germany");
    // Steel Corp India and CeramTech tie at 4.8; seed order is kept.
    assert_eq!(results[1].id, "1");
    assert_eq!(results[2].id, "8");
}

#[test]
fn sort_key_and_status_parse_from_strings() {
    assert_eq!("rating".parse::<SortKey>(), Ok(SortKey::Rating));
    assert_eq!("materials".parse::<SortKey>(), Ok(SortKey::MaterialsCount));
    assert!("price".parse::<SortKey>().is_err());
    assert_eq!("pending".parse::<StatusFilter>(), Ok(StatusFilter::Pending));
    assert!("connected".parse::<StatusFilter>().is_err());
}

#[test]
fn network_view_only_lists_connected_and_skips_bio() {
    let mut with_bio_match = connected(
        supplier("2", "Polymer Solutions Ltd", 4.6, &[]),
        Some(ConnectionStatus::Active),
    );
    with_bio_match.bio = "Steel-adjacent polymers".to_string();
    let suppliers = vec![
        connected(
            supplier("1", "Steel Corp India", 4.8, &[]),
            Some(ConnectionStatus::Active),
        ),
        with_bio_match,
        supplier("3", "Steel Unconnected", 4.0, &[]),
    ];

    assert_eq!(
        ids(&network_view(&suppliers, "", StatusFilter::All)),
        vec!["1", "2"]
    );
    assert_eq!(
        ids(&network_view(&suppliers, "STEEL", StatusFilter::All)),
        vec!["1"]
    );
}

#[test]
fn network_view_filters_by_status() {
    let catalog = Catalog::seed().expect("seed");
    let pending = network_view(&catalog.suppliers, "", StatusFilter::Pending);
    assert_eq!(ids(&pending), vec!["4"]);
    let active = network_view(&catalog.suppliers, "", StatusFilter::Active);
    assert_eq!(ids(&active), vec!["1", "2", "7"]);
}

#[test]
fn network_stats_count_connected_by_status() {
    let catalog = Catalog::seed().expect("seed");
    let stats = NetworkStats::from_suppliers(&catalog.suppliers);
    assert_eq!(
        stats,
        NetworkStats {
            total: 4,
            active: 3,
            pending: 1,
            inactive: 0,
        }
    );
}
