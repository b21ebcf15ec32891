//! Marketing directory search.

use chainlink_core::{Directory, DirectoryQuery};

use crate::suppliers::truncate;

/// Print listings matching `query`, followed by the available filter values.
pub(crate) fn run_directory_search(directory: &Directory, query: &DirectoryQuery) {
    let results = directory.search(query);

    if results.is_empty() {
        println!("no directory listings match the current filters");
    } else {
        println!(
            "{:<5}{:<30}{:<24}{:<22}{:<8}{:<9}VERIFIED",
            "ID", "NAME", "INDUSTRY", "LOCATION", "RATING", "REVIEWS"
        );
        for listing in &results {
            println!(
                "{:<5}{:<30}{:<24}{:<22}{:<8.1}{:<9}{}",
                listing.id,
                truncate(&listing.name, 26),
                truncate(&listing.industry, 20),
                truncate(&listing.location, 18),
                listing.rating,
                listing.reviews,
                if listing.verified { "yes" } else { "no" }
            );
        }
    }

    println!();
    println!("Industries: {}", directory.industries().join(", "));
    println!("Locations: {}", directory.locations().join(", "));
}
