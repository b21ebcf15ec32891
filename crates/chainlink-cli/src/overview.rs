//! Dashboard overview printout.

use chainlink_core::{ActivityKind, DashboardOverview};

fn activity_marker(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Success => "[ok]",
        ActivityKind::Info => "[info]",
        ActivityKind::Warning => "[warn]",
    }
}

/// Print stat cards, both monthly series and the recent activity feed.
pub(crate) fn run_dashboard(dashboard: &DashboardOverview) {
    let badge = if dashboard.verified {
        " (verified)"
    } else {
        ""
    };
    println!("{}{badge}", dashboard.company_name);
    println!();

    println!("{:<28}{:<12}CHANGE", "METRIC", "VALUE");
    for card in &dashboard.stats {
        println!("{:<28}{:<12}{}", card.title, card.value, card.change);
    }
    println!();

    println!("{:<8}{:<10}DEMAND", "MONTH", "ORDERS");
    for (orders, demand) in dashboard
        .monthly_orders
        .iter()
        .zip(dashboard.demand_trend.iter())
    {
        println!("{:<8}{:<10}{}", orders.month, orders.value, demand.value);
    }
    println!();

    println!("Recent activity:");
    for activity in &dashboard.recent_activity {
        println!(
            "  {:<7}{} \u{2014} {} ({})",
            activity_marker(activity.kind),
            activity.action,
            activity.description,
            activity.time
        );
    }
}
