//! Column sorting for a single supplier's raw material table.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::suppliers::RawMaterial;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialSortField {
    #[default]
    Name,
    Category,
    LeadTime,
    StockStatus,
}

impl FromStr for MaterialSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(MaterialSortField::Name),
            "category" => Ok(MaterialSortField::Category),
            "lead_time" | "leadTime" => Ok(MaterialSortField::LeadTime),
            "stock_status" | "stockStatus" => Ok(MaterialSortField::StockStatus),
            other => Err(format!(
                "unknown sort field '{other}'; expected name, category, lead_time or stock_status"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{other}'; expected asc or desc")),
        }
    }
}

/// Current sort column and direction of a material table. Starts at name ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSort {
    pub field: MaterialSortField,
    pub direction: SortDirection,
}

impl MaterialSort {
    #[must_use]
    pub fn new(field: MaterialSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order. There is no unsorted state.
    pub fn toggle(&mut self, field: MaterialSortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    fn compare(self, a: &RawMaterial, b: &RawMaterial) -> Ordering {
        let ordering = match self.field {
            MaterialSortField::Name => a.name.cmp(&b.name),
            MaterialSortField::Category => a.category.cmp(&b.category),
            MaterialSortField::LeadTime => compare_lead_times(&a.lead_time, &b.lead_time),
            MaterialSortField::StockStatus => a
                .stock_status
                .urgency_rank()
                .cmp(&b.stock_status.urgency_rank()),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Return a sorted copy of `materials`; the source order is left untouched so
/// later re-sorts start from the canonical order.
#[must_use]
pub fn sort_materials(materials: &[RawMaterial], sort: MaterialSort) -> Vec<RawMaterial> {
    let mut sorted = materials.to_vec();
    sorted.sort_by(|a, b| sort.compare(a, b));
    sorted
}

/// Parse the lower bound of a `"<min>-<max> days"` lead time.
///
/// Takes the text before the first `-` and reads its leading integer, so
/// `"5-7 days"` gives 5 and `"10 days"` gives 10. Returns `None` when there
/// is no leading integer. Signs are not accepted (`"+5-7 days"` is `None`),
/// and neither are values above `u32::MAX`; both rank as malformed.
#[must_use]
pub fn parse_lead_time_min(lead_time: &str) -> Option<u32> {
    let head = lead_time.split('-').next().unwrap_or_default().trim_start();
    let digits_end = head
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(head.len());
    head[..digits_end].parse().ok()
}

/// Unparseable lead times rank after every parseable one (ascending).
fn compare_lead_times(a: &str, b: &str) -> Ordering {
    match (parse_lead_time_min(a), parse_lead_time_min(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suppliers::fixtures::material;
    use crate::suppliers::StockStatus;

    fn names(materials: &[RawMaterial]) -> Vec<&str> {
        materials.iter().map(|m| m.name.as_str()).collect()
    }

    fn lead_time_fixture() -> Vec<RawMaterial> {
        vec![
            material("m1", "Carbon Steel Sheet", "5-7 days", StockStatus::InStock),
            material("m2", "Tool Steel D2", "14-21 days", StockStatus::OutOfStock),
            material("m3", "Industrial Acetone", "2-3 days", StockStatus::LowStock),
        ]
    }

    #[test]
    fn lead_time_sort_is_numeric_not_lexicographic() {
        let sort = MaterialSort::new(MaterialSortField::LeadTime, SortDirection::Asc);
        let sorted = sort_materials(&lead_time_fixture(), sort);
        let lead_times: Vec<&str> = sorted.iter().map(|m| m.lead_time.as_str()).collect();
        assert_eq!(lead_times, vec!["2-3 days", "5-7 days", "14-21 days"]);
    }

    #[test]
    fn lead_time_sort_descending_reverses() {
        let sort = MaterialSort::new(MaterialSortField::LeadTime, SortDirection::Desc);
        let sorted = sort_materials(&lead_time_fixture(), sort);
        let lead_times: Vec<&str> = sorted.iter().map(|m| m.lead_time.as_str()).collect();
        assert_eq!(lead_times, vec!["14-21 days", "5-7 days", "2-3 days"]);
    }

    #[test]
    fn malformed_lead_time_sorts_last_ascending() {
        let mut materials = lead_time_fixture();
        materials.insert(
            0,
            material("m4", "Custom Alloy", "on request", StockStatus::InStock),
        );
        let sort = MaterialSort::new(MaterialSortField::LeadTime, SortDirection::Asc);
        let sorted = sort_materials(&materials, sort);
        assert_eq!(sorted.last().map(|m| m.id.as_str()), Some("m4"));
    }

    #[test]
    fn parse_lead_time_min_cases() {
        assert_eq!(parse_lead_time_min("5-7 days"), Some(5));
        assert_eq!(parse_lead_time_min("14-21 days"), Some(14));
        assert_eq!(parse_lead_time_min(" 3 - 5 days"), Some(3));
        assert_eq!(parse_lead_time_min("10 days"), Some(10));
        assert_eq!(parse_lead_time_min("on request"), None);
        assert_eq!(parse_lead_time_min("-5 days"), None);
        assert_eq!(parse_lead_time_min(""), None);
    }

    #[test]
    fn parse_lead_time_min_rejects_signs_and_overflow() {
        assert_eq!(parse_lead_time_min("+5-7 days"), None);
        assert_eq!(parse_lead_time_min("4294967296 days"), None);
        assert_eq!(parse_lead_time_min("4294967295 days"), Some(u32::MAX));
    }

    #[test]
    fn stock_status_sort_uses_urgency_rank() {
        let mut materials = lead_time_fixture();
        materials.push(material("m5", "Mystery", "1-2 days", StockStatus::Unknown));
        let sort = MaterialSort::new(MaterialSortField::StockStatus, SortDirection::Asc);
        let sorted = sort_materials(&materials, sort);
        let statuses: Vec<StockStatus> = sorted.iter().map(|m| m.stock_status).collect();
        assert_eq!(
            statuses,
            vec![
                StockStatus::InStock,
                StockStatus::LowStock,
                StockStatus::OutOfStock,
                StockStatus::Unknown
            ]
        );
    }

    #[test]
    fn name_sort_ascending_and_descending() {
        let materials = lead_time_fixture();
        let asc = sort_materials(&materials, MaterialSort::default());
        assert_eq!(
            names(&asc),
            vec!["Carbon Steel Sheet", "Industrial Acetone", "Tool Steel D2"]
        );
        let desc = sort_materials(
            &materials,
            MaterialSort::new(MaterialSortField::Name, SortDirection::Desc),
        );
        assert_eq!(
            names(&desc),
            vec!["Tool Steel D2", "Industrial Acetone", "Carbon Steel Sheet"]
        );
    }

    #[test]
    fn category_sort_is_stable_for_equal_categories() {
        let mut materials = lead_time_fixture();
        materials[1].category = "Alloys".to_string();
        let sort = MaterialSort::new(MaterialSortField::Category, SortDirection::Asc);
        let sorted = sort_materials(&materials, sort);
        // m1 and m3 share "General" and keep their input order.
        let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m1", "m3"]);
    }

    #[test]
    fn sorting_does_not_mutate_source() {
        let materials = lead_time_fixture();
        let before = materials.clone();
        let _ = sort_materials(
            &materials,
            MaterialSort::new(MaterialSortField::LeadTime, SortDirection::Asc),
        );
        assert_eq!(materials, before);
    }

    #[test]
    fn toggle_flips_direction_on_same_column_without_unsorted_state() {
        let mut sort = MaterialSort::new(MaterialSortField::LeadTime, SortDirection::Desc);
        sort.toggle(MaterialSortField::LeadTime);
        assert_eq!(sort.direction, SortDirection::Asc);
        sort.toggle(MaterialSortField::LeadTime);
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.toggle(MaterialSortField::LeadTime);
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(sort.field, MaterialSortField::LeadTime);
    }

    #[test]
    fn toggle_new_column_starts_ascending() {
        let mut sort = MaterialSort::default();
        sort.toggle(MaterialSortField::Name);
        assert_eq!(sort.direction, SortDirection::Desc);
        sort.toggle(MaterialSortField::StockStatus);
        assert_eq!(
            sort,
            MaterialSort::new(MaterialSortField::StockStatus, SortDirection::Asc)
        );
    }

    #[test]
    fn sort_field_and_direction_parse() {
        assert_eq!(
            "leadTime".parse::<MaterialSortField>(),
            Ok(MaterialSortField::LeadTime)
        );
        assert_eq!(
            "stock_status".parse::<MaterialSortField>(),
            Ok(MaterialSortField::StockStatus)
        );
        assert!("price".parse::<MaterialSortField>().is_err());
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
