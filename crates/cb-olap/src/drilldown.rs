//! Drill-down operation: navigate from aggregate to detail
//!
//! Two forms:
//!
//! - [`hierarchy`] precomputes the full quarter→month→region→product
//!   grouping of the view as a tree sized by summed sales.
//! - Sequential navigation: pick a quarter, then a month within it
//!   ([`months_in_quarter`]), then [`drill`] produces the region→product
//!   tree and total for the resulting subset.

use crate::types::DimKey;
use cb_core::{FactRecord, FactView};
use serde::Serialize;
use std::collections::BTreeMap;

/// A node of a drill-down hierarchy, sized by summed sales
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrillNode {
    /// Group label at this level
    pub label: String,
    /// Summed sales of the subtree
    pub total: u64,
    /// Child groups, in key order
    pub children: Vec<DrillNode>,
}

impl DrillNode {
    fn leaf(label: String, total: u64) -> Self {
        Self {
            label,
            total,
            children: Vec::new(),
        }
    }
}

/// Result of a sequential drill-down to one quarter and month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrillResult {
    /// Selected quarter (1-4)
    pub quarter: u32,
    /// Selected month (1-12)
    pub month: u32,
    /// Region→product hierarchy of the subset
    pub tree: DrillNode,
    /// Summed sales of the subset
    pub total: u64,
}

/// Group records by a key, preserving key order
fn group_by<'a>(
    records: &[&'a FactRecord],
    key: impl Fn(&FactRecord) -> DimKey,
    label: impl Fn(&DimKey) -> String,
) -> Vec<(String, Vec<&'a FactRecord>)> {
    let mut groups: BTreeMap<DimKey, Vec<&FactRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
        .into_iter()
        .map(|(k, members)| (label(&k), members))
        .collect()
}

fn sum(records: &[&FactRecord]) -> u64 {
    records.iter().map(|r| r.sales_amount).sum()
}

/// Region→product subtree of a record set
fn region_product_children(records: &[&FactRecord]) -> Vec<DrillNode> {
    group_by(
        records,
        |r| DimKey::Text(r.region.clone()),
        |k| match k {
            DimKey::Text(s) => s.clone(),
            DimKey::Num(n) => n.to_string(),
        },
    )
    .into_iter()
    .map(|(region, members)| {
        let products = group_by(
            &members,
            |r| DimKey::Text(r.product.clone()),
            |k| match k {
                DimKey::Text(s) => s.clone(),
                DimKey::Num(n) => n.to_string(),
            },
        )
        .into_iter()
        .map(|(product, leaf_members)| DrillNode::leaf(product, sum(&leaf_members)))
        .collect::<Vec<_>>();

        DrillNode {
            label: region,
            total: sum(&members),
            children: products,
        }
    })
    .collect()
}

/// Full quarter→month→region→product hierarchy of the view
///
/// The root node carries the view total; its children are quarters in order.
pub fn hierarchy(view: &FactView<'_>) -> DrillNode {
    let quarters = group_by(
        view.records(),
        |r| DimKey::Num(r.quarter()),
        |k| match k {
            DimKey::Num(q) => format!("Q{}", q),
            DimKey::Text(s) => s.clone(),
        },
    )
    .into_iter()
    .map(|(quarter_label, quarter_records)| {
        let months = group_by(
            &quarter_records,
            |r| DimKey::Num(r.month()),
            |k| match k {
                DimKey::Num(m) => m.to_string(),
                DimKey::Text(s) => s.clone(),
            },
        )
        .into_iter()
        .map(|(month_label, month_records)| DrillNode {
            label: month_label,
            total: sum(&month_records),
            children: region_product_children(&month_records),
        })
        .collect::<Vec<_>>();

        DrillNode {
            label: quarter_label,
            total: sum(&quarter_records),
            children: months,
        }
    })
    .collect::<Vec<_>>();

    DrillNode {
        label: "total".to_string(),
        total: view.total_sales(),
        children: quarters,
    }
}

/// Months (1-12) present within a quarter of the view, ascending
pub fn months_in_quarter(view: &FactView<'_>, quarter: u32) -> Vec<u32> {
    view.retain(|r| r.quarter() == quarter).months()
}

/// Drill to one quarter and month; region→product tree plus subset total
pub fn drill(view: &FactView<'_>, quarter: u32, month: u32) -> DrillResult {
    let subset = view.retain(|r| r.quarter() == quarter && r.month() == month);
    let total = subset.total_sales();

    DrillResult {
        quarter,
        month,
        tree: DrillNode {
            label: format!("Q{} / month {}", quarter, month),
            total,
            children: region_product_children(subset.records()),
        },
        total,
    }
}

#[cfg(test)]
#[path = "drilldown_test.rs"]
mod tests;
