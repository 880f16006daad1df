use super::*;
use cb_core::SalesDataset;

fn record(date: &str, product: &str, region: &str, amount: u64) -> FactRecord {
    FactRecord::new(date.parse().unwrap(), product, region, amount)
}

fn dataset() -> SalesDataset {
    SalesDataset::from_records(vec![
        record("2024-01-05", "A", "Centro", 100),
        record("2024-02-10", "B", "Sur", 200),
        record("2024-05-15", "A", "Norte", 300),
        record("2024-11-01", "B", "Centro", 400),
        record("2024-11-20", "A", "Sur", 500),
    ])
}

#[test]
fn test_rollup_by_quarter() {
    let ds = dataset();
    let result = rollup(&ds.view(), TimeLevel::Quarter, None);

    let labels: Vec<&str> = result.groups.iter().map(|g| g.period.as_str()).collect();
    assert_eq!(labels, vec!["Q1", "Q2", "Q4"]);
    assert_eq!(result.groups[0].total, 300);
    assert_eq!(result.groups[1].total, 300);
    assert_eq!(result.groups[2].total, 900);
    assert!(result.groups.iter().all(|g| g.category.is_none()));
}

#[test]
fn test_rollup_with_category() {
    let ds = dataset();
    let result = rollup(&ds.view(), TimeLevel::Year, Some(CategoryDim::Product));

    assert_eq!(result.groups.len(), 2);
    assert_eq!(result.groups[0].period, "2024");
    assert_eq!(result.groups[0].category.as_deref(), Some("A"));
    assert_eq!(result.groups[0].total, 900);
    assert_eq!(result.groups[1].category.as_deref(), Some("B"));
    assert_eq!(result.groups[1].total, 600);
    assert_eq!(result.groups[0].label(), "2024 - A");
}

#[test]
fn test_rollup_preserves_total_for_every_choice() {
    let ds = dataset();
    let view = ds.view();
    let expected = view.total_sales();

    for level in [TimeLevel::Year, TimeLevel::Quarter, TimeLevel::Month] {
        for by in [None, Some(CategoryDim::Product), Some(CategoryDim::Region)] {
            let result = rollup(&view, level, by);
            assert_eq!(
                result.grand_total(),
                expected,
                "level {} by {:?}",
                level,
                by
            );
        }
    }
}

#[test]
fn test_rollup_month_order_is_numeric() {
    let ds = dataset();
    let result = rollup(&ds.view(), TimeLevel::Month, None);
    let labels: Vec<&str> = result.groups.iter().map(|g| g.period.as_str()).collect();
    assert_eq!(labels, vec!["1", "2", "5", "11"]);
}

#[test]
fn test_top_ranks_by_total() {
    let ds = dataset();
    let result = rollup(&ds.view(), TimeLevel::Month, None);
    let top: Vec<(&str, u64)> = result
        .top(2)
        .into_iter()
        .map(|g| (g.period.as_str(), g.total))
        .collect();
    assert_eq!(top, vec![("11", 900), ("5", 300)]);
}

#[test]
fn test_top_breaks_ties_by_group_order() {
    let ds = SalesDataset::from_records(vec![
        record("2024-01-01", "A", "Centro", 100),
        record("2024-04-01", "A", "Centro", 100),
        record("2024-07-01", "A", "Centro", 100),
    ]);
    let result = rollup(&ds.view(), TimeLevel::Quarter, None);
    let top: Vec<&str> = result.top(2).into_iter().map(|g| g.period.as_str()).collect();
    // All totals equal: the earlier groups win
    assert_eq!(top, vec!["Q1", "Q2"]);
}

#[test]
fn test_rollup_empty_view() {
    let ds = SalesDataset::from_records(Vec::new());
    let result = rollup(&ds.view(), TimeLevel::Quarter, Some(CategoryDim::Region));
    assert!(result.groups.is_empty());
    assert_eq!(result.grand_total(), 0);
    assert!(result.top(5).is_empty());
}
