use super::*;
use cb_core::{FactRecord, SalesDataset};

fn record(date: &str, product: &str, region: &str, amount: u64) -> FactRecord {
    FactRecord::new(date.parse().unwrap(), product, region, amount)
}

fn dataset() -> SalesDataset {
    SalesDataset::from_records(vec![
        record("2024-03-05", "A", "Centro", 150),
        record("2024-03-05", "B", "Sur", 200),
        record("2024-08-10", "A", "Centro", 90),
        record("2024-12-01", "B", "Centro", 300),
    ])
}

fn selection(products: &[&str], regions: &[&str], quarters: &[u32]) -> DiceSelection {
    DiceSelection {
        products: products.iter().map(|s| s.to_string()).collect(),
        regions: regions.iter().map(|s| s.to_string()).collect(),
        quarters: quarters.to_vec(),
    }
}

#[test]
fn test_dice_single_cell() {
    let ds = dataset();
    let result = dice(&ds.view(), &selection(&["A"], &["Centro"], &[1])).unwrap();

    assert_eq!(result.summary.total, 150);
    assert_eq!(result.summary.count, 1);
    assert_eq!(result.crosstab.row_labels, vec!["Centro"]);
    assert_eq!(result.crosstab.col_labels, vec!["A"]);
    assert_eq!(result.crosstab.get("Centro", "A"), Some(150));
    assert!((result.percent_of_year - 25.0).abs() < 1e-9);
}

#[test]
fn test_dice_rejects_empty_selection() {
    let ds = dataset();
    let view = ds.view();

    let err = dice(&view, &selection(&[], &["Sur"], &[1])).unwrap_err();
    assert_eq!(err, OlapError::EmptySelection { dimension: "product" });

    let err = dice(&view, &selection(&["A"], &[], &[1])).unwrap_err();
    assert_eq!(err, OlapError::EmptySelection { dimension: "region" });

    let err = dice(&view, &selection(&["A"], &["Sur"], &[])).unwrap_err();
    assert_eq!(err, OlapError::EmptySelection { dimension: "quarter" });
}

#[test]
fn test_dice_cell_sums_match_filtered_total() {
    let ds = dataset();
    let result = dice(
        &ds.view(),
        &selection(&["A", "B"], &["Centro", "Sur"], &[1, 2, 3, 4]),
    )
    .unwrap();

    assert_eq!(result.crosstab.grand_total(), result.summary.total);
    assert_eq!(result.summary.total, 740);
    assert!((result.percent_of_year - 100.0).abs() < 1e-9);
}

#[test]
fn test_dice_no_matches_is_empty_not_error() {
    let ds = dataset();
    let result = dice(&ds.view(), &selection(&["Z"], &["Centro"], &[1])).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.summary, Summary::empty());
    assert!(result.crosstab.is_empty());
    assert_eq!(result.percent_of_year, 0.0);
}

#[test]
fn test_dice_quarter_filtering() {
    let ds = dataset();
    // Q3 only holds the 2024-08-10 record
    let result = dice(
        &ds.view(),
        &selection(&["A", "B"], &["Centro", "Sur"], &[3]),
    )
    .unwrap();
    assert_eq!(result.summary.total, 90);
    assert_eq!(result.summary.count, 1);
}
