use super::*;
use cb_core::{FactRecord, SalesDataset};

fn record(date: &str, product: &str, region: &str, amount: u64) -> FactRecord {
    FactRecord::new(date.parse().unwrap(), product, region, amount)
}

fn dataset() -> SalesDataset {
    SalesDataset::from_records(vec![
        record("2024-01-05", "A", "Centro", 100),
        record("2024-04-10", "B", "Sur", 200),
        record("2024-04-12", "A", "Sur", 50),
        record("2024-10-01", "B", "Norte", 400),
    ])
}

#[test]
fn test_pivot_rejects_equal_axes() {
    let ds = dataset();
    for dim in Dimension::ALL {
        let err = pivot(&ds.view(), dim, dim).unwrap_err();
        assert_eq!(err, OlapError::PivotAxesEqual { dim });
    }
}

#[test]
fn test_pivot_region_by_product() {
    let ds = dataset();
    let tab = pivot(&ds.view(), Dimension::Region, Dimension::Product).unwrap();

    assert_eq!(tab.row_labels, vec!["Centro", "Norte", "Sur"]);
    assert_eq!(tab.col_labels, vec!["A", "B"]);
    assert_eq!(tab.get("Sur", "A"), Some(50));
    assert_eq!(tab.get("Norte", "A"), Some(0));
    assert_eq!(tab.grand_total(), 750);
}

#[test]
fn test_pivot_transpose_symmetry() {
    let ds = dataset();
    let view = ds.view();

    for index in Dimension::ALL {
        for columns in Dimension::ALL {
            if index == columns {
                continue;
            }
            let forward = pivot(&view, index, columns).unwrap();
            let backward = pivot(&view, columns, index).unwrap();
            assert_eq!(forward.transpose(), backward, "{} x {}", index, columns);
        }
    }
}

#[test]
fn test_pivot_quarter_by_month() {
    let ds = dataset();
    let tab = pivot(&ds.view(), Dimension::Quarter, Dimension::Month).unwrap();

    assert_eq!(tab.row_labels, vec!["Q1", "Q2", "Q4"]);
    assert_eq!(tab.col_labels, vec!["1", "4", "10"]);
    assert_eq!(tab.get("Q2", "4"), Some(250));
    // A quarter never overlaps another quarter's months
    assert_eq!(tab.get("Q1", "4"), Some(0));
}

#[test]
fn test_pivot_stats() {
    let ds = dataset();
    let tab = pivot(&ds.view(), Dimension::Region, Dimension::Product).unwrap();
    let stats = tab.cell_stats();
    assert_eq!(stats.max, 400);
    assert_eq!(stats.min, 0);
    assert!((stats.mean - 750.0 / 6.0).abs() < 1e-9);
}
