use super::*;
use cb_core::{FactRecord, SalesDataset};

fn record(date: &str, product: &str, region: &str, amount: u64) -> FactRecord {
    FactRecord::new(date.parse().unwrap(), product, region, amount)
}

fn dataset() -> SalesDataset {
    SalesDataset::from_records(vec![
        record("2024-03-05", "A", "Centro", 150),
        record("2024-03-05", "B", "Sur", 200),
    ])
}

#[test]
fn test_slice_on_product() {
    let ds = dataset();
    let filter = SliceFilter {
        product: Some("A".to_string()),
        region: None,
    };
    let result = slice(&ds.view(), &filter);

    assert_eq!(result.summary.total, 150);
    assert_eq!(result.summary.count, 1);
    assert!((result.summary.mean - 150.0).abs() < 1e-9);
    assert_eq!(result.monthly, vec![MonthlySales { month: 3, total: 150 }]);
    assert!(!result.is_empty());
}

#[test]
fn test_slice_unfiltered_is_whole_view() {
    let ds = dataset();
    let result = slice(&ds.view(), &SliceFilter::default());

    assert!(result.filter.is_unfiltered());
    assert_eq!(result.summary.total, 350);
    assert_eq!(result.summary.count, 2);
}

#[test]
fn test_slice_on_both_dimensions() {
    let ds = dataset();
    let filter = SliceFilter {
        product: Some("B".to_string()),
        region: Some("Sur".to_string()),
    };
    let result = slice(&ds.view(), &filter);
    assert_eq!(result.summary.total, 200);
    assert_eq!(filter.describe(), vec!["product = B", "region = Sur"]);
}

#[test]
fn test_empty_slice_degrades_to_zero_metrics() {
    let ds = dataset();
    let filter = SliceFilter {
        product: Some("A".to_string()),
        region: Some("Sur".to_string()),
    };
    let result = slice(&ds.view(), &filter);

    assert!(result.is_empty());
    assert_eq!(result.summary, Summary::empty());
    assert!(result.monthly.is_empty());
}

#[test]
fn test_monthly_series_is_month_ascending() {
    let ds = SalesDataset::from_records(vec![
        record("2024-11-01", "A", "Centro", 10),
        record("2024-02-01", "A", "Centro", 20),
        record("2024-02-15", "A", "Centro", 30),
        record("2024-07-01", "A", "Centro", 40),
    ]);
    let result = slice(&ds.view(), &SliceFilter::default());

    let months: Vec<u32> = result.monthly.iter().map(|m| m.month).collect();
    assert_eq!(months, vec![2, 7, 11]);
    assert_eq!(result.monthly[0].total, 50);
}

#[test]
fn test_slice_partition_property() {
    // Summing slice totals over all (product, region) pairs reproduces the
    // unfiltered view total.
    let ds = SalesDataset::from_records(vec![
        record("2024-01-05", "A", "Centro", 150),
        record("2024-02-05", "B", "Sur", 200),
        record("2024-03-05", "A", "Sur", 70),
        record("2024-04-05", "C", "Centro", 30),
        record("2024-05-05", "C", "Norte", 400),
    ]);
    let view = ds.view();

    let mut partitioned = 0;
    for product in view.products() {
        for region in view.regions() {
            let filter = SliceFilter {
                product: Some(product.clone()),
                region: Some(region.clone()),
            };
            partitioned += slice(&view, &filter).summary.total;
        }
    }
    assert_eq!(partitioned, view.total_sales());
}
