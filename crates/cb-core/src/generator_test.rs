use super::*;
use tempfile::TempDir;

fn small_config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        records: 200,
        seed: Some(seed),
        ..GeneratorConfig::default()
    }
}

#[test]
fn test_multipliers() {
    assert_eq!(seasonal_multiplier(3), 1.2);
    assert_eq!(seasonal_multiplier(4), 1.2);
    assert_eq!(seasonal_multiplier(11), 1.5);
    assert_eq!(seasonal_multiplier(12), 1.5);
    assert_eq!(seasonal_multiplier(6), 0.8);
    assert_eq!(seasonal_multiplier(9), 0.8);
    assert_eq!(seasonal_multiplier(1), 1.0);
    assert_eq!(seasonal_multiplier(7), 1.0);

    assert_eq!(product_multiplier("A"), 1.1);
    assert_eq!(product_multiplier("C"), 0.95);
    assert_eq!(product_multiplier("B"), 1.0);

    assert_eq!(region_multiplier("Centro"), 1.3);
    assert_eq!(region_multiplier("Sur"), 0.9);
    assert_eq!(region_multiplier("Norte"), 1.0);
}

#[test]
fn test_generate_respects_config() {
    let config = small_config(7);
    let ds = generate(&config).unwrap();

    assert_eq!(ds.len(), 200);
    for r in ds.records() {
        assert!(r.date >= config.start && r.date <= config.end);
        assert!(config.products.contains(&r.product));
        assert!(config.regions.contains(&r.region));
        // base in 100..=300 scaled by at most 1.5 * 1.1 * 1.3
        assert!(r.sales_amount >= (100.0_f64 * 0.8 * 0.95 * 0.9).floor() as u64);
        assert!(r.sales_amount <= (300.0_f64 * 1.5 * 1.1 * 1.3).floor() as u64);
    }
}

#[test]
fn test_same_seed_reproduces_identical_file() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");

    generate(&small_config(42)).unwrap().write_csv(&a).unwrap();
    generate(&small_config(42)).unwrap().write_csv(&b).unwrap();

    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[test]
fn test_different_seeds_diverge() {
    let a = generate(&small_config(1)).unwrap();
    let b = generate(&small_config(2)).unwrap();
    assert_ne!(a.records(), b.records());
}

#[test]
fn test_inverted_window_rejected() {
    let config = GeneratorConfig {
        start: chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        end: chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        generate(&config).unwrap_err(),
        CoreError::InvalidDateWindow { .. }
    ));
}

#[test]
fn test_empty_dimension_set_rejected() {
    let config = GeneratorConfig {
        products: Vec::new(),
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        generate(&config).unwrap_err(),
        CoreError::EmptyDimensionSet { .. }
    ));
}

#[test]
fn test_single_day_window() {
    let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let config = GeneratorConfig {
        records: 10,
        start: day,
        end: day,
        seed: Some(0),
        ..GeneratorConfig::default()
    };
    let ds = generate(&config).unwrap();
    assert!(ds.records().iter().all(|r| r.date == day));
}
