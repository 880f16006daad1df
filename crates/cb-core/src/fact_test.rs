use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_quarter_boundaries() {
    let cases = [
        (1, 1),
        (2, 1),
        (3, 1),
        (4, 2),
        (6, 2),
        (7, 3),
        (9, 3),
        (10, 4),
        (12, 4),
    ];
    for (month, quarter) in cases {
        let r = FactRecord::new(date(2024, month, 15), "A", "Norte", 100);
        assert_eq!(r.quarter(), quarter, "month {} should be Q{}", month, quarter);
        assert_eq!(r.month(), month);
    }
}

#[test]
fn test_year_and_weekday() {
    // 2024-03-05 was a Tuesday
    let r = FactRecord::new(date(2024, 3, 5), "A", "Centro", 150);
    assert_eq!(r.year(), 2024);
    assert_eq!(r.weekday_name(), "Tuesday");

    // Leap day
    let r = FactRecord::new(date(2024, 2, 29), "B", "Sur", 200);
    assert_eq!(r.month(), 2);
    assert_eq!(r.quarter(), 1);
    assert_eq!(r.weekday_name(), "Thursday");
}

#[test]
fn test_derived_attributes_follow_date() {
    // Attributes are computed from the date, so changing the date changes them
    let mut r = FactRecord::new(date(2023, 12, 31), "C", "Este", 50);
    assert_eq!((r.year(), r.month(), r.quarter()), (2023, 12, 4));

    r.date = date(2024, 1, 1);
    assert_eq!((r.year(), r.month(), r.quarter()), (2024, 1, 1));
}

#[test]
fn test_serde_round_trip() {
    let r = FactRecord::new(date(2024, 3, 5), "A", "Centro", 150);
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"2024-03-05\""));
    let back: FactRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}
