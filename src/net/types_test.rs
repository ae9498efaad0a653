use super::*;

// =============================================================
// Partial-update bodies
// =============================================================

#[test]
fn expense_patch_serializes_only_set_fields_in_camel_case() {
    let patch = ExpensePatch {
        amount: Some(12.5),
        expense_date: Some("2025-03-01".to_owned()),
        ..ExpensePatch::default()
    };
    let json = serde_json::to_string(&patch).unwrap();
    assert_eq!(json, r#"{"amount":12.5,"expenseDate":"2025-03-01"}"#);
}

#[test]
fn empty_expense_patch_serializes_to_an_empty_object() {
    let json = serde_json::to_string(&ExpensePatch::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn profile_update_omits_unset_fields() {
    let patch = ProfileUpdate {
        phone: Some("555-0101".to_owned()),
        ..ProfileUpdate::default()
    };
    let json = serde_json::to_string(&patch).unwrap();
    assert_eq!(json, r#"{"phone":"555-0101"}"#);
}

// =============================================================
// Period filter query pairs
// =============================================================

#[test]
fn full_period_filter_emits_all_four_pairs() {
    let filter = PeriodFilter {
        start_year: Some(2024),
        end_year: Some(2025),
        start_month: Some(1),
        end_month: Some(6),
    };
    assert_eq!(
        filter.query_pairs(),
        vec![
            ("startYear", "2024".to_owned()),
            ("endYear", "2025".to_owned()),
            ("startMonth", "1".to_owned()),
            ("endMonth", "6".to_owned()),
        ]
    );
}

#[test]
fn partial_period_filter_omits_unset_bounds() {
    let filter = PeriodFilter {
        start_year: Some(2024),
        end_month: Some(12),
        ..PeriodFilter::default()
    };
    assert_eq!(
        filter.query_pairs(),
        vec![
            ("startYear", "2024".to_owned()),
            ("endMonth", "12".to_owned()),
        ]
    );
}

#[test]
fn default_period_filter_emits_no_pairs() {
    assert!(PeriodFilter::default().query_pairs().is_empty());
}
