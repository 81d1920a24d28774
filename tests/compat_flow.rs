//! Fit summary files through the df_model backfill, plus seasonal order handling.

use std::fs;

use arima_compat::compat::{BackendVersion, bind_df_model, check_seasonal_order, validate_seasonal_order};
use arima_compat::domain::{LagSpec, SeasonalOrder};
use arima_compat::io::{read_summary_json, write_summary_json};

const SUMMARY_WITHOUT_DF: &str = r#"{
  "model": {
    "k_exog": 1, "k_trend": 1, "k_ar": 2, "k_ma": 1,
    "k_seasonal_ar": 1, "k_seasonal_ma": 1
  },
  "results": { "llf": -1650.25, "nobs": 176 }
}"#;

#[test]
fn summary_file_gets_df_model_and_criteria() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("fit.json");
    fs::write(&path, SUMMARY_WITHOUT_DF).unwrap();

    let mut summary = read_summary_json(&path).unwrap();
    assert!(summary.results.aic().is_none());

    bind_df_model(&summary.model, &mut summary.results).unwrap();
    assert_eq!(summary.results.df_model, Some(7));
    // k = 8
    assert!((summary.results.aic().unwrap() - (16.0 + 3300.5)).abs() < 1e-9);

    write_summary_json(&path, &summary).unwrap();
    let reread = read_summary_json(&path).unwrap();
    assert_eq!(reread.results.df_model, Some(7));

    // A second pass over the patched file changes nothing.
    let mut again = reread.clone();
    bind_df_model(&again.model, &mut again.results).unwrap();
    assert_eq!(again, reread);
}

#[test]
fn summary_missing_a_count_fails_backfill() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("fit.json");
    fs::write(
        &path,
        r#"{"model": {"k_exog": 0, "k_trend": 0, "k_ar": 1, "k_ma": 0, "k_seasonal_ar": 0},
            "results": {"llf": -1.0, "nobs": 10}}"#,
    )
    .unwrap();

    let mut summary = read_summary_json(&path).unwrap();
    let err = bind_df_model(&summary.model, &mut summary.results).unwrap_err();
    assert!(err.to_string().contains("k_seasonal_ma"));
}

#[test]
fn seasonal_orders_from_the_documented_table() {
    assert_eq!(check_seasonal_order(SeasonalOrder::new(0, 0, 0, 1)), SeasonalOrder::none());
    assert_eq!(check_seasonal_order(SeasonalOrder::new(1, 0, 0, 1)), SeasonalOrder::new(1, 0, 0, 1));
    assert_eq!(check_seasonal_order(SeasonalOrder::new(0, 0, 0, 2)), SeasonalOrder::new(0, 0, 0, 2));
}

#[test]
fn normalization_avoids_unit_period_rejection() {
    let backend: BackendVersion = "0.11.1".parse().unwrap();
    let raw = SeasonalOrder::new(0, 0, 0, 1);
    assert!(validate_seasonal_order(&raw, backend).is_err());
    assert!(validate_seasonal_order(&check_seasonal_order(raw), backend).is_ok());
}

#[test]
fn lag_list_orders_pass_through() {
    let order = SeasonalOrder {
        ar: LagSpec::Lags(vec![1, 0, 1]),
        diff: 0,
        ma: LagSpec::Order(0),
        period: 12,
    };
    let normalized = check_seasonal_order(order.clone());
    assert_eq!(normalized, order);
    assert!(validate_seasonal_order(&normalized, BackendVersion::default()).is_ok());
}
