//! Seasonal order normalization and validation.
//!
//! A seasonal order `(P, D, Q, m)` with all-zero terms and `m == 1` means
//! "no seasonality", but backends from 0.11 on reject `m == 1` outright.
//! `check_seasonal_order` collapses that degenerate case to `(0, 0, 0, 0)`.
//! Any other out-of-range order is passed through untouched so the backend's
//! own validation can report it; `validate_seasonal_order` mirrors that check.

use crate::compat::version::BackendVersion;
use crate::domain::{LagSpec, SeasonalOrder};
use crate::error::AppError;

/// Normalize a seasonal order before it reaches backend validation.
///
/// Orders whose AR term is an explicit lag list are returned unchanged.
pub fn check_seasonal_order(order: SeasonalOrder) -> SeasonalOrder {
    if order.ar.is_lag_list() {
        return order;
    }

    match order.as_tuple() {
        Some((p, d, q, 1)) if p.checked_add(d).and_then(|s| s.checked_add(q)) == Some(0) => {
            tracing::debug!(%order, "collapsing null seasonal order with m=1");
            SeasonalOrder::none()
        }
        _ => order,
    }
}

/// Reject seasonal orders the backend would refuse.
///
/// # Errors
/// Returns an `AppError` (exit code 2) describing the first violation found.
pub fn validate_seasonal_order(order: &SeasonalOrder, backend: BackendVersion) -> Result<(), AppError> {
    check_term(&order.ar, "seasonal AR")?;
    check_term(&order.ma, "seasonal MA")?;

    if order.diff < 0 {
        return Err(invalid(order, "seasonal differencing order must be >= 0"));
    }
    if order.period < 0 {
        return Err(invalid(order, "seasonal periodicity must be >= 0"));
    }
    if order.period == 1 && backend.rejects_unit_period() {
        return Err(invalid(order, "seasonal periodicity must be greater than 1"));
    }

    let has_terms = order.ar.param_count() > 0 || order.diff > 0 || order.ma.param_count() > 0;
    if order.period == 0 && has_terms {
        return Err(invalid(order, "seasonal periodicity is required when seasonal terms are present"));
    }

    Ok(())
}

fn check_term(term: &LagSpec, label: &str) -> Result<(), AppError> {
    let ok = match term {
        LagSpec::Order(v) => *v >= 0,
        LagSpec::Lags(lags) => lags.iter().all(|&l| l == 0 || l == 1),
    };
    if ok {
        Ok(())
    } else {
        Err(AppError::new(2, format!("Invalid {label} term {term}.")))
    }
}

fn invalid(order: &SeasonalOrder, reason: &str) -> AppError {
    AppError::new(2, format!("Invalid seasonal order {order}: {reason}."))
}
