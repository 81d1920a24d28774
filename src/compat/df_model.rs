//! Model degrees-of-freedom backfill.
//!
//! Older backends return results without `df_model`. Information criteria
//! depend on it, so it is derived from the fitted model's parameter counts
//! when missing.

use crate::domain::{ArimaResults, ModelDescription, ParamCounts};
use crate::error::AppError;

/// A fitted model exposing its hyperparameter counts.
pub trait ModelFit {
    /// Read all six counts.
    ///
    /// # Errors
    /// Fails if the model does not carry one of the counts.
    fn param_counts(&self) -> Result<ParamCounts, AppError>;
}

/// A results object that may or may not already carry `df_model`.
pub trait ResultsWrapper {
    fn df_model(&self) -> Option<usize>;
    fn set_df_model(&mut self, df_model: usize);
}

impl ModelFit for ParamCounts {
    fn param_counts(&self) -> Result<ParamCounts, AppError> {
        Ok(*self)
    }
}

impl ModelFit for ModelDescription {
    fn param_counts(&self) -> Result<ParamCounts, AppError> {
        Ok(ParamCounts {
            k_exog: required(self.k_exog, "k_exog")?,
            k_trend: required(self.k_trend, "k_trend")?,
            k_ar: required(self.k_ar, "k_ar")?,
            k_ma: required(self.k_ma, "k_ma")?,
            k_seasonal_ar: required(self.k_seasonal_ar, "k_seasonal_ar")?,
            k_seasonal_ma: required(self.k_seasonal_ma, "k_seasonal_ma")?,
        })
    }
}

impl ResultsWrapper for ArimaResults {
    fn df_model(&self) -> Option<usize> {
        self.df_model
    }

    fn set_df_model(&mut self, df_model: usize) {
        self.df_model = Some(df_model);
    }
}

/// Set `df_model` on `results` in place if it is not already present.
///
/// Idempotent: an existing value is left untouched and the model's counts are
/// not read at all.
pub fn bind_df_model<M, R>(model_fit: &M, results: &mut R) -> Result<(), AppError>
where
    M: ModelFit + ?Sized,
    R: ResultsWrapper + ?Sized,
{
    if let Some(existing) = results.df_model() {
        tracing::trace!(df_model = existing, "df_model already present");
        return Ok(());
    }

    let counts = model_fit.param_counts()?;
    let df_model = counts
        .df_model()
        .ok_or_else(|| AppError::new(4, format!("Parameter counts overflow when summed: {counts:?}.")))?;
    tracing::debug!(df_model, "binding missing df_model");
    results.set_df_model(df_model);
    Ok(())
}

fn required(value: Option<usize>, name: &str) -> Result<usize, AppError> {
    value.ok_or_else(|| AppError::new(2, format!("Fitted model has no attribute '{name}'.")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> ParamCounts {
        ParamCounts {
            k_exog: 2,
            k_trend: 1,
            k_ar: 1,
            k_ma: 2,
            k_seasonal_ar: 1,
            k_seasonal_ma: 0,
        }
    }

    #[test]
    fn binds_sum_when_missing() {
        let mut res = ArimaResults::default();
        bind_df_model(&counts(), &mut res).unwrap();
        assert_eq!(res.df_model, Some(7));
    }

    #[test]
    fn existing_value_is_preserved() {
        let mut res = ArimaResults {
            df_model: Some(3),
            ..Default::default()
        };
        bind_df_model(&counts(), &mut res).unwrap();
        assert_eq!(res.df_model, Some(3));
    }

    #[test]
    fn binding_twice_is_idempotent() {
        let mut once = ArimaResults::default();
        bind_df_model(&counts(), &mut once).unwrap();

        let mut twice = ArimaResults::default();
        bind_df_model(&counts(), &mut twice).unwrap();
        bind_df_model(&counts(), &mut twice).unwrap();

        assert_eq!(once.df_model, twice.df_model);
    }

    #[test]
    fn missing_count_is_an_error() {
        let mut desc = ModelDescription::from(counts());
        desc.k_seasonal_ma = None;
        let mut res = ArimaResults::default();
        let err = bind_df_model(&desc, &mut res).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("k_seasonal_ma"));
        assert_eq!(res.df_model, None);
    }

    #[test]
    fn overflowing_counts_are_a_data_error() {
        let counts = ParamCounts {
            k_exog: usize::MAX,
            k_trend: 1,
            ..Default::default()
        };
        let mut res = ArimaResults::default();
        let err = bind_df_model(&counts, &mut res).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("overflow"));
        assert_eq!(res.df_model, None);
    }

    #[test]
    fn missing_count_is_ignored_when_already_bound() {
        let desc = ModelDescription::default();
        let mut res = ArimaResults {
            df_model: Some(4),
            ..Default::default()
        };
        bind_df_model(&desc, &mut res).unwrap();
        assert_eq!(res.df_model, Some(4));
    }
}
