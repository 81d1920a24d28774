//! Information criteria over backfilled results.
//!
//! - AIC  = 2k - 2 ln L
//! - AICc = AIC + 2k(k + 1) / (n - k - 1)
//! - BIC  = k ln(n) - 2 ln L
//!
//! with `k = df_model + 1` (the extra parameter is the innovation variance).
//! All return `None` until `df_model` has been bound, or when `df_model` is
//! too large for `k` to be represented.

use crate::domain::ArimaResults;

impl ArimaResults {
    /// Total estimated parameters, including the innovation variance.
    pub fn k_params(&self) -> Option<usize> {
        self.df_model?.checked_add(1)
    }

    pub fn aic(&self) -> Option<f64> {
        let k = self.k_params()? as f64;
        Some(2.0 * k - 2.0 * self.llf)
    }

    /// Small-sample corrected AIC. `None` when `n <= k + 1`.
    pub fn aicc(&self) -> Option<f64> {
        let k = self.k_params()?;
        if self.nobs <= k.checked_add(1)? {
            return None;
        }
        let aic = self.aic()?;
        let (k, n) = (k as f64, self.nobs as f64);
        Some(aic + 2.0 * k * (k + 1.0) / (n - k - 1.0))
    }

    /// `None` when there are no observations.
    pub fn bic(&self) -> Option<f64> {
        let k = self.k_params()? as f64;
        if self.nobs == 0 {
            return None;
        }
        Some(k * (self.nobs as f64).ln() - 2.0 * self.llf)
    }
}
