//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between the CLI and the library without conversion
//! - read from / written to JSON fit summaries
//! - printed by the report helpers

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// CI platform whose environment identified a tagged build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CiPlatform {
    CircleCi,
    AzurePipelines,
    GithubActions,
}

impl CiPlatform {
    pub fn display_name(self) -> &'static str {
        match self {
            CiPlatform::CircleCi => "Circle CI",
            CiPlatform::AzurePipelines => "Azure Pipelines",
            CiPlatform::GithubActions => "Github Actions",
        }
    }
}

/// Outcome of inspecting the CI environment for a release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagResolution {
    /// A tagged build. `tag` is the raw ref segment, `version` the normalized form.
    Tagged {
        platform: CiPlatform,
        tag: String,
        version: String,
    },
    /// Local build, or CI build of an untagged commit.
    Untagged,
}

impl TagResolution {
    pub fn version(&self) -> Option<&str> {
        match self {
            TagResolution::Tagged { version, .. } => Some(version),
            TagResolution::Untagged => None,
        }
    }
}

/// The six hyperparameter counts of a fitted ARIMA/SARIMAX model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamCounts {
    pub k_exog: usize,
    pub k_trend: usize,
    pub k_ar: usize,
    pub k_ma: usize,
    pub k_seasonal_ar: usize,
    pub k_seasonal_ma: usize,
}

impl ParamCounts {
    /// Model degrees of freedom: the number of estimated mean/ARMA parameters.
    ///
    /// `None` if the counts do not fit in a `usize` when summed.
    pub fn df_model(&self) -> Option<usize> {
        [self.k_trend, self.k_ar, self.k_ma, self.k_seasonal_ar, self.k_seasonal_ma]
            .into_iter()
            .try_fold(self.k_exog, usize::checked_add)
    }
}

/// A fitted-model description as it appears in a JSON fit summary.
///
/// Every count is optional on the wire so that summaries produced by older
/// backends (which may omit some of them) still deserialize; reading a missing
/// count is an error at the point of use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_exog: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_trend: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_ar: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_ma: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_seasonal_ar: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_seasonal_ma: Option<usize>,
}

impl From<ParamCounts> for ModelDescription {
    fn from(c: ParamCounts) -> Self {
        Self {
            k_exog: Some(c.k_exog),
            k_trend: Some(c.k_trend),
            k_ar: Some(c.k_ar),
            k_ma: Some(c.k_ma),
            k_seasonal_ar: Some(c.k_seasonal_ar),
            k_seasonal_ma: Some(c.k_seasonal_ma),
        }
    }
}

/// Results of a fitted model, as handed back by the estimation backend.
///
/// `df_model` is absent for some backend versions; see `compat::bind_df_model`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArimaResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub df_model: Option<usize>,
    /// Maximized log-likelihood.
    pub llf: f64,
    /// Number of observations used in the fit.
    pub nobs: usize,
}

/// Portable JSON representation of one fit: model counts + results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    pub model: ModelDescription,
    pub results: ArimaResults,
}

/// One seasonal AR or MA term of a seasonal order.
///
/// Callers normally pass a scalar order, but an explicit list of lags is also
/// accepted by the backend (e.g. `[1, 0, 1]` to include only lags 1 and 3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LagSpec {
    Order(i64),
    Lags(Vec<i64>),
}

impl LagSpec {
    pub fn as_order(&self) -> Option<i64> {
        match self {
            LagSpec::Order(v) => Some(*v),
            LagSpec::Lags(_) => None,
        }
    }

    pub fn is_lag_list(&self) -> bool {
        matches!(self, LagSpec::Lags(_))
    }

    /// Number of estimated parameters this term contributes.
    pub fn param_count(&self) -> usize {
        match self {
            LagSpec::Order(v) => (*v).max(0) as usize,
            LagSpec::Lags(lags) => lags.iter().filter(|&&l| l != 0).count(),
        }
    }
}

impl From<i64> for LagSpec {
    fn from(value: i64) -> Self {
        LagSpec::Order(value)
    }
}

impl fmt::Display for LagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LagSpec::Order(v) => write!(f, "{v}"),
            LagSpec::Lags(lags) => {
                let parts: Vec<String> = lags.iter().map(|l| l.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

/// Seasonal order `(P, D, Q, m)`.
///
/// `D` and `m` are signed so that out-of-range values survive until validation
/// instead of being rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalOrder {
    pub ar: LagSpec,
    pub diff: i64,
    pub ma: LagSpec,
    pub period: i64,
}

impl SeasonalOrder {
    pub fn new(p: i64, d: i64, q: i64, m: i64) -> Self {
        Self {
            ar: LagSpec::Order(p),
            diff: d,
            ma: LagSpec::Order(q),
            period: m,
        }
    }

    /// `(0, 0, 0, 0)`: no seasonal component.
    pub fn none() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Scalar view `(P, D, Q, m)`; `None` if either term is a lag list.
    pub fn as_tuple(&self) -> Option<(i64, i64, i64, i64)> {
        Some((self.ar.as_order()?, self.diff, self.ma.as_order()?, self.period))
    }
}

impl fmt::Display for SeasonalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.ar, self.diff, self.ma, self.period)
    }
}

/// Bundled sample datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// Australian total wine sales by wine makers, monthly, Jan 1980 – Aug 1994.
    Wineind,
}

impl Dataset {
    pub const ALL: [Dataset; 1] = [Dataset::Wineind];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Wineind => "wineind",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dataset::Wineind => {
                "Australian total wine sales by wine makers in bottles <= 1 litre, monthly, Jan 1980 - Aug 1994"
            }
        }
    }

    /// Seasonal period of the series (12 for monthly data).
    pub fn frequency(self) -> usize {
        match self {
            Dataset::Wineind => 12,
        }
    }
}

/// Output format for printed datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Fixed-width table, one row per seasonal cycle.
    Table,
    /// `index,value` CSV.
    Csv,
    /// JSON array.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn df_model_sums_all_six_counts() {
        let counts = ParamCounts {
            k_exog: 1,
            k_trend: 1,
            k_ar: 2,
            k_ma: 1,
            k_seasonal_ar: 1,
            k_seasonal_ma: 3,
        };
        assert_eq!(counts.df_model(), Some(9));
        assert_eq!(ParamCounts::default().df_model(), Some(0));
    }

    #[test]
    fn df_model_overflow_is_none() {
        let counts = ParamCounts {
            k_exog: usize::MAX,
            k_trend: 1,
            ..Default::default()
        };
        assert_eq!(counts.df_model(), None);
    }

    #[test]
    fn lag_spec_deserializes_scalar_or_list() {
        let scalar: LagSpec = serde_json::from_str("2").unwrap();
        assert_eq!(scalar, LagSpec::Order(2));
        let lags: LagSpec = serde_json::from_str("[1, 0, 1]").unwrap();
        assert_eq!(lags, LagSpec::Lags(vec![1, 0, 1]));
        assert_eq!(lags.param_count(), 2);
    }

    #[test]
    fn seasonal_order_display() {
        assert_eq!(SeasonalOrder::new(1, 0, 1, 12).to_string(), "(1, 0, 1, 12)");
        let order = SeasonalOrder {
            ar: LagSpec::Lags(vec![1, 1]),
            diff: 1,
            ma: LagSpec::Order(0),
            period: 4,
        };
        assert_eq!(order.to_string(), "([1, 1], 1, 0, 4)");
        assert_eq!(order.as_tuple(), None);
    }

    #[test]
    fn fit_summary_tolerates_missing_df_model() {
        let json = r#"{
            "model": {"k_exog": 0, "k_trend": 1, "k_ar": 1, "k_ma": 1, "k_seasonal_ar": 0, "k_seasonal_ma": 0},
            "results": {"llf": -100.5, "nobs": 120}
        }"#;
        let summary: FitSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.results.df_model, None);
        assert_eq!(summary.model.k_trend, Some(1));
    }
}
