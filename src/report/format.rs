//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the library code stays free of presentation concerns
//! - output changes are localized

use crate::domain::{Dataset, FitSummary, SeasonalOrder, TagResolution};

/// One line describing what the tag resolver did.
pub fn format_tag_resolution(resolution: &TagResolution) -> String {
    match resolution {
        TagResolution::Tagged {
            platform,
            tag,
            version,
        } => format!(
            "Tagged commit on {} (tag {tag}). VERSION = {version}",
            platform.display_name()
        ),
        TagResolution::Untagged => {
            "Not a tagged commit, or not on a CI/CD platform. Not writing VERSION file".to_string()
        }
    }
}

/// Input order, normalized order and (optionally) the validation verdict.
pub fn format_seasonal_order(
    input: &SeasonalOrder,
    normalized: &SeasonalOrder,
    validation: Option<&Result<(), String>>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Input:      {input}\n"));
    if input == normalized {
        out.push_str(&format!("Normalized: {normalized} (unchanged)\n"));
    } else {
        out.push_str(&format!("Normalized: {normalized}\n"));
    }
    match validation {
        Some(Ok(())) => out.push_str("Validation: ok\n"),
        Some(Err(msg)) => out.push_str(&format!("Validation: {msg}\n")),
        None => {}
    }
    out
}

/// `df_model` and the information criteria derived from it.
pub fn format_fit_summary(summary: &FitSummary) -> String {
    let r = &summary.results;
    let fmt_opt = |v: Option<f64>| v.map(|x| format!("{x:.4}")).unwrap_or_else(|| "n/a".to_string());

    let mut out = String::new();
    out.push_str(&format!(
        "df_model: {}\n",
        r.df_model.map(|d| d.to_string()).unwrap_or_else(|| "n/a".to_string())
    ));
    out.push_str(&format!("llf:      {:.4}\n", r.llf));
    out.push_str(&format!("nobs:     {}\n", r.nobs));
    out.push_str(&format!("AIC:      {}\n", fmt_opt(r.aic())));
    out.push_str(&format!("AICc:     {}\n", fmt_opt(r.aicc())));
    out.push_str(&format!("BIC:      {}\n", fmt_opt(r.bic())));
    out
}

/// Fixed-width table with one row per seasonal cycle.
pub fn format_dataset_table(dataset: Dataset, values: &[i64]) -> String {
    let width = values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let per_row = dataset.frequency().max(1);

    let mut out = String::new();
    out.push_str(&format!("=== {} (n={}) ===\n", dataset.name(), values.len()));
    out.push_str(dataset.description());
    out.push('\n');
    for row in values.chunks(per_row) {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// One line per bundled dataset.
pub fn format_dataset_list() -> String {
    let mut out = String::new();
    for ds in Dataset::ALL {
        out.push_str(&format!("{:<10} {}\n", ds.name(), ds.description()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArimaResults, CiPlatform};

    #[test]
    fn tag_resolution_lines() {
        let tagged = TagResolution::Tagged {
            platform: CiPlatform::AzurePipelines,
            tag: "v0.9.0".to_string(),
            version: "0.9.0".to_string(),
        };
        let line = format_tag_resolution(&tagged);
        assert!(line.contains("Azure Pipelines"));
        assert!(line.ends_with("VERSION = 0.9.0"));
        assert!(format_tag_resolution(&TagResolution::Untagged).starts_with("Not a tagged commit"));
    }

    #[test]
    fn seasonal_order_report_marks_unchanged() {
        let o = SeasonalOrder::new(1, 0, 0, 12);
        let text = format_seasonal_order(&o, &o, None);
        assert!(text.contains("(unchanged)"));
        assert!(!text.contains("Validation"));

        let text = format_seasonal_order(
            &SeasonalOrder::new(0, 0, 0, 1),
            &SeasonalOrder::none(),
            Some(&Ok(())),
        );
        assert!(text.contains("Normalized: (0, 0, 0, 0)\n"));
        assert!(text.contains("Validation: ok"));
    }

    #[test]
    fn fit_summary_shows_na_without_df_model() {
        let summary = FitSummary {
            results: ArimaResults {
                df_model: None,
                llf: -10.0,
                nobs: 50,
            },
            ..Default::default()
        };
        let text = format_fit_summary(&summary);
        assert!(text.contains("df_model: n/a"));
        assert!(text.contains("AIC:      n/a"));
    }

    #[test]
    fn dataset_table_rows_follow_frequency() {
        let values = Dataset::Wineind.load();
        let text = format_dataset_table(Dataset::Wineind, &values);
        // header + description + ceil(176 / 12) rows
        assert_eq!(text.lines().count(), 2 + 15);
        assert!(text.lines().nth(2).unwrap().starts_with("15136"));
    }
}
