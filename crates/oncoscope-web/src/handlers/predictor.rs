//! Cancer-type predictor: selection form and probability breakdown.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use oncoscope_dataset::Column;

use crate::handlers::home::{render_error_page, NAV_HTML};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PredictorForm {
    pub base_allele: Option<String>,
    pub mutant_allele: Option<String>,
    pub primary_site: Option<String>,
}

/// GET /predictor - the selection form.
///
/// Select options come from the observed value sets, so the form can only
/// submit combinations of values the table actually contains.
pub async fn predictor_page(State(state): State<SharedState>) -> Html<String> {
    let table = &state.table;
    Html(render_predictor_page(
        table.distinct(Column::BaseAllele),
        table.distinct(Column::MutantAllele),
        table.distinct(Column::PrimarySite),
    ))
}

/// POST /predictor - probability breakdown for the selected triple.
pub async fn predictor_submit(
    State(state): State<SharedState>,
    Form(form): Form<PredictorForm>,
) -> Html<String> {
    let table = &state.table;

    let selections = [
        (Column::BaseAllele, "base allele", form.base_allele.as_deref()),
        (Column::MutantAllele, "mutant allele", form.mutant_allele.as_deref()),
        (Column::PrimarySite, "primary site", form.primary_site.as_deref()),
    ];
    for (column, label, value) in selections {
        match value {
            None | Some("") => {
                return Html(render_error_page(&format!("No {} selected", label)));
            }
            Some(value) if !table.is_known(column, value) => {
                return Html(render_error_page(&format!("Unknown {}: {}", label, value)));
            }
            Some(_) => {}
        }
    }

    // Validated above
    let base_allele = form.base_allele.as_deref().unwrap_or_default();
    let mutant_allele = form.mutant_allele.as_deref().unwrap_or_default();
    let primary_site = form.primary_site.as_deref().unwrap_or_default();

    let rows = table.filter(&[
        (Column::BaseAllele, base_allele),
        (Column::MutantAllele, mutant_allele),
        (Column::PrimarySite, primary_site),
    ]);
    let probabilities = table.distribution(Column::CancerType, &rows);

    Html(render_result_page(
        base_allele,
        mutant_allele,
        primary_site,
        &probabilities,
    ))
}

fn select_options(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!(r#"<option value="{}">{}</option>"#, value, value))
        .collect()
}

fn render_predictor_page(
    base_alleles: &[String],
    mutant_alleles: &[String],
    primary_sites: &[String],
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Predictor — Oncoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">Cancer-Type Predictor</h1>
            <p class="text-muted">Cancer-type probabilities for an allele substitution at a chosen primary site</p>
        </div>
    </div>

    <div class="card">
        <form method="POST" action="/predictor">
            <div class="form-row">
                <div class="form-field">
                    <label class="form-label" for="base_allele">Base Allele</label>
                    <select class="form-select" id="base_allele" name="base_allele">{}</select>
                </div>
                <div class="form-field">
                    <label class="form-label" for="mutant_allele">Mutant Allele</label>
                    <select class="form-select" id="mutant_allele" name="mutant_allele">{}</select>
                </div>
                <div class="form-field">
                    <label class="form-label" for="primary_site">Primary Site</label>
                    <select class="form-select" id="primary_site" name="primary_site">{}</select>
                </div>
            </div>
            <button type="submit" class="btn btn-primary">Predict</button>
        </form>
    </div>
</main>
</body>
</html>"#,
        NAV_HTML,
        select_options(base_alleles),
        select_options(mutant_alleles),
        select_options(primary_sites)
    )
}

fn render_result_page(
    base_allele: &str,
    mutant_allele: &str,
    primary_site: &str,
    probabilities: &[(String, f64)],
) -> String {
    let breakdown = if probabilities.is_empty() {
        r#"<p class="text-muted">No mutations recorded for this combination.</p>"#.to_string()
    } else {
        let rows: String = probabilities
            .iter()
            .map(|(cancer_type, pct)| {
                format!(
                    r#"
            <tr>
                <td>{}</td>
                <td>
                    <div class="d-flex align-center gap-3">
                        <div class="progress-track"><div class="progress-bar" style="width:{:.2}%"></div></div>
                        <span class="score-value">{:.2}%</span>
                    </div>
                </td>
            </tr>"#,
                    cancer_type, pct, pct
                )
            })
            .collect();
        format!(
            r#"<table class="table">
            <thead><tr><th>Cancer Type</th><th>Probability</th></tr></thead>
            <tbody>{}</tbody>
        </table>"#,
            rows
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Prediction — Oncoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">Prediction Result</h1>
            <p class="text-muted">
                <span class="badge badge-outline">{} &rarr; {}</span>
                at <strong>{}</strong>
            </p>
        </div>
        <a href="/predictor" class="btn btn-outline">New Prediction</a>
    </div>

    <div class="card">
        <div class="card-header">Cancer-Type Probabilities</div>
        {}
    </div>
</main>
</body>
</html>"#,
        NAV_HTML, base_allele, mutant_allele, primary_site, breakdown
    )
}
