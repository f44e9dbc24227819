//! Substitution matrices: allele-level and amino-acid-level heat maps.

use axum::{extract::State, response::Html};

use oncoscope_dataset::Column;

use crate::charts::heatmap_matrix;
use crate::handlers::home::NAV_HTML;
use crate::state::SharedState;

pub async fn substitution_page(State(state): State<SharedState>) -> Html<String> {
    let table = &state.table;

    let allele = table.crosstab(Column::BaseAllele, Column::MutantAllele);
    let amino = table.crosstab(Column::WildTypeAa, Column::MutantAa);

    let plot1 = heatmap_matrix(
        "Substitution Matrix (Allele)",
        "Mutant Allele",
        "Wild Type Allele",
        &allele,
    );
    let plot2 = heatmap_matrix(
        "Substitution Matrix (Amino Acid)",
        "Mutant Amino Acid",
        "Wild Type Amino Acid",
        &amino,
    );

    Html(render_substitution_page(&plot1, &plot2))
}

fn render_substitution_page(plot1: &str, plot2: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Substitution Matrices — Oncoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">Substitution Matrices</h1>
            <p class="text-muted">Base→mutant allele and wild-type→mutant amino-acid cross-tabulations with margin totals</p>
        </div>
    </div>

    <div class="card">{}</div>
    <div class="card mt-4">{}</div>
</main>
</body>
</html>"#,
        NAV_HTML, plot1, plot2
    )
}
