//! Tumour-origin histograms: one bar chart per origin group.

use axum::{extract::State, response::Html};

use oncoscope_dataset::Column;

use crate::charts::bar_chart;
use crate::handlers::home::NAV_HTML;
use crate::state::SharedState;

pub async fn histogram_page(State(state): State<SharedState>) -> Html<String> {
    let table = &state.table;

    let charts: String = table
        .distinct(Column::TumourOrigin)
        .iter()
        .map(|origin| {
            let rows = table.filter(&[(Column::TumourOrigin, origin.as_str())]);
            let counts = table.value_counts(Column::CancerType, &rows);
            format!(
                r#"<div class="card mt-4">{}</div>"#,
                bar_chart(&format!("Cancer Types for {}", origin), "Cancer Type", &counts)
            )
        })
        .collect();

    Html(render_histogram_page(&charts))
}

fn render_histogram_page(charts: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Histograms — Oncoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">Tumour-Origin Histograms</h1>
            <p class="text-muted">Cancer-type counts charted separately for each tumour-origin group</p>
        </div>
    </div>
    {}
</main>
</body>
</html>"#,
        NAV_HTML, charts
    )
}
