//! Home page, the primary-site index, and the shared error page.

use axum::{extract::State, response::Html};
use oncoscope_dataset::Column;
use crate::state::SharedState;

/// Navigation HTML fragment shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    Html(render_home(state.table.len()))
}

fn render_home(record_count: usize) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Home — Oncoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">Oncoscope</h1>
            <p class="text-muted">Reporting views over {} curated cancer-mutation records</p>
        </div>
    </div>

    <div class="grid-2">
        <div class="card card-hover">
            <div class="card-header">Primary Sites</div>
            <p class="text-muted">Browse the anatomical sites observed in the dataset and the cancer types recorded for each.</p>
            <a href="/index" class="btn btn-primary">Browse Sites</a>
        </div>
        <div class="card card-hover">
            <div class="card-header">Substitution Matrices</div>
            <p class="text-muted">Allele-level and amino-acid-level substitution heat maps with margin totals.</p>
            <a href="/substitution" class="btn btn-primary">View Matrices</a>
        </div>
        <div class="card card-hover">
            <div class="card-header">Cancer-Type Predictor</div>
            <p class="text-muted">Probability breakdown of cancer types for an allele substitution at a chosen site.</p>
            <a href="/predictor" class="btn btn-primary">Open Predictor</a>
        </div>
        <div class="card card-hover">
            <div class="card-header">Tumour-Origin Histograms</div>
            <p class="text-muted">Cancer-type counts charted separately for each tumour-origin group.</p>
            <a href="/histo" class="btn btn-primary">View Histograms</a>
        </div>
    </div>
</main>
</body>
</html>"#,
        NAV_HTML, record_count
    )
}

/// GET /index - all primary sites observed in the table.
pub async fn site_index(State(state): State<SharedState>) -> Html<String> {
    Html(render_site_index(state.table.distinct(Column::PrimarySite)))
}

fn render_site_index(sites: &[String]) -> String {
    let items: String = sites
        .iter()
        .map(|site| {
            format!(
                r#"<li><a class="site-link" href="/info?organ={}">{}</a></li>"#,
                site, site
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Primary Sites — Oncoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">Primary Sites</h1>
            <p class="text-muted">{} sites observed in the loaded table</p>
        </div>
    </div>

    <div class="card">
        <ul class="site-list">{}</ul>
    </div>
</main>
</body>
</html>"#,
        NAV_HTML,
        sites.len(),
        items
    )
}

/// Error page with a link back to the home route.
pub fn render_error_page(error: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Error — Oncoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="card error-card">
        <h1 class="page-title">Something went wrong</h1>
        <p class="error-message">{}</p>
        <a href="/" class="btn btn-primary">Back to Home</a>
    </div>
</main>
</body>
</html>"#,
        NAV_HTML, error
    )
}
