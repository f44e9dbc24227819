//! Primary-site views: JSON counts API and the HTML info page.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use oncoscope_common::ApiError;
use oncoscope_dataset::Column;

use crate::handlers::home::{render_error_page, NAV_HTML};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub organ: Option<String>,
}

/// GET /organ/{name} - cancer-type counts for one primary site.
pub async fn api_organ_counts(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let table = &state.table;
    if !table.is_known(Column::PrimarySite, &name) {
        return Err(ApiError::NotFound("Invalid organ name".to_string()));
    }

    let rows = table.filter(&[(Column::PrimarySite, name.as_str())]);
    let mut counts = serde_json::Map::new();
    for (cancer_type, count) in table.value_counts(Column::CancerType, &rows) {
        counts.insert(cancer_type, json!(count));
    }

    Ok(Json(json!({ "organ": name, "cancer_type_counts": counts })))
}

/// GET /info?organ= - human-readable counts page for one primary site.
///
/// A missing or unknown organ renders the error page rather than a JSON
/// error; this route is the human counterpart of /organ/{name}.
pub async fn organ_info(
    State(state): State<SharedState>,
    Query(query): Query<InfoQuery>,
) -> Html<String> {
    let table = &state.table;
    let organ = match query.organ.as_deref() {
        Some(organ) if table.is_known(Column::PrimarySite, organ) => organ,
        _ => return Html(render_error_page("Invalid organ name or no organ selected")),
    };

    let rows = table.filter(&[(Column::PrimarySite, organ)]);
    let counts = table.value_counts(Column::CancerType, &rows);
    Html(render_info_page(organ, rows.len(), &counts))
}

fn render_info_page(organ: &str, sample_count: usize, counts: &[(String, u64)]) -> String {
    let rows_html: String = counts
        .iter()
        .map(|(cancer_type, count)| {
            format!(
                r#"<tr><td>{}</td><td class="text-end"><span class="badge badge-count">{}</span></td></tr>"#,
                cancer_type, count
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — Oncoscope</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">{}</h1>
            <p class="text-muted">{} mutation records at this site</p>
        </div>
        <a href="/index" class="btn btn-outline">All Sites</a>
    </div>

    <div class="card">
        <div class="card-header">Cancer Types</div>
        <table class="table">
            <thead><tr><th>Cancer Type</th><th class="text-end">Records</th></tr></thead>
            <tbody>{}</tbody>
        </table>
    </div>
</main>
</body>
</html>"#,
        organ, NAV_HTML, organ, sample_count, rows_html
    )
}
