//! Server-rendered chart fragments: heat-map matrices and bar charts.
//!
//! All chart markup is assembled here and styled by the stylesheet under
//! `/static`; no client-side chart library is involved.

use oncoscope_dataset::CrossTab;

/// YlGnBu ramp stops for heat-map cell backgrounds.
const HEAT_STOPS: [(u8, u8, u8); 7] = [
    (255, 255, 217),
    (199, 233, 180),
    (127, 205, 187),
    (65, 182, 196),
    (29, 145, 192),
    (34, 94, 168),
    (12, 44, 132),
];

/// Qualitative color cycle for bar charts, one color per category.
const BAR_COLORS: [&str; 8] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa",
    "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
];

/// Interpolated ramp color for `value` on a 0..=max scale.
fn heat_color(value: u64, max: u64) -> String {
    let t = if max == 0 { 0.0 } else { value as f64 / max as f64 };
    let scaled = t.clamp(0.0, 1.0) * (HEAT_STOPS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(HEAT_STOPS.len() - 2);
    let frac = scaled - idx as f64;
    let (r1, g1, b1) = HEAT_STOPS[idx];
    let (r2, g2, b2) = HEAT_STOPS[idx + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    format!("rgb({},{},{})", lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
}

fn heat_cell(value: u64, max: u64) -> String {
    let t = if max == 0 { 0.0 } else { value as f64 / max as f64 };
    // Light text once the background gets dark
    let text = if t > 0.55 { "#f4f7fb" } else { "#1c2430" };
    format!(
        r#"<td class="heat-cell" style="background:{}; color:{}">{}</td>"#,
        heat_color(value, max),
        text,
        value
    )
}

/// Render a cross-tabulation as a heat-map matrix with `Total` margins.
///
/// Cell shading scales against the grand total, so the margin cells are
/// the darkest in the matrix.
pub fn heatmap_matrix(title: &str, x_label: &str, y_label: &str, tab: &CrossTab) -> String {
    let max = tab.grand_total;

    let header: String = tab
        .col_labels
        .iter()
        .map(|label| format!(r#"<th scope="col">{}</th>"#, label))
        .collect();

    let body: String = tab
        .row_labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let cells: String = tab.cells[i].iter().map(|&v| heat_cell(v, max)).collect();
            format!(
                r#"<tr><th scope="row">{}</th>{}{}</tr>"#,
                label,
                cells,
                heat_cell(tab.row_totals[i], max)
            )
        })
        .collect();

    let margin: String = tab.col_totals.iter().map(|&v| heat_cell(v, max)).collect();

    format!(
        r#"<figure class="chart-figure">
    <figcaption>{}</figcaption>
    <div class="axis-note">{} (rows) × {} (columns)</div>
    <div class="table-scroll">
        <table class="heatmap">
            <thead><tr><th></th>{}<th scope="col">Total</th></tr></thead>
            <tbody>
                {}
                <tr class="margin-row"><th scope="row">Total</th>{}{}</tr>
            </tbody>
        </table>
    </div>
</figure>"#,
        title,
        y_label,
        x_label,
        header,
        body,
        margin,
        heat_cell(tab.grand_total, max)
    )
}

/// Render a vertical bar chart with a raw-count annotation above each bar.
pub fn bar_chart(title: &str, x_label: &str, counts: &[(String, u64)]) -> String {
    let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let bars: String = counts
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let height = if max == 0 {
                0.0
            } else {
                *count as f64 / max as f64 * 100.0
            };
            format!(
                r#"
        <div class="bar-group">
            <span class="bar-count">{}</span>
            <div class="bar-track"><div class="bar" style="height:{:.1}%; background:{}"></div></div>
            <span class="bar-label">{}</span>
        </div>"#,
                count,
                height,
                BAR_COLORS[i % BAR_COLORS.len()],
                label
            )
        })
        .collect();

    format!(
        r#"<figure class="chart-figure">
    <figcaption>{}</figcaption>
    <div class="bar-chart">{}</div>
    <div class="axis-note">{}</div>
</figure>"#,
        title, bars, x_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_color_spans_the_ramp() {
        assert_eq!(heat_color(0, 10), "rgb(255,255,217)");
        assert_eq!(heat_color(10, 10), "rgb(12,44,132)");
        // Empty matrix renders at the light end rather than dividing by zero
        assert_eq!(heat_color(0, 0), "rgb(255,255,217)");
    }

    #[test]
    fn test_heatmap_carries_total_margins() {
        let tab = CrossTab {
            row_labels: vec!["A".to_string(), "C".to_string()],
            col_labels: vec!["G".to_string(), "T".to_string()],
            cells: vec![vec![1, 2], vec![3, 4]],
            row_totals: vec![3, 7],
            col_totals: vec![4, 6],
            grand_total: 10,
        };
        let html = heatmap_matrix("Substitution Matrix (Allele)", "Mutant Allele", "Wild Type Allele", &tab);
        assert_eq!(html.matches("Total").count(), 2);
        assert!(html.contains(">10<"));
        assert!(html.contains("Substitution Matrix (Allele)"));
    }

    #[test]
    fn test_bar_chart_one_group_per_category() {
        let counts = vec![
            ("carcinoma".to_string(), 12),
            ("melanoma".to_string(), 3),
        ];
        let html = bar_chart("Cancer Types for primary", "Cancer Type", &counts);
        assert_eq!(html.matches("bar-group").count(), 2);
        assert!(html.contains(">12</span>"));
        // The tallest bar fills the track
        assert!(html.contains("height:100.0%"));
    }
}
