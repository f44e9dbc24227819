//! The in-memory mutation table and the query operations over it.

use std::collections::HashMap;

use crate::record::{Column, MutationRecord};

/// Immutable table of mutation observations.
///
/// Distinct category values are computed once at construction, in
/// first-observed order. Those sets are the only source of truth for
/// input validation: a value is valid exactly when it occurs in the
/// loaded data.
#[derive(Debug)]
pub struct MutationTable {
    records: Vec<MutationRecord>,
    /// Per column: distinct values in first-observed order.
    distinct: HashMap<Column, Vec<String>>,
    /// Per column: value -> position in the distinct list.
    observed_order: HashMap<Column, HashMap<String, usize>>,
}

/// Two-way cross-tabulation of two categorical columns, with margins.
///
/// `cells[i][j]` is the number of rows with `row_labels[i]` and
/// `col_labels[j]`. Margins are carried separately; the rendered matrix
/// labels them `Total`.
#[derive(Debug, Clone)]
pub struct CrossTab {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub cells: Vec<Vec<u64>>,
    pub row_totals: Vec<u64>,
    pub col_totals: Vec<u64>,
    pub grand_total: u64,
}

impl MutationTable {
    pub fn new(records: Vec<MutationRecord>) -> Self {
        let mut distinct: HashMap<Column, Vec<String>> = HashMap::new();
        let mut observed_order: HashMap<Column, HashMap<String, usize>> = HashMap::new();

        for column in Column::ALL {
            let values = distinct.entry(column).or_default();
            let order = observed_order.entry(column).or_default();
            for record in &records {
                let value = column.value(record);
                if !order.contains_key(value) {
                    order.insert(value.to_string(), values.len());
                    values.push(value.to_string());
                }
            }
        }

        Self { records, distinct, observed_order }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MutationRecord] {
        &self.records
    }

    /// Distinct values of a column, in first-observed order.
    pub fn distinct(&self, column: Column) -> &[String] {
        self.distinct.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `value` occurs anywhere in the given column.
    pub fn is_known(&self, column: Column, value: &str) -> bool {
        self.observed_order
            .get(&column)
            .is_some_and(|order| order.contains_key(value))
    }

    /// Rows matching every `(column, value)` predicate.
    pub fn filter(&self, predicates: &[(Column, &str)]) -> Vec<&MutationRecord> {
        self.records
            .iter()
            .filter(|record| {
                predicates
                    .iter()
                    .all(|(column, value)| column.value(record) == *value)
            })
            .collect()
    }

    /// Histogram of a column within a subset of rows.
    ///
    /// Sorted by descending count; ties break by first-observed order so
    /// repeated renders are deterministic.
    pub fn value_counts(&self, column: Column, rows: &[&MutationRecord]) -> Vec<(String, u64)> {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for record in rows {
            *counts.entry(column.value(record)).or_insert(0) += 1;
        }

        let order = self.observed_order.get(&column);
        let mut counted: Vec<(String, u64)> = counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect();
        counted.sort_by_key(|(value, count)| {
            let position = order
                .and_then(|order| order.get(value.as_str()).copied())
                .unwrap_or(usize::MAX);
            (std::cmp::Reverse(*count), position)
        });
        counted
    }

    /// Normalized percentage distribution of a column within a subset.
    ///
    /// Percentages are rounded to 2 decimal places; an empty subset yields
    /// an empty distribution.
    pub fn distribution(&self, column: Column, rows: &[&MutationRecord]) -> Vec<(String, f64)> {
        let total = rows.len();
        if total == 0 {
            return Vec::new();
        }
        self.value_counts(column, rows)
            .into_iter()
            .map(|(value, count)| {
                let pct = count as f64 / total as f64 * 100.0;
                (value, (pct * 100.0).round() / 100.0)
            })
            .collect()
    }

    /// Two-way cross-tabulation of two columns over the whole table.
    ///
    /// Axis labels are sorted lexicographically; margins cover every row
    /// of the table.
    pub fn crosstab(&self, row_column: Column, col_column: Column) -> CrossTab {
        let mut row_labels = self.distinct(row_column).to_vec();
        let mut col_labels = self.distinct(col_column).to_vec();
        row_labels.sort();
        col_labels.sort();

        let row_index: HashMap<&str, usize> = row_labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();
        let col_index: HashMap<&str, usize> = col_labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let mut cells = vec![vec![0u64; col_labels.len()]; row_labels.len()];
        for record in &self.records {
            let i = row_index[row_column.value(record)];
            let j = col_index[col_column.value(record)];
            cells[i][j] += 1;
        }

        let row_totals: Vec<u64> = cells.iter().map(|row| row.iter().sum()).collect();
        let col_totals: Vec<u64> = (0..col_labels.len())
            .map(|j| cells.iter().map(|row| row[j]).sum())
            .collect();
        let grand_total = row_totals.iter().sum();

        CrossTab {
            row_labels,
            col_labels,
            cells,
            row_totals,
            col_totals,
            grand_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        site: &str,
        cancer: &str,
        origin: &str,
        base: &str,
        mutant: &str,
        wt_aa: &str,
        mt_aa: &str,
    ) -> MutationRecord {
        MutationRecord {
            primary_site: site.to_string(),
            cancer_type: cancer.to_string(),
            tumour_origin: origin.to_string(),
            base_allele: base.to_string(),
            mutant_allele: mutant.to_string(),
            wild_type_aa: wt_aa.to_string(),
            mutant_aa: mt_aa.to_string(),
        }
    }

    fn sample_table() -> MutationTable {
        MutationTable::new(vec![
            record("lung", "carcinoma", "primary", "C", "T", "Gly", "Asp"),
            record("lung", "carcinoma", "primary", "C", "T", "Gly", "Val"),
            record("lung", "adenocarcinoma", "metastasis", "G", "A", "Ala", "Thr"),
            record("breast", "carcinoma", "primary", "C", "A", "Ser", "Arg"),
            record("breast", "ductal_carcinoma", "primary", "A", "G", "Glu", "Lys"),
            record("skin", "melanoma", "metastasis", "C", "T", "Val", "Met"),
        ])
    }

    #[test]
    fn test_distinct_preserves_first_observed_order() {
        let table = sample_table();
        assert_eq!(table.distinct(Column::PrimarySite), ["lung", "breast", "skin"]);
        assert_eq!(
            table.distinct(Column::CancerType),
            ["carcinoma", "adenocarcinoma", "ductal_carcinoma", "melanoma"]
        );
    }

    #[test]
    fn test_is_known_rejects_unobserved_values() {
        let table = sample_table();
        assert!(table.is_known(Column::PrimarySite, "lung"));
        assert!(!table.is_known(Column::PrimarySite, "liver"));
        assert!(!table.is_known(Column::BaseAllele, "lung"));
    }

    #[test]
    fn test_filter_is_a_conjunction() {
        let table = sample_table();
        let rows = table.filter(&[
            (Column::BaseAllele, "C"),
            (Column::MutantAllele, "T"),
            (Column::PrimarySite, "lung"),
        ]);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.cancer_type == "carcinoma"));
    }

    #[test]
    fn test_value_counts_sum_and_order() {
        let table = sample_table();
        let rows = table.filter(&[(Column::TumourOrigin, "primary")]);
        let counts = table.value_counts(Column::CancerType, &rows);

        let total: u64 = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total as usize, rows.len());

        // carcinoma (3) first, then the two singletons in observed order
        assert_eq!(counts[0], ("carcinoma".to_string(), 3));
        assert_eq!(counts[1].0, "ductal_carcinoma");
    }

    #[test]
    fn test_value_counts_ties_break_by_observation_order() {
        let table = MutationTable::new(vec![
            record("lung", "b_type", "primary", "C", "T", "Gly", "Asp"),
            record("lung", "a_type", "primary", "C", "T", "Gly", "Asp"),
        ]);
        let rows = table.filter(&[(Column::PrimarySite, "lung")]);
        let counts = table.value_counts(Column::CancerType, &rows);
        assert_eq!(counts[0].0, "b_type");
        assert_eq!(counts[1].0, "a_type");
    }

    #[test]
    fn test_crosstab_margins_sum_rows_and_columns() {
        let table = sample_table();
        let tab = table.crosstab(Column::BaseAllele, Column::MutantAllele);

        assert_eq!(tab.row_labels, ["A", "C", "G"]);
        assert_eq!(tab.col_labels, ["A", "G", "T"]);

        for (i, row) in tab.cells.iter().enumerate() {
            assert_eq!(row.iter().sum::<u64>(), tab.row_totals[i]);
        }
        for j in 0..tab.col_labels.len() {
            let col_sum: u64 = tab.cells.iter().map(|row| row[j]).sum();
            assert_eq!(col_sum, tab.col_totals[j]);
        }
        assert_eq!(tab.grand_total, table.len() as u64);
        assert_eq!(tab.row_totals.iter().sum::<u64>(), tab.grand_total);
        assert_eq!(tab.col_totals.iter().sum::<u64>(), tab.grand_total);
    }

    #[test]
    fn test_distribution_sums_to_100() {
        let table = sample_table();
        let rows = table.filter(&[(Column::TumourOrigin, "primary")]);
        let dist = table.distribution(Column::CancerType, &rows);

        let sum: f64 = dist.iter().map(|(_, pct)| pct).sum();
        assert!((sum - 100.0).abs() < 0.05);

        // 3 of 4 primary rows are carcinoma
        assert_eq!(dist[0], ("carcinoma".to_string(), 75.0));
    }

    #[test]
    fn test_distribution_rounds_to_two_decimals() {
        let table = MutationTable::new(vec![
            record("lung", "a", "primary", "C", "T", "Gly", "Asp"),
            record("lung", "b", "primary", "C", "T", "Gly", "Asp"),
            record("lung", "c", "primary", "C", "T", "Gly", "Asp"),
        ]);
        let rows = table.filter(&[(Column::PrimarySite, "lung")]);
        let dist = table.distribution(Column::CancerType, &rows);
        for (_, pct) in &dist {
            assert!((pct - 33.33).abs() < 1e-9);
        }
    }

    #[test]
    fn test_distribution_of_empty_subset_is_empty() {
        let table = sample_table();
        let rows = table.filter(&[
            (Column::BaseAllele, "A"),
            (Column::MutantAllele, "T"),
        ]);
        assert!(rows.is_empty());
        assert!(table.distribution(Column::CancerType, &rows).is_empty());
    }
}
