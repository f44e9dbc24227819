//! Row and column types for the mutation table.

use serde::{Deserialize, Serialize};

/// A single mutation observation from the source export.
///
/// CSV header names follow the upstream (COSMIC-filtered) export so the
/// original dataset file loads unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationRecord {
    #[serde(rename = "PRIMARY_SITE")]
    pub primary_site: String,
    #[serde(rename = "CANCER_TYPE")]
    pub cancer_type: String,
    #[serde(rename = "TUMOUR_ORIGIN")]
    pub tumour_origin: String,
    #[serde(rename = "BASE_ALLELE")]
    pub base_allele: String,
    #[serde(rename = "MUTANT_ALLELE")]
    pub mutant_allele: String,
    #[serde(rename = "WT_AA_3")]
    pub wild_type_aa: String,
    #[serde(rename = "MT_AA_3")]
    pub mutant_aa: String,
}

/// The seven categorical columns of the table.
///
/// Query operations take a `Column` instead of a stringly-typed column
/// name, so an unknown column is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    PrimarySite,
    CancerType,
    TumourOrigin,
    BaseAllele,
    MutantAllele,
    WildTypeAa,
    MutantAa,
}

impl Column {
    /// All columns, in table order.
    pub const ALL: [Column; 7] = [
        Column::PrimarySite,
        Column::CancerType,
        Column::TumourOrigin,
        Column::BaseAllele,
        Column::MutantAllele,
        Column::WildTypeAa,
        Column::MutantAa,
    ];

    /// CSV header name of this column.
    pub fn header(&self) -> &'static str {
        match self {
            Column::PrimarySite => "PRIMARY_SITE",
            Column::CancerType => "CANCER_TYPE",
            Column::TumourOrigin => "TUMOUR_ORIGIN",
            Column::BaseAllele => "BASE_ALLELE",
            Column::MutantAllele => "MUTANT_ALLELE",
            Column::WildTypeAa => "WT_AA_3",
            Column::MutantAa => "MT_AA_3",
        }
    }

    /// Value of this column in a record.
    pub fn value<'a>(&self, record: &'a MutationRecord) -> &'a str {
        match self {
            Column::PrimarySite => &record.primary_site,
            Column::CancerType => &record.cancer_type,
            Column::TumourOrigin => &record.tumour_origin,
            Column::BaseAllele => &record.base_allele,
            Column::MutantAllele => &record.mutant_allele,
            Column::WildTypeAa => &record.wild_type_aa,
            Column::MutantAa => &record.mutant_aa,
        }
    }
}
