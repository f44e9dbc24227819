//! CSV loader for the mutation table.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::record::MutationRecord;
use crate::table::MutationTable;

/// Load the mutation table from a CSV export.
///
/// Called once at process start; the resulting table is read-only for the
/// rest of the process lifetime. A missing file or a malformed row is a
/// startup error.
pub fn load_table(path: impl AsRef<Path>) -> Result<MutationTable> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: MutationRecord =
            result.with_context(|| format!("Malformed row in {}", path.display()))?;
        records.push(record);
    }

    info!("Loaded {} mutation records from {}", records.len(), path.display());
    Ok(MutationTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Column;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
PRIMARY_SITE,CANCER_TYPE,TUMOUR_ORIGIN,BASE_ALLELE,MUTANT_ALLELE,WT_AA_3,MT_AA_3
lung,carcinoma,primary,C,T,Gly,Asp
breast,ductal_carcinoma,metastasis,A,G,Glu,Lys
";

    #[test]
    fn test_load_table_reads_renamed_headers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.distinct(Column::PrimarySite), ["lung", "breast"]);
        assert_eq!(table.records()[1].wild_type_aa, "Glu");
    }

    #[test]
    fn test_load_table_missing_file_is_an_error() {
        let err = load_table("no/such/file.csv").unwrap_err();
        assert!(err.to_string().contains("no/such/file.csv"));
    }

    #[test]
    fn test_load_table_rejects_malformed_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"PRIMARY_SITE,CANCER_TYPE\nlung,carcinoma\n").unwrap();

        assert!(load_table(file.path()).is_err());
    }
}
