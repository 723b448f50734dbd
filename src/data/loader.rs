//! Dataset Loader Module
//! Reads the launch records CSV into a `LaunchTable` using Polars.

use polars::prelude::*;
use thiserror::Error;

use super::table::{LaunchRecord, LaunchTable};

/// Required CSV columns.
pub const COL_SITE: &str = "Launch Site";
pub const COL_OUTCOME: &str = "class";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version Category";

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("dataset contains no usable rows")]
    Empty,
}

/// One-shot CSV loader. The table it produces is never written again.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a launch records CSV from `path`.
    ///
    /// Rows with a null in any required column are skipped. Fails if the
    /// file is unreadable, a required column is absent, or no rows survive.
    pub fn load_csv(path: &str) -> Result<LaunchTable, DataLoadError> {
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        Self::table_from_frame(&df)
    }

    /// Extract the required columns and build the immutable table.
    fn table_from_frame(df: &DataFrame) -> Result<LaunchTable, DataLoadError> {
        let site_col = df
            .column(COL_SITE)
            .map_err(|_| DataLoadError::MissingColumn(COL_SITE))?
            .cast(&DataType::String)?;
        let outcome_col = df
            .column(COL_OUTCOME)
            .map_err(|_| DataLoadError::MissingColumn(COL_OUTCOME))?
            .cast(&DataType::Int64)?;
        let payload_col = df
            .column(COL_PAYLOAD)
            .map_err(|_| DataLoadError::MissingColumn(COL_PAYLOAD))?
            .cast(&DataType::Float64)?;
        let booster_col = df
            .column(COL_BOOSTER)
            .map_err(|_| DataLoadError::MissingColumn(COL_BOOSTER))?
            .cast(&DataType::String)?;

        let sites = site_col.str()?;
        let outcomes = outcome_col.i64()?;
        let payloads = payload_col.f64()?;
        let boosters = booster_col.str()?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            if let (Some(site), Some(outcome), Some(payload), Some(booster)) = (
                sites.get(i),
                outcomes.get(i),
                payloads.get(i),
                boosters.get(i),
            ) {
                if payload.is_nan() {
                    continue;
                }
                records.push(LaunchRecord {
                    site: site.to_owned(),
                    success: outcome == 1,
                    payload_mass_kg: payload,
                    booster_version: booster.to_owned(),
                });
            }
        }

        if records.is_empty() {
            return Err(DataLoadError::Empty);
        }

        Ok(LaunchTable::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const HEADER: &str = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";

    #[test]
    fn loads_rows_and_bounds() {
        let file = write_csv(&format!(
            "{HEADER}CCAFS LC-40,1,500.0,FT\nCCAFS LC-40,0,1500.0,v1.0\nKSC LC-39A,1,3000.0,FT\n"
        ));
        let table = DatasetLoader::load_csv(file.path().to_str().unwrap()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.payload_bounds(), (500.0, 3000.0));
        assert_eq!(table.sites(), ["CCAFS LC-40", "KSC LC-39A"]);
        assert!(table.records()[0].success);
        assert!(!table.records()[1].success);
        assert_eq!(table.records()[2].booster_version, "FT");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = DatasetLoader::load_csv("/nonexistent/launch_data.csv");
        assert!(matches!(result, Err(DataLoadError::Csv(_))));
    }

    #[test]
    fn missing_column_is_an_error() {
        let file = write_csv("Launch Site,Payload Mass (kg),Booster Version Category\nA,500.0,FT\n");
        let result = DatasetLoader::load_csv(file.path().to_str().unwrap());
        assert!(matches!(
            result,
            Err(DataLoadError::MissingColumn(COL_OUTCOME))
        ));
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_csv(HEADER);
        let result = DatasetLoader::load_csv(file.path().to_str().unwrap());
        assert!(matches!(result, Err(DataLoadError::Empty)));
    }

    #[test]
    fn rows_with_null_fields_are_skipped() {
        let file = write_csv(&format!(
            "{HEADER}CCAFS LC-40,1,500.0,FT\nCCAFS LC-40,0,,v1.0\nKSC LC-39A,1,3000.0,FT\n"
        ));
        let table = DatasetLoader::load_csv(file.path().to_str().unwrap()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.payload_bounds(), (500.0, 3000.0));
    }
}
