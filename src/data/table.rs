//! Launch Table Module
//! In-memory table of launch records, immutable after load.

/// One row of the loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site label, e.g. "CCAFS LC-40".
    pub site: String,
    /// Launch outcome, true = success.
    pub success: bool,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Booster version category label, e.g. "FT".
    pub booster_version: String,
}

/// The loaded dataset plus values derived once at construction.
///
/// Read-only for the life of the process; every chart query runs against
/// this table without mutating it.
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    payload_min: f64,
    payload_max: f64,
    sites: Vec<String>,
}

impl LaunchTable {
    /// Build a table from records, computing payload bounds and the
    /// distinct site list in first-appearance order.
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;
        let mut sites: Vec<String> = Vec::new();

        for record in &records {
            payload_min = payload_min.min(record.payload_mass_kg);
            payload_max = payload_max.max(record.payload_mass_kg);
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }

        if records.is_empty() {
            payload_min = 0.0;
            payload_max = 0.0;
        }

        Self {
            records,
            payload_min,
            payload_max,
            sites,
        }
    }

    /// All records in original file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Global payload mass bounds as (min, max).
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }

    /// Distinct launch sites in first-appearance order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, success: bool, payload: f64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_owned(),
            success,
            payload_mass_kg: payload,
            booster_version: booster.to_owned(),
        }
    }

    #[test]
    fn payload_bounds_span_all_rows() {
        let table = LaunchTable::new(vec![
            record("A", true, 500.0, "FT"),
            record("A", false, 1500.0, "v1.0"),
            record("B", true, 3000.0, "FT"),
        ]);
        assert_eq!(table.payload_bounds(), (500.0, 3000.0));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn sites_keep_first_appearance_order() {
        let table = LaunchTable::new(vec![
            record("B", true, 100.0, "FT"),
            record("A", false, 200.0, "FT"),
            record("B", true, 300.0, "FT"),
            record("C", true, 400.0, "FT"),
        ]);
        assert_eq!(table.sites(), ["B", "A", "C"]);
    }

    #[test]
    fn empty_table_has_zero_bounds() {
        let table = LaunchTable::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.payload_bounds(), (0.0, 0.0));
        assert!(table.sites().is_empty());
    }
}
