//! Payload Correlator Module
//! Filters rows into the payload-vs-outcome scatter set.

use super::SiteFilter;
use crate::data::LaunchTable;

/// One scatter point: payload mass against launch outcome, keyed by
/// booster version category for coloring.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadPoint {
    pub payload_mass_kg: f64,
    pub success: bool,
    pub booster_version: String,
}

/// Select the rows feeding the payload correlation scatter.
///
/// Keeps rows with `low <= payload_mass_kg <= high`, inclusive both ends,
/// restricted to `site` unless the filter is `All`. Original row order is
/// preserved, one point per surviving row. An inverted range (`low > high`)
/// yields an empty set.
pub fn correlate(table: &LaunchTable, site: &SiteFilter, low: f64, high: f64) -> Vec<PayloadPoint> {
    table
        .records()
        .iter()
        .filter(|r| site.matches(&r.site))
        .filter(|r| r.payload_mass_kg >= low && r.payload_mass_kg <= high)
        .map(|r| PayloadPoint {
            payload_mass_kg: r.payload_mass_kg,
            success: r.success,
            booster_version: r.booster_version.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LaunchRecord;

    fn record(site: &str, success: bool, payload: f64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_owned(),
            success,
            payload_mass_kg: payload,
            booster_version: booster.to_owned(),
        }
    }

    fn sample_table() -> LaunchTable {
        LaunchTable::new(vec![
            record("A", true, 500.0, "FT"),
            record("A", false, 1500.0, "v1.0"),
            record("B", true, 3000.0, "FT"),
        ])
    }

    #[test]
    fn inverted_range_is_empty() {
        let table = sample_table();
        assert!(correlate(&table, &SiteFilter::All, 2000.0, 1000.0).is_empty());
        assert!(correlate(&table, &SiteFilter::Site("A".to_owned()), 2000.0, 1000.0).is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let table = sample_table();

        let points = correlate(&table, &SiteFilter::All, 500.0, 3000.0);
        assert_eq!(points.len(), 3);

        let exact = correlate(&table, &SiteFilter::All, 500.0, 500.0);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].payload_mass_kg, 500.0);
        assert!(exact[0].success);
    }

    #[test]
    fn every_point_satisfies_the_range() {
        let table = sample_table();
        let (low, high) = (0.0, 1000.0);
        let points = correlate(&table, &SiteFilter::All, low, high);

        assert!(points
            .iter()
            .all(|p| p.payload_mass_kg >= low && p.payload_mass_kg <= high));

        let qualifying = table
            .records()
            .iter()
            .filter(|r| r.payload_mass_kg >= low && r.payload_mass_kg <= high)
            .count();
        assert_eq!(points.len(), qualifying);
    }

    #[test]
    fn site_and_range_combine() {
        let table = sample_table();
        let points = correlate(&table, &SiteFilter::Site("A".to_owned()), 0.0, 10000.0);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].payload_mass_kg, 500.0);
        assert_eq!(points[1].payload_mass_kg, 1500.0);
        assert_eq!(points[1].booster_version, "v1.0");
    }

    #[test]
    fn unknown_site_is_empty() {
        let table = sample_table();
        assert!(correlate(&table, &SiteFilter::Site("Z".to_owned()), 0.0, 10000.0).is_empty());
    }

    #[test]
    fn row_order_is_preserved() {
        let table = sample_table();
        let points = correlate(&table, &SiteFilter::All, 0.0, 10000.0);
        let payloads: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(payloads, [500.0, 1500.0, 3000.0]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let table = sample_table();
        let first = correlate(&table, &SiteFilter::All, 0.0, 2000.0);
        let second = correlate(&table, &SiteFilter::All, 0.0, 2000.0);
        assert_eq!(first, second);
    }
}
