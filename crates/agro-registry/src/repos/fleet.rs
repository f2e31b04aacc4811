//! Fleet queries: pass-through lookups and the statistics report.

use agro_core::entities::Equipment;
use agro_core::responses::FleetStats;

use crate::service::FleetService;

impl FleetService {
    #[must_use]
    pub fn list_all(&self) -> Vec<&Equipment> {
        self.registry().list_all()
    }

    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Equipment> {
        let found = self.registry().find_by_code(code);
        tracing::debug!(code, found = found.is_some(), "lookup by code");
        found
    }

    #[must_use]
    pub fn find_by_name(&self, text: &str) -> Vec<&Equipment> {
        let matches = self.registry().find_by_name_contains(text);
        tracing::debug!(text, matches = matches.len(), "lookup by name");
        matches
    }

    #[must_use]
    pub fn sorted_by_power(&self) -> Vec<&Equipment> {
        self.registry().sorted_by_power()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.registry().count()
    }

    /// Capability counts and power totals across every record.
    #[must_use]
    pub fn stats(&self) -> FleetStats {
        FleetStats::from_records(self.registry().iter())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{empty_service, seeded_service};

    #[test]
    fn seeded_stats() {
        let svc = seeded_service();
        let stats = svc.stats();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.measurable, 10);
        assert_eq!(stats.actionable, 7);
        assert_eq!(stats.loggable, 12);
        assert!((stats.total_power_w - 1825.0).abs() < 1e-9);
        assert!((stats.average_power_w - 1825.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn empty_stats() {
        let stats = empty_service().stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.measurable, 0);
        assert_eq!(stats.actionable, 0);
        assert_eq!(stats.loggable, 0);
        assert!(stats.average_power_w.abs() < f64::EPSILON);
    }

    #[test]
    fn lookups_pass_through() {
        let svc = seeded_service();
        assert_eq!(svc.count(), 12);
        assert_eq!(svc.list_all().len(), 12);
        assert_eq!(svc.find_by_code("cc-001").unwrap().name(), "Estación Meteorológica Central");
        assert_eq!(svc.find_by_name("dron").len(), 2);
        assert_eq!(svc.sorted_by_power()[0].code().as_str(), "MT-001");
        assert_eq!(svc.sorted_by_power()[11].code().as_str(), "UB-001");
    }
}
