//! # Aggregate Visa Statistics
//!
//! Per-origin tallies over the four status categories. Derived data:
//! recomputed on any change to the origin or the asserted documents,
//! never cached.

use serde::{Deserialize, Serialize};

use crate::status::VisaStatus;

/// Counts of destinations per visa status category for one origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaStatistics {
    /// Destinations reachable without a visa.
    pub visa_free: usize,
    /// Destinations issuing a visa on arrival.
    pub visa_on_arrival: usize,
    /// Destinations offering an e-visa.
    pub evisa: usize,
    /// Destinations requiring an advance visa (including routes with no
    /// data, counted conservatively).
    pub visa_required: usize,
}

impl VisaStatistics {
    /// Increment the counter for the given status.
    pub fn record(&mut self, status: VisaStatus) {
        match status {
            VisaStatus::VisaFree => self.visa_free += 1,
            VisaStatus::VisaOnArrival => self.visa_on_arrival += 1,
            VisaStatus::Evisa => self.evisa += 1,
            VisaStatus::VisaRequired => self.visa_required += 1,
        }
    }

    /// Sum of all four counters.
    pub fn total(&self) -> usize {
        self.visa_free + self.visa_on_arrival + self.evisa + self.visa_required
    }

    /// The count for a single status category.
    pub fn count(&self, status: VisaStatus) -> usize {
        match status {
            VisaStatus::VisaFree => self.visa_free,
            VisaStatus::VisaOnArrival => self.visa_on_arrival,
            VisaStatus::Evisa => self.evisa,
            VisaStatus::VisaRequired => self.visa_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let stats = VisaStatistics::default();
        assert_eq!(stats.total(), 0);
        for status in VisaStatus::all() {
            assert_eq!(stats.count(*status), 0);
        }
    }

    #[test]
    fn record_increments_matching_counter() {
        let mut stats = VisaStatistics::default();
        stats.record(VisaStatus::VisaFree);
        stats.record(VisaStatus::VisaFree);
        stats.record(VisaStatus::Evisa);
        assert_eq!(stats.visa_free, 2);
        assert_eq!(stats.evisa, 1);
        assert_eq!(stats.visa_on_arrival, 0);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn count_matches_fields() {
        let stats = VisaStatistics {
            visa_free: 1,
            visa_on_arrival: 2,
            evisa: 3,
            visa_required: 4,
        };
        assert_eq!(stats.count(VisaStatus::VisaFree), 1);
        assert_eq!(stats.count(VisaStatus::VisaOnArrival), 2);
        assert_eq!(stats.count(VisaStatus::Evisa), 3);
        assert_eq!(stats.count(VisaStatus::VisaRequired), 4);
        assert_eq!(stats.total(), 10);
    }

    #[test]
    fn serde_uses_camel_case() {
        let stats = VisaStatistics {
            visa_on_arrival: 5,
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"visaOnArrival\":5"));
        assert!(json.contains("\"visaFree\":0"));
    }
}
