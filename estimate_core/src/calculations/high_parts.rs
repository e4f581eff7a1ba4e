//! # High-Part Qualification
//!
//! High parts are supplemental charge-only zones: extra-tall stairwells,
//! vaulted gable walls, scaffold work. They are billed for labour but
//! never added to the material takeoff.
//!
//! A part qualifies for the surcharge only above BOTH thresholds, and
//! both comparisons are strict. A wall at exactly 10 ft is ordinary work.

use serde::{Deserialize, Serialize};

/// Minimum height a part must exceed to qualify (feet)
pub const QUALIFYING_HEIGHT_FT: f64 = 10.0;

/// Minimum area a part must exceed to qualify (ft^2)
pub const QUALIFYING_AREA_FT2: f64 = 64.0;

/// A supplemental high-area charge entry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HighPartEntry {
    /// Height of the zone (feet)
    pub height_ft: f64,

    /// Area of the zone (ft^2)
    pub area_ft2: f64,
}

impl HighPartEntry {
    pub fn new(height_ft: f64, area_ft2: f64) -> Self {
        HighPartEntry { height_ft, area_ft2 }
    }

    /// Whether this part earns the high-work surcharge.
    ///
    /// Strict inequalities on both thresholds.
    pub fn qualifies(&self) -> bool {
        self.height_ft > QUALIFYING_HEIGHT_FT && self.area_ft2 > QUALIFYING_AREA_FT2
    }
}

/// The qualifying subset of a job's high-part entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HighPartSummary {
    /// Entries that passed qualification
    pub qualifying: Vec<HighPartEntry>,

    /// Number of qualifying entries
    pub qualifying_count: u32,

    /// Combined area of qualifying entries (ft^2)
    pub qualifying_area_ft2: f64,
}

/// Filter the entries down to the qualifying subset.
pub fn qualify(parts: &[HighPartEntry]) -> HighPartSummary {
    let qualifying: Vec<HighPartEntry> = parts
        .iter()
        .copied()
        .filter(HighPartEntry::qualifies)
        .collect();
    let qualifying_area_ft2 = qualifying.iter().map(|p| p.area_ft2).sum();

    HighPartSummary {
        qualifying_count: qualifying.len() as u32,
        qualifying_area_ft2,
        qualifying,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifies_above_both_thresholds() {
        assert!(HighPartEntry::new(12.0, 100.0).qualifies());
        assert!(HighPartEntry::new(10.01, 64.01).qualifies());
    }

    #[test]
    fn test_boundary_values_do_not_qualify() {
        // Strict comparisons: exactly at a threshold is ordinary work
        assert!(!HighPartEntry::new(10.0, 100.0).qualifies());
        assert!(!HighPartEntry::new(12.0, 64.0).qualifies());
        assert!(!HighPartEntry::new(10.0, 64.0).qualifies());
    }

    #[test]
    fn test_either_threshold_alone_is_not_enough() {
        assert!(!HighPartEntry::new(12.0, 50.0).qualifies());
        assert!(!HighPartEntry::new(9.0, 200.0).qualifies());
    }

    #[test]
    fn test_qualify_filters_and_sums() {
        let parts = vec![
            HighPartEntry::new(12.0, 100.0),
            HighPartEntry::new(9.0, 200.0),
            HighPartEntry::new(11.0, 80.0),
        ];
        let summary = qualify(&parts);
        assert_eq!(summary.qualifying_count, 2);
        assert!((summary.qualifying_area_ft2 - 180.0).abs() < 1e-9);
        assert_eq!(summary.qualifying.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let summary = qualify(&[]);
        assert_eq!(summary.qualifying_count, 0);
        assert_eq!(summary.qualifying_area_ft2, 0.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let summary = qualify(&[HighPartEntry::new(12.0, 100.0)]);
        let json = serde_json::to_string(&summary).unwrap();
        let roundtrip: HighPartSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
