//! # Job Data Structures
//!
//! The `Job` struct is the root container for one estimate's inputs.
//! Jobs serialize to `.dwj` (drywall job) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Job
//! ├── meta: JobMetadata (version, estimator, job info, timestamps)
//! ├── settings: EstimateSettings (waste, factors, costs, rates, tax)
//! ├── rooms: Vec<RoomSpec> (per-room geometry, in display order)
//! └── high_parts: Vec<HighPartEntry> (charge-only high zones)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::job::Job;
//! use estimate_core::calculations::RoomSpec;
//!
//! let mut job = Job::new("Pat Estimator", "26-104", "Northview Homes");
//! job.add_room(RoomSpec::new("Kitchen").with_dimensions(14.0, 12.0, 9.0));
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&job).unwrap();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::channel::ChannelOptions;
use crate::calculations::high_parts::HighPartEntry;
use crate::calculations::pricing::{LabourRates, UnitCosts};
use crate::calculations::room::RoomSpec;
use crate::calculations::takeoff::CoverageFactors;
use crate::catalog::SheetSize;
use crate::errors::{EstimateError, EstimateResult};

/// Current schema version for .dwj files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root job container.
///
/// This is the top-level struct that gets serialized to `.dwj` files.
/// Rooms stay in a Vec so the per-room export table keeps its entry
/// order; each room carries its own UUID for stable references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Job metadata (version, estimator, client info)
    pub meta: JobMetadata,

    /// Estimating settings (waste, factors, costs, rates, tax)
    pub settings: EstimateSettings,

    /// Per-room geometry inputs, in display order
    pub rooms: Vec<RoomSpec>,

    /// Supplemental high-area charge entries
    pub high_parts: Vec<HighPartEntry>,
}

impl Job {
    /// Create a new empty job.
    ///
    /// # Arguments
    ///
    /// * `estimator` - Name of the person preparing the estimate
    /// * `job_id` - Job/quote number (e.g., "26-104")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use estimate_core::job::Job;
    ///
    /// let job = Job::new("Pat Estimator", "26-104", "Northview Homes");
    /// assert_eq!(job.meta.estimator, "Pat Estimator");
    /// ```
    pub fn new(
        estimator: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Job {
            meta: JobMetadata {
                version: SCHEMA_VERSION.to_string(),
                estimator: estimator.into(),
                job_id: job_id.into(),
                client: client.into(),
                site: String::new(),
                created: now,
                modified: now,
            },
            settings: EstimateSettings::default(),
            rooms: Vec::new(),
            high_parts: Vec::new(),
        }
    }

    /// Add a room to the job.
    ///
    /// Returns the UUID of the added room.
    pub fn add_room(&mut self, room: RoomSpec) -> Uuid {
        let id = room.id;
        self.rooms.push(room);
        self.touch();
        id
    }

    /// Remove a room by UUID.
    ///
    /// Returns the removed room if it existed.
    pub fn remove_room(&mut self, id: &Uuid) -> Option<RoomSpec> {
        let index = self.rooms.iter().position(|r| &r.id == id)?;
        let room = self.rooms.remove(index);
        self.touch();
        Some(room)
    }

    /// Get a room by UUID.
    pub fn room(&self, id: &Uuid) -> Option<&RoomSpec> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    /// Get a mutable reference to a room by UUID.
    ///
    /// Note: getting a mutable reference marks the job as modified.
    pub fn room_mut(&mut self, id: &Uuid) -> Option<&mut RoomSpec> {
        if self.rooms.iter().any(|r| &r.id == id) {
            self.meta.modified = Utc::now();
            self.rooms.iter_mut().find(|r| &r.id == id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Validate the job's inputs at the boundary.
    ///
    /// The calculation pipeline assumes pre-sanitized non-negative
    /// numbers; this is where that sanitizing happens for jobs arriving
    /// from files or front ends.
    pub fn validate(&self) -> EstimateResult<()> {
        if !(0.0..=50.0).contains(&self.settings.waste_pct) {
            return Err(EstimateError::invalid_input(
                "settings.waste_pct",
                self.settings.waste_pct.to_string(),
                "Waste percentage must be between 0 and 50",
            ));
        }
        if self.settings.tax_pct < 0.0 {
            return Err(EstimateError::invalid_input(
                "settings.tax_pct",
                self.settings.tax_pct.to_string(),
                "Tax percentage must be non-negative",
            ));
        }

        let factor_fields = [
            ("settings.factors.mud_gal_per_1000_ft2", self.settings.factors.mud_gal_per_1000_ft2),
            ("settings.factors.mud_pail_gal", self.settings.factors.mud_pail_gal),
            ("settings.factors.tape_ft2_per_roll", self.settings.factors.tape_ft2_per_roll),
            ("settings.factors.screws_per_ft2", self.settings.factors.screws_per_ft2),
            (
                "settings.factors.corner_bead_lf_per_1000_ft2",
                self.settings.factors.corner_bead_lf_per_1000_ft2,
            ),
            ("settings.factors.corner_bead_piece_ft", self.settings.factors.corner_bead_piece_ft),
            ("settings.channel.piece_ft", self.settings.channel.piece_ft),
        ];
        for (field, value) in factor_fields {
            if value < 0.0 {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "Coverage factors must be non-negative",
                ));
            }
        }

        let money_fields = [
            ("settings.costs.sheet", self.settings.costs.sheet),
            ("settings.costs.mud_pail", self.settings.costs.mud_pail),
            ("settings.costs.tape_roll", self.settings.costs.tape_roll),
            ("settings.costs.screw_box", self.settings.costs.screw_box),
            ("settings.costs.corner_bead_piece", self.settings.costs.corner_bead_piece),
            ("settings.costs.channel_piece", self.settings.costs.channel_piece),
            ("settings.costs.pot_light", self.settings.costs.pot_light),
            ("settings.labour.per_ft2", self.settings.labour.per_ft2),
            ("settings.labour.per_m2", self.settings.labour.per_m2),
            ("settings.labour.high_part_flat", self.settings.labour.high_part_flat),
            ("settings.labour.high_part_per_ft2", self.settings.labour.high_part_per_ft2),
        ];
        for (field, value) in money_fields {
            if value < 0.0 {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "Costs and rates must be non-negative",
                ));
            }
        }

        for (i, room) in self.rooms.iter().enumerate() {
            let dims = [
                ("length_ft", room.length_ft),
                ("width_ft", room.width_ft),
                ("height_ft", room.height_ft),
            ];
            for (name, value) in dims {
                if value < 0.0 {
                    return Err(EstimateError::invalid_input(
                        format!("rooms[{i}].{name}"),
                        value.to_string(),
                        "Room dimensions must be non-negative",
                    ));
                }
            }
            for (j, opening) in room.windows.iter().chain(room.doors.iter()).enumerate() {
                if opening.width_ft < 0.0 || opening.height_ft < 0.0 {
                    return Err(EstimateError::invalid_input(
                        format!("rooms[{i}].openings[{j}]"),
                        format!("{} x {}", opening.width_ft, opening.height_ft),
                        "Opening dimensions must be non-negative",
                    ));
                }
            }
        }

        for (i, part) in self.high_parts.iter().enumerate() {
            if part.height_ft < 0.0 || part.area_ft2 < 0.0 {
                return Err(EstimateError::invalid_input(
                    format!("high_parts[{i}]"),
                    format!("{} ft / {} ft^2", part.height_ft, part.area_ft2),
                    "High part height and area must be non-negative",
                ));
            }
        }

        Ok(())
    }

    /// Non-fatal input findings worth surfacing.
    ///
    /// Currently: rooms whose openings exceed their gross wall area. The
    /// pipeline clamps these to zero net wall silently; a front end
    /// should show them, since an opening larger than the wall usually
    /// means a typo.
    pub fn warnings(&self) -> Vec<String> {
        self.rooms
            .iter()
            .filter(|room| room.openings_area_ft2() > room.wall_area_gross_ft2())
            .map(|room| {
                format!(
                    "Room '{}': openings ({:.2} ft^2) exceed gross wall area ({:.2} ft^2); net wall area clamped to 0",
                    room.name,
                    room.openings_area_ft2(),
                    room.wall_area_gross_ft2(),
                )
            })
            .collect()
    }
}

impl Default for Job {
    fn default() -> Self {
        Job::new("", "", "")
    }
}

/// Job metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the person preparing the estimate
    pub estimator: String,

    /// Job/quote number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// Site address
    #[serde(default)]
    pub site: String,

    /// When the job was created
    pub created: DateTime<Utc>,

    /// When the job was last modified
    pub modified: DateTime<Utc>,
}

/// All knobs for one estimating run.
///
/// Immutable for the duration of a computation; front ends rebuild the
/// job snapshot on every input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSettings {
    /// Waste buffer percentage (0 to 50)
    pub waste_pct: f64,

    /// Selected sheet size
    pub sheet: SheetSize,

    /// Material coverage factors
    pub factors: CoverageFactors,

    /// Resilient channel options
    pub channel: ChannelOptions,

    /// Unit costs per takeoff line
    pub costs: UnitCosts,

    /// Labour rates
    pub labour: LabourRates,

    /// Number of pot lights to charge
    pub pot_light_qty: u32,

    /// Tax percentage (e.g., 13.0 for Ontario HST)
    pub tax_pct: f64,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        EstimateSettings {
            waste_pct: 10.0,
            sheet: SheetSize::FourByEight,
            factors: CoverageFactors::default(),
            channel: ChannelOptions::default(),
            costs: UnitCosts::default(),
            labour: LabourRates::default(),
            pot_light_qty: 0,
            tax_pct: 13.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::RoomSpec;

    #[test]
    fn test_job_creation() {
        let job = Job::new("Pat Estimator", "26-104", "Northview Homes");
        assert_eq!(job.meta.estimator, "Pat Estimator");
        assert_eq!(job.meta.job_id, "26-104");
        assert_eq!(job.meta.client, "Northview Homes");
        assert_eq!(job.meta.version, SCHEMA_VERSION);
        assert_eq!(job.room_count(), 0);
    }

    #[test]
    fn test_default_settings() {
        let settings = EstimateSettings::default();
        assert_eq!(settings.waste_pct, 10.0);
        assert_eq!(settings.sheet, SheetSize::FourByEight);
        assert_eq!(settings.tax_pct, 13.0);
        assert_eq!(settings.factors.mud_gal_per_1000_ft2, 9.5);
        assert!(!settings.channel.include);
    }

    #[test]
    fn test_add_remove_room() {
        let mut job = Job::new("Estimator", "26-001", "Client");
        let id = job.add_room(RoomSpec::new("Kitchen").with_dimensions(14.0, 12.0, 9.0));

        assert_eq!(job.room_count(), 1);
        assert!(job.room(&id).is_some());
        assert_eq!(job.room(&id).unwrap().name, "Kitchen");

        let removed = job.remove_room(&id);
        assert!(removed.is_some());
        assert_eq!(job.room_count(), 0);
    }

    #[test]
    fn test_room_order_preserved() {
        let mut job = Job::new("Estimator", "26-001", "Client");
        for name in ["First", "Second", "Third"] {
            job.add_room(RoomSpec::new(name));
        }
        let names: Vec<&str> = job.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let mut job = Job::new("Estimator", "26-001", "Client");
        job.add_room(RoomSpec::new("Room").with_dimensions(10.0, 10.0, 8.0));
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_dimension() {
        let mut job = Job::new("Estimator", "26-001", "Client");
        let mut room = RoomSpec::new("Bad Room");
        room.length_ft = -5.0;
        job.add_room(room);

        let err = job.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("length_ft"));
    }

    #[test]
    fn test_validate_rejects_waste_out_of_range() {
        let mut job = Job::new("Estimator", "26-001", "Client");
        job.settings.waste_pct = 60.0;
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut job = Job::new("Estimator", "26-001", "Client");
        job.settings.labour.per_ft2 = -1.0;
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_warnings_for_oversized_openings() {
        let mut job = Job::new("Estimator", "26-001", "Client");
        job.add_room(
            RoomSpec::new("Glass Box")
                .with_dimensions(4.0, 4.0, 8.0)
                .with_window(20.0, 10.0),
        );
        job.add_room(RoomSpec::new("Normal").with_dimensions(10.0, 10.0, 8.0));

        let warnings = job.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Glass Box"));
    }

    #[test]
    fn test_job_serialization() {
        let mut job = Job::new("Jane Estimator", "26-042", "Test Client");
        job.add_room(RoomSpec::new("Den").with_dimensions(11.0, 10.0, 8.0));
        let json = serde_json::to_string_pretty(&job).unwrap();

        assert!(json.contains("Jane Estimator"));
        assert!(json.contains("26-042"));
        assert!(json.contains("Den"));

        let roundtrip: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.estimator, "Jane Estimator");
        assert_eq!(roundtrip.room_count(), 1);
        assert_eq!(roundtrip.settings, job.settings);
    }
}
