//! # Per-Room Geometry Calculation
//!
//! Turns a room's dimensions and openings into boardable areas.
//!
//! ## Rules
//!
//! - Walls are taken around the full perimeter at the given height
//! - Window and door openings are deducted from the gross wall area
//! - Net wall area clamps at zero when openings exceed the gross area
//! - The ceiling is optional (stairwells, open-to-below rooms)
//! - The waste multiplier is applied after ceiling and walls are summed
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::room::{calculate, RoomSpec};
//! use estimate_core::catalog::DoorSize;
//!
//! let room = RoomSpec::new("Master Bedroom")
//!     .with_dimensions(14.0, 12.0, 8.0)
//!     .with_window(4.0, 3.0)
//!     .with_door(DoorSize::D30x80);
//!
//! let result = calculate(&room, 10.0);
//! assert!(result.wall_area_net_ft2 < result.perimeter_ft * 8.0);
//! assert_eq!(result.ceiling_area_ft2, 14.0 * 12.0);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{DoorSize, WallHeight};
use crate::units::{SqFt, SqM};

/// A rectangular opening (window or door) deducted from gross wall area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Opening {
    /// Opening width in feet
    pub width_ft: f64,
    /// Opening height in feet
    pub height_ft: f64,
}

impl Opening {
    pub fn new(width_ft: f64, height_ft: f64) -> Self {
        Opening { width_ft, height_ft }
    }

    /// Build an opening from a door catalog entry.
    pub fn from_door(size: DoorSize) -> Self {
        let (width_ft, height_ft) = size.dimensions_ft();
        Opening { width_ft, height_ft }
    }

    /// Opening area in square feet
    pub fn area_ft2(&self) -> f64 {
        self.width_ft * self.height_ft
    }
}

/// Input parameters for one room.
///
/// All dimensions are in feet and assumed non-negative; the input layer
/// (see `Job::validate`) is responsible for enforcing ranges.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
///   "name": "Living Room",
///   "length_ft": 16.0,
///   "width_ft": 12.0,
///   "height_ft": 9.0,
///   "include_ceiling": true,
///   "windows": [{ "width_ft": 5.0, "height_ft": 4.0 }],
///   "doors": [{ "width_ft": 2.5, "height_ft": 6.667 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Stable identity within a job
    pub id: Uuid,

    /// User label for this room (e.g., "Kitchen", "Bedroom 2")
    pub name: String,

    /// Room length in feet
    pub length_ft: f64,

    /// Room width in feet
    pub width_ft: f64,

    /// Wall height in feet
    pub height_ft: f64,

    /// Whether the ceiling gets boarded
    pub include_ceiling: bool,

    /// Window openings deducted from wall area
    pub windows: Vec<Opening>,

    /// Door openings deducted from wall area
    pub doors: Vec<Opening>,
}

impl RoomSpec {
    /// Create a new room with zero dimensions and an 8 ft wall height.
    pub fn new(name: impl Into<String>) -> Self {
        RoomSpec {
            id: Uuid::new_v4(),
            name: name.into(),
            length_ft: 0.0,
            width_ft: 0.0,
            height_ft: 8.0,
            include_ceiling: true,
            windows: Vec::new(),
            doors: Vec::new(),
        }
    }

    /// Set length, width, and wall height in feet.
    pub fn with_dimensions(mut self, length_ft: f64, width_ft: f64, height_ft: f64) -> Self {
        self.length_ft = length_ft;
        self.width_ft = width_ft;
        self.height_ft = height_ft;
        self
    }

    /// Set the wall height from a quick-pick preset.
    pub fn with_height(mut self, height: WallHeight) -> Self {
        self.height_ft = height.feet();
        self
    }

    /// Add a window opening (feet).
    pub fn with_window(mut self, width_ft: f64, height_ft: f64) -> Self {
        self.windows.push(Opening::new(width_ft, height_ft));
        self
    }

    /// Add a door opening from the preset catalog.
    pub fn with_door(mut self, size: DoorSize) -> Self {
        self.doors.push(Opening::from_door(size));
        self
    }

    /// Exclude the ceiling from boarding.
    pub fn without_ceiling(mut self) -> Self {
        self.include_ceiling = false;
        self
    }

    /// Wall perimeter: 2 x (length + width)
    pub fn perimeter_ft(&self) -> f64 {
        2.0 * (self.length_ft + self.width_ft)
    }

    /// Gross wall area before opening deductions
    pub fn wall_area_gross_ft2(&self) -> f64 {
        self.perimeter_ft() * self.height_ft
    }

    /// Combined area of all window and door openings
    pub fn openings_area_ft2(&self) -> f64 {
        self.windows.iter().map(Opening::area_ft2).sum::<f64>()
            + self.doors.iter().map(Opening::area_ft2).sum::<f64>()
    }

    /// Net wall area after deducting openings, clamped at zero.
    ///
    /// An oversized opening never produces negative area; the excess is
    /// silently absorbed. `Job::warnings` surfaces these rooms.
    pub fn wall_area_net_ft2(&self) -> f64 {
        (self.wall_area_gross_ft2() - self.openings_area_ft2()).max(0.0)
    }

    /// Ceiling area, zero when the ceiling is excluded
    pub fn ceiling_area_ft2(&self) -> f64 {
        if self.include_ceiling {
            self.length_ft * self.width_ft
        } else {
            0.0
        }
    }

    /// Net walls plus ceiling
    pub fn total_area_ft2(&self) -> f64 {
        self.wall_area_net_ft2() + self.ceiling_area_ft2()
    }
}

/// Derived areas for one room, in both square feet and square metres.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Living Room",
///   "length_ft": 10.0,
///   "width_ft": 10.0,
///   "height_ft": 8.0,
///   "perimeter_ft": 40.0,
///   "wall_area_net_ft2": 320.0,
///   "wall_area_net_m2": 29.73,
///   "ceiling_area_ft2": 100.0,
///   "ceiling_area_m2": 9.29,
///   "total_area_ft2": 420.0,
///   "total_area_m2": 39.02,
///   "total_with_waste_ft2": 462.0,
///   "total_with_waste_m2": 42.92
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResult {
    /// Room label, carried through for display and export
    pub name: String,

    /// Input dimensions, echoed for the per-room export table
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,

    /// Wall perimeter (ft)
    pub perimeter_ft: f64,

    /// Net wall area after opening deductions (ft^2)
    pub wall_area_net_ft2: f64,

    /// Metric mirror of `wall_area_net_ft2`
    pub wall_area_net_m2: f64,

    /// Ceiling area, zero when excluded (ft^2)
    pub ceiling_area_ft2: f64,

    /// Metric mirror of `ceiling_area_ft2`
    pub ceiling_area_m2: f64,

    /// Net walls plus ceiling (ft^2)
    pub total_area_ft2: f64,

    /// Metric mirror of `total_area_ft2`
    pub total_area_m2: f64,

    /// Total area with the waste multiplier applied (ft^2)
    pub total_with_waste_ft2: f64,

    /// Metric mirror of `total_with_waste_ft2`
    pub total_with_waste_m2: f64,
}

/// Calculate the boardable areas for one room.
///
/// This is a pure function: no validation, no failure. Inputs are assumed
/// pre-sanitized non-negative reals.
///
/// # Arguments
///
/// * `spec` - Room dimensions and openings
/// * `waste_pct` - Waste buffer percentage (0 disables)
pub fn calculate(spec: &RoomSpec, waste_pct: f64) -> RoomResult {
    let wall_area_net_ft2 = spec.wall_area_net_ft2();
    let ceiling_area_ft2 = spec.ceiling_area_ft2();
    let total_area_ft2 = wall_area_net_ft2 + ceiling_area_ft2;

    let waste_multiplier = 1.0 + waste_pct / 100.0;
    let total_with_waste_ft2 = total_area_ft2 * waste_multiplier;

    RoomResult {
        name: spec.name.clone(),
        length_ft: spec.length_ft,
        width_ft: spec.width_ft,
        height_ft: spec.height_ft,
        perimeter_ft: spec.perimeter_ft(),
        wall_area_net_ft2,
        wall_area_net_m2: SqM::from(SqFt(wall_area_net_ft2)).value(),
        ceiling_area_ft2,
        ceiling_area_m2: SqM::from(SqFt(ceiling_area_ft2)).value(),
        total_area_ft2,
        total_area_m2: SqM::from(SqFt(total_area_ft2)).value(),
        total_with_waste_ft2,
        total_with_waste_m2: SqM::from(SqFt(total_with_waste_ft2)).value(),
    }
}
