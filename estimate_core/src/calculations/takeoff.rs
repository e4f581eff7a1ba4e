//! # Material Takeoff Aggregation
//!
//! Converts the job's total with-waste board area (plus resilient channel
//! footage) into discrete purchasable units: sheets, mud pails, tape
//! rolls, screw boxes, corner bead sticks, and channel sticks.
//!
//! ## Rounding Policy
//!
//! Every quantity rounds UP to the next whole purchasable unit. Materials
//! must never be under-ordered; a part-pail of mud is still a pail on the
//! invoice.
//!
//! Every division guards its denominator: a zero or negative coverage
//! factor yields a zero quantity rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::takeoff::{aggregate, CoverageFactors};
//! use estimate_core::catalog::SheetSize;
//!
//! let takeoff = aggregate(
//!     1000.0,
//!     0.0,
//!     SheetSize::FourByEight,
//!     &CoverageFactors::default(),
//!     12.0,
//! );
//! assert_eq!(takeoff.sheets, 32); // ceil(1000 / 32)
//! assert_eq!(takeoff.mud_pails, 3); // 9.5 gal in 4.5 gal pails
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::SheetSize;

/// Material coverage factors.
///
/// Defaults are the rates a finishing crew actually burns through:
/// 9.5 gal of mud and 50 lf of corner bead per 1000 ft^2, 1200 ft^2 per
/// tape roll, 1.25 screws per ft^2 in 1000-piece boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageFactors {
    /// Joint compound usage (gallons per 1000 ft^2)
    pub mud_gal_per_1000_ft2: f64,

    /// Pail size mud is sold in (gallons)
    pub mud_pail_gal: f64,

    /// Board area one tape roll covers (ft^2)
    pub tape_ft2_per_roll: f64,

    /// Screws per ft^2 of board
    pub screws_per_ft2: f64,

    /// Screws per box
    pub screws_per_box: u32,

    /// Corner bead usage (linear feet per 1000 ft^2)
    pub corner_bead_lf_per_1000_ft2: f64,

    /// Corner bead stick length (feet)
    pub corner_bead_piece_ft: f64,
}

impl Default for CoverageFactors {
    fn default() -> Self {
        CoverageFactors {
            mud_gal_per_1000_ft2: 9.5,
            mud_pail_gal: 4.5,
            tape_ft2_per_roll: 1200.0,
            screws_per_ft2: 1.25,
            screws_per_box: 1000,
            corner_bead_lf_per_1000_ft2: 50.0,
            corner_bead_piece_ft: 8.0,
        }
    }
}

/// Purchasable material quantities, with the continuous intermediates
/// kept for display.
///
/// ## JSON Example
///
/// ```json
/// {
///   "board_area_ft2": 462.0,
///   "sheets": 15,
///   "mud_gal": 4.4,
///   "mud_pails": 1,
///   "tape_rolls": 1,
///   "screws": 578,
///   "screw_boxes": 1,
///   "corner_bead_lf": 23.1,
///   "corner_bead_pieces": 3,
///   "channel_lf": 0.0,
///   "channel_pieces": 0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialTakeoff {
    /// Board area the takeoff was computed from (with waste, ft^2)
    pub board_area_ft2: f64,

    /// Whole sheets of board
    pub sheets: u32,

    /// Joint compound demand (gallons)
    pub mud_gal: f64,

    /// Whole pails of joint compound
    pub mud_pails: u32,

    /// Whole rolls of tape
    pub tape_rolls: u32,

    /// Individual screws
    pub screws: u32,

    /// Whole boxes of screws
    pub screw_boxes: u32,

    /// Corner bead demand (linear feet)
    pub corner_bead_lf: f64,

    /// Whole sticks of corner bead
    pub corner_bead_pieces: u32,

    /// Resilient channel demand (linear feet, zero when not included)
    pub channel_lf: f64,

    /// Whole sticks of resilient channel
    pub channel_pieces: u32,
}

/// Round a continuous quantity up to whole purchasable units.
///
/// A non-positive unit size yields zero rather than dividing by zero.
fn ceil_units(quantity: f64, per_unit: f64) -> u32 {
    if per_unit <= 0.0 || quantity <= 0.0 {
        0
    } else {
        (quantity / per_unit).ceil() as u32
    }
}

/// Aggregate the job's total areas into purchasable material quantities.
///
/// This is a pure function over pre-summed totals; per-room math happens
/// upstream in [`crate::calculations::room`].
///
/// # Arguments
///
/// * `board_area_ft2` - Total with-waste area across all rooms
/// * `channel_lf` - Total resilient channel linear feet (zero when excluded)
/// * `sheet` - Selected sheet size
/// * `factors` - Coverage factors
/// * `channel_piece_ft` - Channel stick length in feet
pub fn aggregate(
    board_area_ft2: f64,
    channel_lf: f64,
    sheet: SheetSize,
    factors: &CoverageFactors,
    channel_piece_ft: f64,
) -> MaterialTakeoff {
    let sheets = ceil_units(board_area_ft2, sheet.area_sqft());

    let mud_gal = (board_area_ft2 / 1000.0) * factors.mud_gal_per_1000_ft2;
    let mud_pails = ceil_units(mud_gal, factors.mud_pail_gal);

    let tape_rolls = ceil_units(board_area_ft2, factors.tape_ft2_per_roll);

    let screws = if board_area_ft2 > 0.0 && factors.screws_per_ft2 > 0.0 {
        (board_area_ft2 * factors.screws_per_ft2).ceil() as u32
    } else {
        0
    };
    let screw_boxes = ceil_units(screws as f64, factors.screws_per_box as f64);

    let corner_bead_lf = (board_area_ft2 / 1000.0) * factors.corner_bead_lf_per_1000_ft2;
    let corner_bead_pieces = ceil_units(corner_bead_lf, factors.corner_bead_piece_ft);

    let channel_pieces = ceil_units(channel_lf, channel_piece_ft);

    MaterialTakeoff {
        board_area_ft2,
        sheets,
        mud_gal,
        mud_pails,
        tape_rolls,
        screws,
        screw_boxes,
        corner_bead_lf,
        corner_bead_pieces,
        channel_lf,
        channel_pieces,
    }
}
