//! # Estimating Calculations
//!
//! This module contains the full estimating pipeline. Each stage follows
//! the pattern:
//!
//! - Input struct (JSON-serializable)
//! - Result struct (JSON-serializable)
//! - Pure calculation function from one to the other
//!
//! Data flows one direction through the stages, and every stage is a
//! pure function of its inputs:
//!
//! ```text
//! rooms ──> room::calculate ──┬──> takeoff::aggregate ──> pricing::price
//! channel::total_linear_feet ─┘                              ^
//! high_parts::qualify ───────────────────────────────────────┘
//! ```
//!
//! ## Available Stages
//!
//! - [`room`] - Per-room geometry (walls, openings, ceiling, waste)
//! - [`channel`] - Resilient channel linear footage
//! - [`takeoff`] - Purchasable material quantities
//! - [`high_parts`] - Qualification of charge-only high zones
//! - [`pricing`] - Cost, labour, tax, and cash price rollup

pub mod channel;
pub mod high_parts;
pub mod pricing;
pub mod room;
pub mod takeoff;

use serde::{Deserialize, Serialize};

use crate::job::{EstimateSettings, Job};
use crate::units::{SqFt, SqM};

// Re-export commonly used types
pub use channel::ChannelOptions;
pub use high_parts::{HighPartEntry, HighPartSummary};
pub use pricing::{LabourRates, PriceBreakdown, UnitCosts};
pub use room::{Opening, RoomResult, RoomSpec};
pub use takeoff::{CoverageFactors, MaterialTakeoff};

/// Whole-job area totals, summed over every room.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobTotals {
    /// Net walls plus ceilings across all rooms (ft^2)
    pub total_area_ft2: f64,

    /// Metric mirror of `total_area_ft2`
    pub total_area_m2: f64,

    /// Total area with waste across all rooms (ft^2)
    pub total_with_waste_ft2: f64,

    /// Metric mirror of `total_with_waste_ft2`
    pub total_with_waste_m2: f64,

    /// Resilient channel demand across all ceilings (linear feet)
    pub channel_lf: f64,
}

/// Complete output of one estimating run.
///
/// Everything a front end needs to display or export: the per-room
/// breakdown, job totals, the material takeoff, the qualifying high
/// parts, and the price rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Per-room area breakdowns, in input order
    pub rooms: Vec<RoomResult>,

    /// Whole-job area totals
    pub totals: JobTotals,

    /// Purchasable material quantities
    pub takeoff: MaterialTakeoff,

    /// Qualifying high-part subset
    pub high_parts: HighPartSummary,

    /// Price breakdown
    pub pricing: PriceBreakdown,
}

/// Run the full estimating pipeline over a job snapshot.
///
/// This is a pure function: it reads the job, computes, and returns a
/// fresh `Estimate`. Nothing is cached or mutated, so recomputing after
/// any input change is always safe and always consistent.
///
/// # Example
///
/// ```rust
/// use estimate_core::calculations::{compute, RoomSpec};
/// use estimate_core::job::Job;
///
/// let mut job = Job::new("Pat Estimator", "26-104", "Northview Homes");
/// job.add_room(RoomSpec::new("Main Floor").with_dimensions(10.0, 10.0, 8.0));
/// job.settings.waste_pct = 10.0;
///
/// let estimate = compute(&job);
/// assert_eq!(estimate.totals.total_area_ft2, 420.0);
/// assert!((estimate.totals.total_with_waste_ft2 - 462.0).abs() < 1e-9);
/// ```
pub fn compute(job: &Job) -> Estimate {
    compute_estimate(&job.rooms, &job.high_parts, &job.settings)
}

/// Run the pipeline over bare inputs, without a [`Job`] wrapper.
///
/// Useful for front ends that hold rooms and settings in their own
/// state; [`compute`] is this function applied to a job's fields.
pub fn compute_estimate(
    room_specs: &[RoomSpec],
    high_part_entries: &[HighPartEntry],
    settings: &EstimateSettings,
) -> Estimate {
    let rooms: Vec<RoomResult> = room_specs
        .iter()
        .map(|spec| room::calculate(spec, settings.waste_pct))
        .collect();

    let total_area_ft2: f64 = rooms.iter().map(|r| r.total_area_ft2).sum();
    let total_with_waste_ft2: f64 = rooms.iter().map(|r| r.total_with_waste_ft2).sum();
    let channel_lf = channel::total_linear_feet(room_specs, &settings.channel).value();

    let totals = JobTotals {
        total_area_ft2,
        total_area_m2: SqM::from(SqFt(total_area_ft2)).value(),
        total_with_waste_ft2,
        total_with_waste_m2: SqM::from(SqFt(total_with_waste_ft2)).value(),
        channel_lf,
    };

    let takeoff = takeoff::aggregate(
        total_with_waste_ft2,
        channel_lf,
        settings.sheet,
        &settings.factors,
        settings.channel.piece_ft,
    );

    let high_parts = high_parts::qualify(high_part_entries);

    let pricing = pricing::price(
        &takeoff,
        &high_parts,
        &settings.costs,
        &settings.labour,
        settings.pot_light_qty,
        settings.tax_pct,
    );

    Estimate {
        rooms,
        totals,
        takeoff,
        high_parts,
        pricing,
    }
}
