//! # Pricing
//!
//! Rolls the material takeoff, labour rates, high-part surcharges, pot
//! lights, and tax into a final quote.
//!
//! ## Rate Selection
//!
//! Two value-selection rules, both "first nonzero wins" with a fixed
//! priority order:
//!
//! - Area labour charges the per-ft^2 rate when it is set, falling back
//!   to the per-m^2 rate (against the metric chargeable area), else zero.
//! - High-part labour charges a flat rate per qualifying part when one is
//!   configured and at least one part qualifies, falling back to a
//!   per-ft^2 rate over the qualifying area.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculations::high_parts::HighPartSummary;
//! use estimate_core::calculations::pricing::{price, LabourRates, UnitCosts};
//! use estimate_core::calculations::takeoff::{aggregate, CoverageFactors};
//! use estimate_core::catalog::SheetSize;
//!
//! let takeoff = aggregate(500.0, 0.0, SheetSize::FourByEight, &CoverageFactors::default(), 12.0);
//! let labour = LabourRates { per_ft2: 2.0, ..LabourRates::default() };
//! let result = price(&takeoff, &HighPartSummary::default(), &UnitCosts::default(), &labour, 0, 13.0);
//! assert_eq!(result.area_labour_cost, 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::high_parts::HighPartSummary;
use crate::calculations::takeoff::MaterialTakeoff;
use crate::units::{SqFt, SqM};

/// Unit cost for each takeoff line, plus pot lights.
///
/// All default to zero; a line with no cost configured simply
/// contributes nothing to the material subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitCosts {
    /// Cost per sheet of board ($)
    pub sheet: f64,

    /// Cost per pail of joint compound ($)
    pub mud_pail: f64,

    /// Cost per roll of tape ($)
    pub tape_roll: f64,

    /// Cost per box of screws ($)
    pub screw_box: f64,

    /// Cost per stick of corner bead ($)
    pub corner_bead_piece: f64,

    /// Cost per stick of resilient channel ($)
    pub channel_piece: f64,

    /// Cost per pot light ($)
    pub pot_light: f64,
}

/// Labour rates. Zero disables a rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabourRates {
    /// Area labour rate ($ per ft^2); takes priority over the metric rate
    pub per_ft2: f64,

    /// Area labour rate ($ per m^2); used only when the ft^2 rate is unset
    pub per_m2: f64,

    /// Flat surcharge per qualifying high part ($)
    pub high_part_flat: f64,

    /// High-part surcharge per ft^2 of qualifying area ($); used only
    /// when the flat rate does not apply
    pub high_part_per_ft2: f64,
}

/// Final price breakdown for a job.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material_subtotal": 735.0,
///   "chargeable_area_ft2": 562.0,
///   "chargeable_area_m2": 52.21,
///   "area_labour_cost": 1124.0,
///   "area_rate_label": "$2.00/ft^2",
///   "high_part_labour_cost": 400.0,
///   "labour_subtotal": 1524.0,
///   "subtotal_no_tax": 2259.0,
///   "tax_amount": 293.67,
///   "total_with_tax": 2552.67,
///   "cash_price": 2259.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Sum of quantity x unit cost over every takeoff line, plus pot lights
    pub material_subtotal: f64,

    /// Labour-chargeable area: with-waste board area plus qualifying
    /// high-part area (ft^2)
    pub chargeable_area_ft2: f64,

    /// Metric mirror of the chargeable area
    pub chargeable_area_m2: f64,

    /// Area labour charge ($)
    pub area_labour_cost: f64,

    /// Which area rate was applied (e.g., "$2.00/ft^2", "(no area rate)")
    pub area_rate_label: String,

    /// High-part labour charge ($)
    pub high_part_labour_cost: f64,

    /// Area labour plus high-part labour ($)
    pub labour_subtotal: f64,

    /// Materials plus labour, before tax ($)
    pub subtotal_no_tax: f64,

    /// Tax on the subtotal ($)
    pub tax_amount: f64,

    /// Subtotal plus tax ($)
    pub total_with_tax: f64,

    /// Tax-free quote, equal to the no-tax subtotal ($)
    pub cash_price: f64,
}

/// Price a job from its takeoff and qualifying high parts.
///
/// Pure value-selection arithmetic over non-negative inputs; never fails.
///
/// # Arguments
///
/// * `takeoff` - Aggregated material quantities
/// * `high_parts` - Qualifying high-part subset
/// * `costs` - Unit costs per takeoff line
/// * `labour` - Labour rates
/// * `pot_light_qty` - Number of pot lights to charge
/// * `tax_pct` - Tax percentage applied to the subtotal
pub fn price(
    takeoff: &MaterialTakeoff,
    high_parts: &HighPartSummary,
    costs: &UnitCosts,
    labour: &LabourRates,
    pot_light_qty: u32,
    tax_pct: f64,
) -> PriceBreakdown {
    let material_subtotal = f64::from(takeoff.sheets) * costs.sheet
        + f64::from(takeoff.mud_pails) * costs.mud_pail
        + f64::from(takeoff.tape_rolls) * costs.tape_roll
        + f64::from(takeoff.screw_boxes) * costs.screw_box
        + f64::from(takeoff.corner_bead_pieces) * costs.corner_bead_piece
        + f64::from(takeoff.channel_pieces) * costs.channel_piece
        + f64::from(pot_light_qty) * costs.pot_light;

    // High-part area is a billing concept only; it never reached the takeoff
    let chargeable_area_ft2 = takeoff.board_area_ft2 + high_parts.qualifying_area_ft2;
    let chargeable_area_m2 = SqM::from(SqFt(chargeable_area_ft2)).value();

    let (area_labour_cost, area_rate_label) = if labour.per_ft2 > 0.0 {
        (
            chargeable_area_ft2 * labour.per_ft2,
            format!("${:.2}/ft^2", labour.per_ft2),
        )
    } else if labour.per_m2 > 0.0 {
        (
            chargeable_area_m2 * labour.per_m2,
            format!("${:.2}/m^2", labour.per_m2),
        )
    } else {
        (0.0, "(no area rate)".to_string())
    };

    let high_part_labour_cost = if labour.high_part_flat > 0.0 && high_parts.qualifying_count > 0 {
        f64::from(high_parts.qualifying_count) * labour.high_part_flat
    } else {
        high_parts.qualifying_area_ft2 * labour.high_part_per_ft2
    };

    let labour_subtotal = area_labour_cost + high_part_labour_cost;
    let subtotal_no_tax = material_subtotal + labour_subtotal;
    let tax_amount = subtotal_no_tax * tax_pct / 100.0;
    let total_with_tax = subtotal_no_tax + tax_amount;

    PriceBreakdown {
        material_subtotal,
        chargeable_area_ft2,
        chargeable_area_m2,
        area_labour_cost,
        area_rate_label,
        high_part_labour_cost,
        labour_subtotal,
        subtotal_no_tax,
        tax_amount,
        total_with_tax,
        cash_price: subtotal_no_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::high_parts::{qualify, HighPartEntry};
    use crate::calculations::takeoff::{aggregate, CoverageFactors};
    use crate::catalog::SheetSize;
    use crate::units::FT2_TO_M2;

    fn takeoff_for(area: f64) -> MaterialTakeoff {
        aggregate(
            area,
            0.0,
            SheetSize::FourByEight,
            &CoverageFactors::default(),
            12.0,
        )
    }

    fn no_high_parts() -> HighPartSummary {
        HighPartSummary::default()
    }

    #[test]
    fn test_sqft_rate_takes_priority() {
        // Both rates set; the ft^2 rate must win
        let labour = LabourRates {
            per_ft2: 2.0,
            per_m2: 50.0,
            ..LabourRates::default()
        };
        let result = price(
            &takeoff_for(500.0),
            &no_high_parts(),
            &UnitCosts::default(),
            &labour,
            0,
            0.0,
        );
        assert_eq!(result.area_labour_cost, 1000.0);
        assert_eq!(result.area_rate_label, "$2.00/ft^2");
    }

    #[test]
    fn test_sqm_rate_fallback() {
        let labour = LabourRates {
            per_m2: 20.0,
            ..LabourRates::default()
        };
        let result = price(
            &takeoff_for(500.0),
            &no_high_parts(),
            &UnitCosts::default(),
            &labour,
            0,
            0.0,
        );
        let expected = 500.0 * FT2_TO_M2 * 20.0;
        assert!((result.area_labour_cost - expected).abs() < 1e-9);
        assert_eq!(result.area_rate_label, "$20.00/m^2");
    }

    #[test]
    fn test_no_area_rate() {
        let result = price(
            &takeoff_for(500.0),
            &no_high_parts(),
            &UnitCosts::default(),
            &LabourRates::default(),
            0,
            0.0,
        );
        assert_eq!(result.area_labour_cost, 0.0);
        assert_eq!(result.area_rate_label, "(no area rate)");
    }

    #[test]
    fn test_flat_high_part_rate_dominates() {
        // Two qualifying parts at $200 flat each; the per-ft^2 rate is ignored
        let high = qualify(&[
            HighPartEntry::new(12.0, 100.0),
            HighPartEntry::new(11.0, 80.0),
        ]);
        let labour = LabourRates {
            high_part_flat: 200.0,
            high_part_per_ft2: 5.0,
            ..LabourRates::default()
        };
        let result = price(
            &takeoff_for(500.0),
            &high,
            &UnitCosts::default(),
            &labour,
            0,
            0.0,
        );
        assert_eq!(result.high_part_labour_cost, 400.0);
    }

    #[test]
    fn test_per_sqft_high_part_fallback() {
        let high = qualify(&[HighPartEntry::new(12.0, 100.0)]);
        let labour = LabourRates {
            high_part_per_ft2: 3.0,
            ..LabourRates::default()
        };
        let result = price(
            &takeoff_for(500.0),
            &high,
            &UnitCosts::default(),
            &labour,
            0,
            0.0,
        );
        assert_eq!(result.high_part_labour_cost, 300.0);
    }

    #[test]
    fn test_flat_rate_needs_a_qualifying_part() {
        // Flat rate set but nothing qualifies: falls through to the
        // per-ft^2 branch over a zero area
        let high = qualify(&[HighPartEntry::new(9.0, 100.0)]);
        let labour = LabourRates {
            high_part_flat: 200.0,
            high_part_per_ft2: 3.0,
            ..LabourRates::default()
        };
        let result = price(
            &takeoff_for(500.0),
            &high,
            &UnitCosts::default(),
            &labour,
            0,
            0.0,
        );
        assert_eq!(result.high_part_labour_cost, 0.0);
    }

    #[test]
    fn test_qualifying_area_feeds_chargeable_area() {
        let high = qualify(&[HighPartEntry::new(12.0, 100.0)]);
        let result = price(
            &takeoff_for(500.0),
            &high,
            &UnitCosts::default(),
            &LabourRates::default(),
            0,
            0.0,
        );
        assert_eq!(result.chargeable_area_ft2, 600.0);
        assert_eq!(result.chargeable_area_m2, 600.0 * FT2_TO_M2);
    }

    #[test]
    fn test_material_subtotal() {
        // 1000 ft^2: 32 sheets, 3 pails, 1 roll, 2 boxes, 7 bead sticks
        let costs = UnitCosts {
            sheet: 15.0,
            mud_pail: 18.0,
            tape_roll: 6.0,
            screw_box: 40.0,
            corner_bead_piece: 4.0,
            ..UnitCosts::default()
        };
        let result = price(
            &takeoff_for(1000.0),
            &no_high_parts(),
            &costs,
            &LabourRates::default(),
            0,
            0.0,
        );
        let expected = 32.0 * 15.0 + 3.0 * 18.0 + 6.0 + 2.0 * 40.0 + 7.0 * 4.0;
        assert!((result.material_subtotal - expected).abs() < 1e-9);
    }

    #[test]
    fn test_pot_lights_charged() {
        let costs = UnitCosts {
            pot_light: 85.0,
            ..UnitCosts::default()
        };
        let result = price(
            &takeoff_for(0.0),
            &no_high_parts(),
            &costs,
            &LabourRates::default(),
            6,
            0.0,
        );
        assert_eq!(result.material_subtotal, 510.0);
    }

    #[test]
    fn test_tax_and_cash_price() {
        let labour = LabourRates {
            per_ft2: 2.0,
            ..LabourRates::default()
        };
        let result = price(
            &takeoff_for(500.0),
            &no_high_parts(),
            &UnitCosts::default(),
            &labour,
            0,
            13.0,
        );
        assert_eq!(result.subtotal_no_tax, 1000.0);
        assert!((result.tax_amount - 130.0).abs() < 1e-9);
        assert!((result.total_with_tax - 1130.0).abs() < 1e-9);
        assert_eq!(result.cash_price, result.subtotal_no_tax);
    }

    #[test]
    fn test_zero_tax_identity() {
        let labour = LabourRates {
            per_ft2: 1.0,
            ..LabourRates::default()
        };
        let result = price(
            &takeoff_for(100.0),
            &no_high_parts(),
            &UnitCosts::default(),
            &labour,
            0,
            0.0,
        );
        assert_eq!(result.total_with_tax, result.subtotal_no_tax);
    }
}
