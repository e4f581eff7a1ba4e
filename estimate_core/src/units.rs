//! # Unit Types
//!
//! Type-safe wrappers for estimating units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Drywall estimating uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units Used
//!
//! Field inputs are US customary, with a metric mirror for pricing:
//! - Length: feet (ft), inches (in)
//! - Area: square feet (ft^2), square metres (m^2)
//! - Linear material: linear feet (lf)
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::units::{Feet, Inches, SqFt, SqM};
//!
//! let door_width = Inches(30.0);
//! let in_feet: Feet = door_width.into();
//! assert_eq!(in_feet.0, 2.5);
//!
//! let area = SqFt(420.0);
//! let metric: SqM = area.into();
//! assert!((metric.0 - 39.019).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Exact conversion factor from square feet to square metres.
pub const FT2_TO_M2: f64 = 0.09290304;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqFt> for SqM {
    fn from(sqft: SqFt) -> Self {
        SqM(sqft.0 * FT2_TO_M2)
    }
}

impl From<SqM> for SqFt {
    fn from(sqm: SqM) -> Self {
        SqFt(sqm.0 / FT2_TO_M2)
    }
}

// ============================================================================
// Linear Material
// ============================================================================

/// Linear footage of strip material (tape, corner bead, resilient channel)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinearFeet(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqFt);
impl_arithmetic!(SqM);
impl_arithmetic!(LinearFeet);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let ft = Feet(10.0);
        let inches: Inches = ft.into();
        assert_eq!(inches.0, 120.0);
    }

    #[test]
    fn test_inches_to_feet() {
        let inches = Inches(30.0);
        let ft: Feet = inches.into();
        assert_eq!(ft.0, 2.5);
    }

    #[test]
    fn test_sqft_to_sqm_exact() {
        let area = SqFt(1000.0);
        let metric: SqM = area.into();
        assert_eq!(metric.0, 1000.0 * FT2_TO_M2);
        assert_eq!(metric.0, 92.90304);
    }

    #[test]
    fn test_arithmetic() {
        let a = Feet(10.0);
        let b = Feet(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let area = SqFt(462.5);
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, "462.5");

        let roundtrip: SqFt = serde_json::from_str(&json).unwrap();
        assert_eq!(area, roundtrip);
    }
}
