//! Preset Catalogs
//!
//! Fixed lookup tables for the quantities crews actually order and hang:
//! door slab sizes, quick-pick wall heights, drywall sheet sizes, and
//! resilient channel spacing.
//!
//! ## Door Presets
//!
//! Door openings come in standard slab widths (24" to 36") at 80" height.
//! A `Custom` entry accepts free-form width/height in inches, converted
//! to feet by dividing by 12.

use serde::{Deserialize, Serialize};

use crate::units::{Feet, Inches};

/// Standard door slab size
///
/// Represents nominal door dimensions with automatic feet conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum DoorSize {
    /// 24 x 80 in
    D24x80,
    /// 28 x 80 in
    D28x80,
    /// 30 x 80 in
    #[default]
    D30x80,
    /// 32 x 80 in
    D32x80,
    /// 36 x 80 in
    D36x80,
    /// Custom size - user specifies dimensions in inches
    Custom { width_in: f64, height_in: f64 },
}

impl DoorSize {
    /// Standard preset sizes for UI selection (most common first)
    pub const PRESETS: [DoorSize; 5] = [
        DoorSize::D30x80,
        DoorSize::D32x80,
        DoorSize::D36x80,
        DoorSize::D28x80,
        DoorSize::D24x80,
    ];

    /// Get the dimensions (width, height) in feet
    pub fn dimensions_ft(&self) -> (f64, f64) {
        let (w_in, h_in) = match self {
            DoorSize::D24x80 => (24.0, 80.0),
            DoorSize::D28x80 => (28.0, 80.0),
            DoorSize::D30x80 => (30.0, 80.0),
            DoorSize::D32x80 => (32.0, 80.0),
            DoorSize::D36x80 => (36.0, 80.0),
            DoorSize::Custom { width_in, height_in } => (*width_in, *height_in),
        };
        (
            Feet::from(Inches(w_in)).value(),
            Feet::from(Inches(h_in)).value(),
        )
    }

    pub fn display_name(&self) -> String {
        match self {
            DoorSize::D24x80 => "24 x 80 in".to_string(),
            DoorSize::D28x80 => "28 x 80 in".to_string(),
            DoorSize::D30x80 => "30 x 80 in".to_string(),
            DoorSize::D32x80 => "32 x 80 in".to_string(),
            DoorSize::D36x80 => "36 x 80 in".to_string(),
            DoorSize::Custom { width_in, height_in } => {
                format!("{width_in} x {height_in} in (custom)")
            }
        }
    }
}

impl std::fmt::Display for DoorSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Quick-pick wall height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum WallHeight {
    /// 8 ft
    #[default]
    H8,
    /// 9 ft
    H9,
    /// 10 ft
    H10,
    /// 12 ft
    H12,
    /// 14 ft
    H14,
    /// Custom height in feet
    Custom { height_ft: f64 },
}

impl WallHeight {
    /// Standard preset heights for UI selection
    pub const PRESETS: [WallHeight; 5] = [
        WallHeight::H8,
        WallHeight::H9,
        WallHeight::H10,
        WallHeight::H12,
        WallHeight::H14,
    ];

    /// Get the height in feet
    pub fn feet(&self) -> f64 {
        match self {
            WallHeight::H8 => 8.0,
            WallHeight::H9 => 9.0,
            WallHeight::H10 => 10.0,
            WallHeight::H12 => 12.0,
            WallHeight::H14 => 14.0,
            WallHeight::Custom { height_ft } => *height_ft,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            WallHeight::Custom { height_ft } => format!("{height_ft} ft (custom)"),
            other => format!("{} ft", other.feet()),
        }
    }
}

/// Drywall sheet size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SheetSize {
    /// 4x8 sheet (32 ft^2)
    #[default]
    FourByEight,
    /// 4x12 sheet (48 ft^2)
    FourByTwelve,
}

impl SheetSize {
    pub const ALL: [SheetSize; 2] = [SheetSize::FourByEight, SheetSize::FourByTwelve];

    /// Coverage of a single sheet in square feet
    pub fn area_sqft(&self) -> f64 {
        match self {
            SheetSize::FourByEight => 32.0,
            SheetSize::FourByTwelve => 48.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SheetSize::FourByEight => "4x8 (32 ft^2)",
            SheetSize::FourByTwelve => "4x12 (48 ft^2)",
        }
    }
}

impl std::fmt::Display for SheetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resilient channel on-center spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChannelSpacing {
    /// 16 in on center
    #[default]
    Oc16,
    /// 24 in on center
    Oc24,
}

impl ChannelSpacing {
    pub const ALL: [ChannelSpacing; 2] = [ChannelSpacing::Oc16, ChannelSpacing::Oc24];

    /// Spacing between rows in inches
    pub fn inches(&self) -> f64 {
        match self {
            ChannelSpacing::Oc16 => 16.0,
            ChannelSpacing::Oc24 => 24.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChannelSpacing::Oc16 => "16 in o.c.",
            ChannelSpacing::Oc24 => "24 in o.c.",
        }
    }
}
