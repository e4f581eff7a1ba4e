//! # Resilient Channel Estimation
//!
//! Resilient channel is hung in rows across the ceiling width before
//! boarding. Rows run the length of the room at a fixed on-center
//! spacing, with one closing row at the far edge.

use serde::{Deserialize, Serialize};

use crate::calculations::room::RoomSpec;
use crate::catalog::ChannelSpacing;
use crate::units::{Feet, Inches, LinearFeet};

/// Resilient channel options within a job's settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelOptions {
    /// Whether channel is part of this job
    pub include: bool,

    /// Row spacing across the ceiling width
    pub spacing: ChannelSpacing,

    /// Stock piece length in feet
    pub piece_ft: f64,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        ChannelOptions {
            include: false,
            spacing: ChannelSpacing::Oc16,
            piece_ft: 12.0,
        }
    }
}

/// Linear feet of channel for one room's ceiling.
///
/// Rows span the width at the given spacing, each running the room
/// length. Rooms without a ceiling, or with a zero dimension, need none.
pub fn room_linear_feet(spec: &RoomSpec, spacing: ChannelSpacing) -> LinearFeet {
    if !spec.include_ceiling || spec.length_ft <= 0.0 || spec.width_ft <= 0.0 {
        return LinearFeet(0.0);
    }
    let width_in = Inches::from(Feet(spec.width_ft));
    // +1 covers the closing row at the far edge
    let rows = (width_in.value() / spacing.inches()).floor() + 1.0;
    LinearFeet(rows * spec.length_ft)
}

/// Total linear feet of channel across all rooms, zero when not included.
pub fn total_linear_feet(rooms: &[RoomSpec], options: &ChannelOptions) -> LinearFeet {
    if !options.include {
        return LinearFeet(0.0);
    }
    LinearFeet(
        rooms
            .iter()
            .map(|room| room_linear_feet(room, options.spacing).value())
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(length_ft: f64, width_ft: f64) -> RoomSpec {
        RoomSpec::new("RC Test").with_dimensions(length_ft, width_ft, 8.0)
    }

    #[test]
    fn test_rows_at_16_oc() {
        // 10 ft width = 120 in; floor(120/16)+1 = 8 rows of 12 ft
        let lf = room_linear_feet(&room(12.0, 10.0), ChannelSpacing::Oc16);
        assert_eq!(lf, LinearFeet(8.0 * 12.0));
    }

    #[test]
    fn test_rows_at_24_oc() {
        // floor(120/24)+1 = 6 rows
        let lf = room_linear_feet(&room(12.0, 10.0), ChannelSpacing::Oc24);
        assert_eq!(lf, LinearFeet(6.0 * 12.0));
    }

    #[test]
    fn test_no_ceiling_no_channel() {
        let spec = room(12.0, 10.0).without_ceiling();
        assert_eq!(room_linear_feet(&spec, ChannelSpacing::Oc16).value(), 0.0);
    }

    #[test]
    fn test_zero_dimension_no_channel() {
        assert_eq!(room_linear_feet(&room(0.0, 10.0), ChannelSpacing::Oc16).value(), 0.0);
        assert_eq!(room_linear_feet(&room(12.0, 0.0), ChannelSpacing::Oc16).value(), 0.0);
    }

    #[test]
    fn test_total_accumulates_across_rooms() {
        let rooms = vec![room(12.0, 10.0), room(10.0, 8.0)];
        let options = ChannelOptions {
            include: true,
            ..ChannelOptions::default()
        };
        // Room 1: 8 rows x 12 ft = 96 lf; room 2: floor(96/16)+1 = 7 rows x 10 ft = 70 lf
        assert_eq!(total_linear_feet(&rooms, &options), LinearFeet(96.0 + 70.0));
    }

    #[test]
    fn test_total_zero_when_not_included() {
        let rooms = vec![room(12.0, 10.0)];
        let options = ChannelOptions::default();
        assert_eq!(total_linear_feet(&rooms, &options).value(), 0.0);
    }
}
