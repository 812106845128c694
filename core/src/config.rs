//! Tunable timings and display preferences

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Delay between the second reveal and its resolution
pub const REVEAL_DELAY_MS: u32 = 800;
/// How long a mismatched pair stays face up
pub const MISMATCH_DELAY_MS: u32 = 1000;
/// Delay between the final match and the win stage
pub const WIN_DELAY_MS: u32 = 500;

/// Minimum image count needed to leave setup
pub const MIN_FACE_IMAGES: usize = 2;

pub const DEFAULT_COLUMNS: u32 = 4;
pub const MIN_COLUMNS: u32 = 2;
pub const MAX_COLUMNS: u32 = 8;

pub const DEFAULT_CARD_SIZE: u32 = 160;
pub const MIN_CARD_SIZE: u32 = 80;
pub const MAX_CARD_SIZE: u32 = 400;

pub const DEFAULT_CARD_SPACING: u32 = 10;
pub const MIN_CARD_SPACING: u32 = 2;
pub const MAX_CARD_SPACING: u32 = 30;

pub const DEFAULT_CONTAINER_SCALE: u32 = 100;
pub const MIN_CONTAINER_SCALE: u32 = 50;
pub const MAX_CONTAINER_SCALE: u32 = 150;

/// Timer delays in milliseconds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize, Deserialize,
)]
pub struct Timing {
    pub reveal_delay_ms: u32,
    pub mismatch_delay_ms: u32,
    pub win_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reveal_delay_ms: REVEAL_DELAY_MS,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            win_delay_ms: WIN_DELAY_MS,
        }
    }
}

/// Cosmetic layout knobs. Carried to the renderer, never read by game logic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen, Serialize, Deserialize,
)]
pub struct DisplayPrefs {
    /// Grid column count
    pub columns: u32,
    /// Card edge length in pixels
    pub card_size: u32,
    /// Gap between cards in pixels
    pub card_spacing: u32,
    /// Container scale in percent
    pub container_scale: u32,
}

impl DisplayPrefs {
    pub fn new(columns: u32, card_size: u32, card_spacing: u32, container_scale: u32) -> Self {
        Self {
            columns,
            card_size,
            card_spacing,
            container_scale,
        }
        .clamped()
    }

    /// Pull every knob back into its slider range
    pub fn clamped(self) -> Self {
        Self {
            columns: self.columns.clamp(MIN_COLUMNS, MAX_COLUMNS),
            card_size: self.card_size.clamp(MIN_CARD_SIZE, MAX_CARD_SIZE),
            card_spacing: self.card_spacing.clamp(MIN_CARD_SPACING, MAX_CARD_SPACING),
            container_scale: self
                .container_scale
                .clamp(MIN_CONTAINER_SCALE, MAX_CONTAINER_SCALE),
        }
    }
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            card_size: DEFAULT_CARD_SIZE,
            card_spacing: DEFAULT_CARD_SPACING,
            container_scale: DEFAULT_CONTAINER_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_inside_ranges() {
        let prefs = DisplayPrefs::default();
        assert_eq!(prefs, prefs.clamped());
    }

    #[test]
    fn test_new_clamps_out_of_range_values() {
        let prefs = DisplayPrefs::new(1, 1000, 0, 300);
        assert_eq!(prefs.columns, MIN_COLUMNS);
        assert_eq!(prefs.card_size, MAX_CARD_SIZE);
        assert_eq!(prefs.card_spacing, MIN_CARD_SPACING);
        assert_eq!(prefs.container_scale, MAX_CONTAINER_SCALE);
    }
}
