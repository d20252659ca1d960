use serde::{Deserialize, Serialize};

pub const ROCKING_SETTING_MIN: u8 = 1;
pub const ROCKING_SETTING_MAX: u8 = 10;

/// Parent-chosen rocking settings for the crib riser, each in [1, 10].
/// Held only in transient UI state and overwritten on every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RockingSettings")]
pub struct RockingProfile {
    pub speed: u8,
    pub intensity: u8,
}

/// Raw wire form; the conversion applies the clamp, so configuration
/// files go through the same boundary as the sliders.
#[derive(Deserialize)]
struct RockingSettings {
    speed: u8,
    intensity: u8,
}

impl From<RockingSettings> for RockingProfile {
    fn from(raw: RockingSettings) -> Self {
        Self::new(raw.speed, raw.intensity)
    }
}

impl RockingProfile {
    pub fn new(speed: u8, intensity: u8) -> Self {
        let profile = Self {
            speed: speed.clamp(ROCKING_SETTING_MIN, ROCKING_SETTING_MAX),
            intensity: intensity.clamp(ROCKING_SETTING_MIN, ROCKING_SETTING_MAX),
        };
        if profile.speed != speed || profile.intensity != intensity {
            log::warn!(
                "rocking profile ({speed}, {intensity}) outside [{ROCKING_SETTING_MIN}, {ROCKING_SETTING_MAX}], clamped to ({}, {})",
                profile.speed,
                profile.intensity
            );
        }
        profile
    }

    // Preset soothing cycles selectable from the parent dashboard.

    pub fn gentle() -> Self {
        Self::new(2, 2)
    }

    pub fn standard() -> Self {
        Self::new(5, 4)
    }

    pub fn soothe() -> Self {
        Self::new(7, 6)
    }
}

impl Default for RockingProfile {
    fn default() -> Self {
        Self::standard()
    }
}
