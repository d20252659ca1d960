use serde::{Deserialize, Serialize};

/// Infant sensor envelope the simulated readings draw from.
/// Upper bounds are exclusive, matching the sensor firmware contract.
pub const HEART_RATE_MIN_BPM: u32 = 100;
pub const HEART_RATE_MAX_BPM: u32 = 140;
pub const BREATHING_RATE_MIN_BPM: u32 = 30;
pub const BREATHING_RATE_MAX_BPM: u32 = 40;

/// Operator-configurable band for the heart-rate alarm slider.
pub const ALERT_THRESHOLD_MIN_BPM: u32 = 80;
pub const ALERT_THRESHOLD_MAX_BPM: u32 = 150;

/// One non-contact vitals sample. Generated per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalReading {
    pub heart_rate_bpm: u32,
    pub breathing_rate_bpm: u32,
}

impl VitalReading {
    pub fn within_sensor_bounds(&self) -> bool {
        (HEART_RATE_MIN_BPM..HEART_RATE_MAX_BPM).contains(&self.heart_rate_bpm)
            && (BREATHING_RATE_MIN_BPM..BREATHING_RATE_MAX_BPM).contains(&self.breathing_rate_bpm)
    }
}

/// Heart-rate alarm level. The UI slider cannot leave [80, 150], but
/// configuration files can; out-of-band values are clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32")]
pub struct AlertThreshold(u32);

impl From<u32> for AlertThreshold {
    fn from(bpm: u32) -> Self {
        Self::new(bpm)
    }
}

impl AlertThreshold {
    pub fn new(bpm: u32) -> Self {
        let clamped = bpm.clamp(ALERT_THRESHOLD_MIN_BPM, ALERT_THRESHOLD_MAX_BPM);
        if clamped != bpm {
            log::warn!(
                "alert threshold {} bpm outside [{}, {}], clamped to {}",
                bpm,
                ALERT_THRESHOLD_MIN_BPM,
                ALERT_THRESHOLD_MAX_BPM,
                clamped
            );
        }
        Self(clamped)
    }

    pub fn bpm(self) -> u32 {
        self.0
    }

    /// Strict inequality: a reading equal to the threshold does not alert.
    pub fn is_exceeded_by(self, heart_rate_bpm: u32) -> bool {
        heart_rate_bpm > self.0
    }
}
