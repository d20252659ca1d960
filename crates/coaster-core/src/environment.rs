use serde::{Deserialize, Serialize};

/// Optimal nursery band, both boundaries inclusive.
pub const TEMP_OPTIMAL_MIN_F: f64 = 65.0;
pub const TEMP_OPTIMAL_MAX_F: f64 = 72.0;
pub const HUMIDITY_OPTIMAL_MIN_PCT: f64 = 40.0;
pub const HUMIDITY_OPTIMAL_MAX_PCT: f64 = 60.0;

/// Nursery conditions, supplied by the parent controls or a simulated
/// sensor sweep. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    pub temperature_f: f64,
    pub humidity_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentStatus {
    Optimal,
    SubOptimal,
}

impl EnvironmentReading {
    /// Optimal iff temperature and humidity sit inside their bands
    /// simultaneously. Pure and total.
    pub fn evaluate(&self) -> EnvironmentStatus {
        let temp_ok = (TEMP_OPTIMAL_MIN_F..=TEMP_OPTIMAL_MAX_F).contains(&self.temperature_f);
        let humidity_ok =
            (HUMIDITY_OPTIMAL_MIN_PCT..=HUMIDITY_OPTIMAL_MAX_PCT).contains(&self.humidity_pct);
        if temp_ok && humidity_ok {
            EnvironmentStatus::Optimal
        } else {
            EnvironmentStatus::SubOptimal
        }
    }

    /// Advice surfaced when the nursery drifts out of band. `None` while
    /// conditions are optimal.
    pub fn recommendation(&self) -> Option<String> {
        let mut advice = Vec::new();
        if self.temperature_f < TEMP_OPTIMAL_MIN_F {
            advice.push(format!(
                "raise nursery temperature toward {TEMP_OPTIMAL_MIN_F}\u{b0}F"
            ));
        } else if self.temperature_f > TEMP_OPTIMAL_MAX_F {
            advice.push(format!(
                "lower nursery temperature toward {TEMP_OPTIMAL_MAX_F}\u{b0}F"
            ));
        }
        if self.humidity_pct < HUMIDITY_OPTIMAL_MIN_PCT {
            advice.push(format!("run a humidifier toward {HUMIDITY_OPTIMAL_MIN_PCT}%"));
        } else if self.humidity_pct > HUMIDITY_OPTIMAL_MAX_PCT {
            advice.push(format!(
                "ventilate to bring humidity under {HUMIDITY_OPTIMAL_MAX_PCT}%"
            ));
        }
        if advice.is_empty() {
            None
        } else {
            Some(advice.join("; "))
        }
    }
}
