use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Simulated nightly sleep span in hours; upper bound exclusive.
/// The demo variants drifted between 5 and 6 for the lower bound; 5 is the
/// canonical value here.
pub const SLEEP_HOURS_MIN: f64 = 5.0;
pub const SLEEP_HOURS_MAX: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepStage {
    Light,
    Deep,
    Rem,
}

impl SleepStage {
    pub const ALL: [SleepStage; 3] = [SleepStage::Light, SleepStage::Deep, SleepStage::Rem];

    pub fn label(self) -> &'static str {
        match self {
            SleepStage::Light => "Light",
            SleepStage::Deep => "Deep",
            SleepStage::Rem => "REM",
        }
    }
}

/// One hourly entry in the simulated sleep log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepStageSample {
    pub timestamp: DateTime<Utc>,
    pub stage: SleepStage,
}

/// One night's total sleep, one sample per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepDurationSample {
    pub day: NaiveDate,
    pub duration_hours: f64,
}

/// Aggregate over a stage log and a window of nightly durations, shown on
/// the analytics panels and exported for pediatrician visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepReport {
    pub light_hours: u32,
    pub deep_hours: u32,
    pub rem_hours: u32,
    pub avg_nightly_hours: f64,
    /// Share of restorative (deep + REM) hours in the stage log, 0..=100.
    pub efficiency_pct: f64,
}

impl SleepReport {
    /// Each stage sample counts as one hour in that stage.
    pub fn from_samples(stages: &[SleepStageSample], durations: &[SleepDurationSample]) -> Self {
        let mut light_hours = 0u32;
        let mut deep_hours = 0u32;
        let mut rem_hours = 0u32;
        for sample in stages {
            match sample.stage {
                SleepStage::Light => light_hours += 1,
                SleepStage::Deep => deep_hours += 1,
                SleepStage::Rem => rem_hours += 1,
            }
        }

        let total_hours = light_hours + deep_hours + rem_hours;
        let efficiency_pct = if total_hours > 0 {
            f64::from(deep_hours + rem_hours) / f64::from(total_hours) * 100.0
        } else {
            0.0
        };

        let avg_nightly_hours = if durations.is_empty() {
            0.0
        } else {
            durations.iter().map(|d| d.duration_hours).sum::<f64>() / durations.len() as f64
        };

        Self {
            light_hours,
            deep_hours,
            rem_hours,
            avg_nightly_hours,
            efficiency_pct,
        }
    }
}
