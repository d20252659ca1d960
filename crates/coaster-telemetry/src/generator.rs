use chrono::{DateTime, Duration, TimeZone, Utc};
use coaster_core::sleep::{SLEEP_HOURS_MAX, SLEEP_HOURS_MIN};
use coaster_core::vitals::{
    BREATHING_RATE_MAX_BPM, BREATHING_RATE_MIN_BPM, HEART_RATE_MAX_BPM, HEART_RATE_MIN_BPM,
};
use coaster_core::{EnvironmentReading, SleepDurationSample, SleepStage, SleepStageSample, VitalReading};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hourly samples shown on the stage chart.
pub const DEFAULT_STAGE_SAMPLES: usize = 24;
/// Nightly samples in the weekly duration window.
pub const DEFAULT_DURATION_DAYS: usize = 7;

/// Anchor for fresh hourly sleep logs. Real hardware would timestamp
/// samples itself; every mock sequence starts here unless a caller passes
/// its own start instant.
pub fn sleep_log_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Stands in for the crib's sensor feed: every operation draws fresh values
/// from bounded uniform distributions. No shared state; each generator owns
/// its random source, so independent callers never contend.
pub struct MockTelemetryGenerator<R: Rng = StdRng> {
    rng: R,
}

impl MockTelemetryGenerator<StdRng> {
    /// Entropy-seeded, non-deterministic by design (it mimics live sensor
    /// noise).
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for MockTelemetryGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MockTelemetryGenerator<R> {
    /// Tests pass a seeded `StdRng` here to pin every draw.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn vital_reading(&mut self) -> VitalReading {
        VitalReading {
            heart_rate_bpm: self.rng.gen_range(HEART_RATE_MIN_BPM..HEART_RATE_MAX_BPM),
            breathing_rate_bpm: self
                .rng
                .gen_range(BREATHING_RATE_MIN_BPM..BREATHING_RATE_MAX_BPM),
        }
    }

    /// `count` stages drawn independently, stamped with consecutive hours
    /// from the fixed epoch. Consecutive stages have no autocorrelation.
    pub fn sleep_stage_sequence(&mut self, count: usize) -> Vec<SleepStageSample> {
        self.sleep_stage_sequence_from(sleep_log_epoch(), count)
    }

    pub fn sleep_stage_sequence_from(
        &mut self,
        start: DateTime<Utc>,
        count: usize,
    ) -> Vec<SleepStageSample> {
        (0..count)
            .map(|hour| SleepStageSample {
                timestamp: start + Duration::hours(hour as i64),
                stage: self.sleep_stage(),
            })
            .collect()
    }

    /// One nightly total per calendar day, ending today.
    pub fn sleep_duration_sequence(&mut self, days: usize) -> Vec<SleepDurationSample> {
        let today = Utc::now().date_naive();
        (0..days)
            .map(|offset| SleepDurationSample {
                day: today - Duration::days((days - 1 - offset) as i64),
                duration_hours: self.rng.gen_range(SLEEP_HOURS_MIN..SLEEP_HOURS_MAX),
            })
            .collect()
    }

    /// Simulated nursery sweep spanning the same range the demo's manual
    /// sliders cover.
    pub fn environment_reading(&mut self) -> EnvironmentReading {
        EnvironmentReading {
            temperature_f: self.rng.gen_range(60.0..=78.0),
            humidity_pct: self.rng.gen_range(30.0..=70.0),
        }
    }

    fn sleep_stage(&mut self) -> SleepStage {
        SleepStage::ALL[self.rng.gen_range(0..SleepStage::ALL.len())]
    }
}
