use coaster_core::{EnvironmentReading, VitalReading};
use prometheus::{register_gauge_vec, GaugeVec};

/// Gauges mirroring the most recent observations per crib. Registration
/// uses the default registry, so construct this once per process.
pub struct NurseryMetrics {
    pub crib_heart_rate_bpm: GaugeVec,
    pub crib_breathing_rate_bpm: GaugeVec,
    pub nursery_temperature_f: GaugeVec,
    pub nursery_humidity_pct: GaugeVec,
    pub crib_alert_active: GaugeVec,
}

impl NurseryMetrics {
    pub fn new() -> Self {
        let crib_heart_rate_bpm = register_gauge_vec!(
            "crib_heart_rate_bpm",
            "Latest simulated heart rate per crib",
            &["crib_id"]
        )
        .unwrap();

        let crib_breathing_rate_bpm = register_gauge_vec!(
            "crib_breathing_rate_bpm",
            "Latest simulated breathing rate per crib",
            &["crib_id"]
        )
        .unwrap();

        let nursery_temperature_f = register_gauge_vec!(
            "nursery_temperature_f",
            "Latest nursery temperature per crib",
            &["crib_id"]
        )
        .unwrap();

        let nursery_humidity_pct = register_gauge_vec!(
            "nursery_humidity_pct",
            "Latest nursery humidity per crib",
            &["crib_id"]
        )
        .unwrap();

        let crib_alert_active = register_gauge_vec!(
            "crib_alert_active",
            "1 when the latest heart rate exceeded the alert threshold",
            &["crib_id"]
        )
        .unwrap();

        Self {
            crib_heart_rate_bpm,
            crib_breathing_rate_bpm,
            nursery_temperature_f,
            nursery_humidity_pct,
            crib_alert_active,
        }
    }

    pub fn observe_vitals(&self, crib_id: &str, reading: &VitalReading, alert: bool) {
        self.crib_heart_rate_bpm
            .with_label_values(&[crib_id])
            .set(f64::from(reading.heart_rate_bpm));
        self.crib_breathing_rate_bpm
            .with_label_values(&[crib_id])
            .set(f64::from(reading.breathing_rate_bpm));
        self.crib_alert_active
            .with_label_values(&[crib_id])
            .set(if alert { 1.0 } else { 0.0 });
    }

    pub fn observe_environment(&self, crib_id: &str, reading: &EnvironmentReading) {
        self.nursery_temperature_f
            .with_label_values(&[crib_id])
            .set(reading.temperature_f);
        self.nursery_humidity_pct
            .with_label_values(&[crib_id])
            .set(reading.humidity_pct);
    }
}

impl Default for NurseryMetrics {
    fn default() -> Self {
        Self::new()
    }
}
