use crate::NurseryMetrics;
use coaster_core::{EnvironmentReading, VitalReading};

// One test only: the default prometheus registry rejects duplicate
// registration, so NurseryMetrics::new() must run once per process.
#[test]
fn gauges_track_latest_observation() {
    let metrics = NurseryMetrics::new();

    let vitals = VitalReading {
        heart_rate_bpm: 132,
        breathing_rate_bpm: 35,
    };
    metrics.observe_vitals("crib-1", &vitals, true);
    assert_eq!(
        metrics
            .crib_heart_rate_bpm
            .with_label_values(&["crib-1"])
            .get(),
        132.0
    );
    assert_eq!(
        metrics
            .crib_alert_active
            .with_label_values(&["crib-1"])
            .get(),
        1.0
    );

    metrics.observe_vitals("crib-1", &vitals, false);
    assert_eq!(
        metrics
            .crib_alert_active
            .with_label_values(&["crib-1"])
            .get(),
        0.0
    );

    let nursery = EnvironmentReading {
        temperature_f: 68.0,
        humidity_pct: 45.0,
    };
    metrics.observe_environment("crib-1", &nursery);
    assert_eq!(
        metrics
            .nursery_temperature_f
            .with_label_values(&["crib-1"])
            .get(),
        68.0
    );
    assert_eq!(
        metrics
            .nursery_humidity_pct
            .with_label_values(&["crib-1"])
            .get(),
        45.0
    );
}
