use crate::panels::{coaching_advice, render_dashboard};
use crate::report::weekly_report;
use crate::state::DashboardState;
use coaster_core::{AlertThreshold, UserRole};
use coaster_telemetry::MockTelemetryGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_telemetry() -> MockTelemetryGenerator<StdRng> {
    MockTelemetryGenerator::with_rng(StdRng::seed_from_u64(42))
}

#[test]
fn parent_dashboard_renders_four_panels() {
    let state = DashboardState::for_role(UserRole::Parent);
    let panels = render_dashboard(&state, &mut seeded_telemetry());
    let titles: Vec<&str> = panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Motion Detection & Crib Adjustment",
            "Parent Alert System",
            "Sleep Tracking & Data Analytics",
            "AI-Powered Sleep Coaching",
        ]
    );
}

#[test]
fn provider_dashboard_renders_three_panels() {
    let state = DashboardState::for_role(UserRole::HealthcareProvider);
    let panels = render_dashboard(&state, &mut seeded_telemetry());
    let titles: Vec<&str> = panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Sleep Data Analytics",
            "Vital Signs Monitoring",
            "Research & Data Integration",
        ]
    );
}

#[test]
fn administrator_dashboard_renders_four_panels() {
    let state = DashboardState::for_role(UserRole::Administrator);
    let panels = render_dashboard(&state, &mut seeded_telemetry());
    let titles: Vec<&str> = panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "System Configuration",
            "User Management",
            "Data Security & Compliance",
            "Reporting & Analytics",
        ]
    );
    assert!(panels[0].body.contains("120 bpm"));
}

#[test]
fn do_not_disturb_mutes_the_alert_line() {
    // Threshold at the floor so every simulated heart rate (>= 100) alerts.
    let mut state = DashboardState::for_role(UserRole::Parent);
    state.alert_threshold = AlertThreshold::new(80);

    let panels = render_dashboard(&state, &mut seeded_telemetry());
    assert!(panels[1].body.contains("ALERT"));

    state.do_not_disturb = true;
    let panels = render_dashboard(&state, &mut seeded_telemetry());
    assert!(!panels[1].body.contains("ALERT"));
    assert!(panels[1].body.contains("muted"));
}

#[test]
fn suboptimal_nursery_surfaces_advice_on_the_alert_panel() {
    let mut state = DashboardState::for_role(UserRole::Parent);
    state.nursery.temperature_f = 75.0;
    let panels = render_dashboard(&state, &mut seeded_telemetry());
    assert!(panels[1].body.contains("need attention"));
}

#[test]
fn weekly_report_envelope_is_date_stamped() {
    let mut telemetry = seeded_telemetry();
    let stages = telemetry.sleep_stage_sequence(24);
    let durations = telemetry.sleep_duration_sequence(7);
    let value = weekly_report(&stages, &durations);

    assert_eq!(value["domain"], "crib.sleep");
    assert_eq!(value["nights"], 7);
    let efficiency = value["report"]["efficiency_pct"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&efficiency));
    assert!(value["date"].as_str().unwrap().len() == 10);
}

#[test]
fn coaching_advice_tracks_duration_bands() {
    let short = coaching_advice(6.0);
    let on_track = coaching_advice(8.0);
    let rested = coaching_advice(10.0);
    assert!(short.contains("earlier"));
    assert!(on_track.contains("on track"));
    assert!(rested.contains("later bedtime"));
    assert_ne!(short, on_track);
    assert_ne!(on_track, rested);
}
