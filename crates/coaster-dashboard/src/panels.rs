use crate::report::weekly_report;
use crate::state::DashboardState;
use coaster_core::{EnvironmentStatus, SleepReport, UserRole};
use coaster_telemetry::{MockTelemetryGenerator, DEFAULT_DURATION_DAYS, DEFAULT_STAGE_SAMPLES};
use rand::Rng;
use serde::Serialize;

/// One rendered dashboard section: a heading plus display text. The UI
/// host lays these out; nothing here knows about widgets.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub title: String,
    pub body: String,
}

impl Panel {
    fn new(title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            body,
        }
    }
}

/// Conditional branch over the three roles. Each render pass pulls fresh
/// telemetry; nothing is cached between interactions.
pub fn render_dashboard<R: Rng>(
    state: &DashboardState,
    telemetry: &mut MockTelemetryGenerator<R>,
) -> Vec<Panel> {
    match state.role {
        UserRole::Parent => parent_panels(state, telemetry),
        UserRole::HealthcareProvider => provider_panels(telemetry),
        UserRole::Administrator => administrator_panels(state),
    }
}

fn parent_panels<R: Rng>(
    state: &DashboardState,
    telemetry: &mut MockTelemetryGenerator<R>,
) -> Vec<Panel> {
    let vitals = telemetry.vital_reading();
    let stages = telemetry.sleep_stage_sequence(DEFAULT_STAGE_SAMPLES);
    let durations = telemetry.sleep_duration_sequence(DEFAULT_DURATION_DAYS);
    let report = SleepReport::from_samples(&stages, &durations);

    let mut alert_body = format!(
        "Heart rate {} bpm, breathing {} breaths/min (alert above {} bpm).",
        vitals.heart_rate_bpm,
        vitals.breathing_rate_bpm,
        state.alert_threshold.bpm()
    );
    if state.alert_threshold.is_exceeded_by(vitals.heart_rate_bpm) {
        if state.do_not_disturb {
            log::info!(
                "alert muted by do-not-disturb: heart rate {} bpm over {} bpm",
                vitals.heart_rate_bpm,
                state.alert_threshold.bpm()
            );
            alert_body.push_str("\nAlerts muted (do not disturb).");
        } else {
            alert_body.push_str(&format!(
                "\nALERT: heart rate {} bpm exceeds the configured threshold.",
                vitals.heart_rate_bpm
            ));
        }
    }
    match state.nursery.evaluate() {
        EnvironmentStatus::Optimal => {
            alert_body.push_str("\nNursery conditions are optimal.");
        }
        EnvironmentStatus::SubOptimal => {
            if let Some(advice) = state.nursery.recommendation() {
                alert_body.push_str(&format!("\nNursery conditions need attention: {advice}."));
            }
        }
    }

    vec![
        Panel::new(
            "Motion Detection & Crib Adjustment",
            format!(
                "Rocking adapts automatically to your baby's movements. \
                 Current profile: speed {}, intensity {}.",
                state.rocking.speed, state.rocking.intensity
            ),
        ),
        Panel::new("Parent Alert System", alert_body),
        Panel::new(
            "Sleep Tracking & Data Analytics",
            format!(
                "Last {} hours: {} light, {} deep, {} REM. \
                 Average over {} nights: {:.1} h. Sleep efficiency {:.0}%.",
                stages.len(),
                report.light_hours,
                report.deep_hours,
                report.rem_hours,
                durations.len(),
                report.avg_nightly_hours,
                report.efficiency_pct
            ),
        ),
        Panel::new(
            "AI-Powered Sleep Coaching",
            coaching_advice(report.avg_nightly_hours).to_string(),
        ),
    ]
}

fn provider_panels<R: Rng>(telemetry: &mut MockTelemetryGenerator<R>) -> Vec<Panel> {
    let vitals = telemetry.vital_reading();
    let stages = telemetry.sleep_stage_sequence(DEFAULT_STAGE_SAMPLES);
    let durations = telemetry.sleep_duration_sequence(DEFAULT_DURATION_DAYS);
    let report = weekly_report(&stages, &durations);

    vec![
        Panel::new(
            "Sleep Data Analytics",
            format!(
                "Exportable weekly report for health assessments:\n{}",
                serde_json::to_string_pretty(&report).unwrap_or_default()
            ),
        ),
        Panel::new(
            "Vital Signs Monitoring",
            format!(
                "Live feed: heart rate {} bpm, breathing {} breaths/min.",
                vitals.heart_rate_bpm, vitals.breathing_rate_bpm
            ),
        ),
        Panel::new(
            "Research & Data Integration",
            "Aggregated, anonymized sleep data is available over the research API \
             for clinical studies."
                .to_string(),
        ),
    ]
}

fn administrator_panels(state: &DashboardState) -> Vec<Panel> {
    vec![
        Panel::new(
            "System Configuration",
            format!(
                "Heart-rate alert threshold: {} bpm (configurable in 80..=150). \
                 Motion sensitivity and smart-home integrations are managed here.",
                state.alert_threshold.bpm()
            ),
        ),
        Panel::new(
            "User Management",
            "Manage user roles and permissions. Login integration is planned.".to_string(),
        ),
        Panel::new(
            "Data Security & Compliance",
            "Monitor encryption, backups, and HIPAA compliance status.".to_string(),
        ),
        Panel::new(
            "Reporting & Analytics",
            "Generate system-wide performance reports.".to_string(),
        ),
    ]
}

/// Static coaching copy keyed by the average nightly duration band. The
/// band lookup is the only computation; the advice itself never changes.
pub fn coaching_advice(avg_nightly_hours: f64) -> &'static str {
    if avg_nightly_hours < 7.0 {
        "Average sleep is on the short side. Try moving the bedtime routine \
         earlier and keep the pre-sleep wind-down consistent."
    } else if avg_nightly_hours < 9.0 {
        "Sleep is on track. Keep the current routine and watch for early \
         waking signs before adjusting the rocking profile."
    } else {
        "Plenty of rest this week. Consider a slightly later bedtime if \
         daytime naps are running long."
    }
}
