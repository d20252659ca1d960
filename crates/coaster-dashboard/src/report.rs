use chrono::Utc;
use coaster_core::{SleepDurationSample, SleepReport, SleepStageSample};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct WeeklyReportEnvelope<'a> {
    date: String,
    domain: &'static str,
    nights: usize,
    report: SleepReport,
    durations: &'a [SleepDurationSample],
}

/// Date-stamped report envelope for pediatrician export. The caller hands
/// over whichever stage log and duration window it just rendered.
pub fn weekly_report(stages: &[SleepStageSample], durations: &[SleepDurationSample]) -> Value {
    let report = SleepReport::from_samples(stages, durations);
    serde_json::to_value(WeeklyReportEnvelope {
        date: Utc::now().format("%Y-%m-%d").to_string(),
        domain: "crib.sleep",
        nights: durations.len(),
        report,
        durations,
    })
    .expect("serialize weekly report")
}
