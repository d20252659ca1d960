use coaster_core::{AlertThreshold, EnvironmentReading, RockingProfile, UserRole};
use serde::{Deserialize, Serialize};

/// Everything the dashboard needs for one render pass. Transient by
/// design: each interaction rebuilds the panels from the current values,
/// and nothing survives the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardState {
    pub role: UserRole,
    pub rocking: RockingProfile,
    pub alert_threshold: AlertThreshold,
    pub nursery: EnvironmentReading,
    /// Mutes alert lines on the rendered panels; the underlying checks
    /// still run and still log.
    pub do_not_disturb: bool,
}

impl DashboardState {
    pub fn for_role(role: UserRole) -> Self {
        Self {
            role,
            rocking: RockingProfile::standard(),
            alert_threshold: AlertThreshold::new(120),
            nursery: EnvironmentReading {
                temperature_f: 70.0,
                humidity_pct: 50.0,
            },
            do_not_disturb: false,
        }
    }
}
