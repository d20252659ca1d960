pub mod environment;
pub mod rocking;
pub mod role;
pub mod sleep;
pub mod vitals;


pub use environment::{EnvironmentReading, EnvironmentStatus};
pub use rocking::RockingProfile;
pub use role::{RoleError, UserRole};
pub use sleep::{SleepDurationSample, SleepReport, SleepStage, SleepStageSample};
pub use vitals::{AlertThreshold, VitalReading};
