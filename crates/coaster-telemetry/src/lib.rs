mod generator;


pub use generator::{
    sleep_log_epoch, MockTelemetryGenerator, DEFAULT_DURATION_DAYS, DEFAULT_STAGE_SAMPLES,
};
