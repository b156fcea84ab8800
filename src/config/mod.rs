//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    CadenceConfig, CliOverrides, OutputConfig, Settings, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    MAX_CADENCE_SECONDS, MIN_CADENCE_SECONDS,
};
