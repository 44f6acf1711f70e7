//! Config domain: the tuning file and the errors raised while validating it.

mod loader;

pub use loader::{TUNING_FILE, load_tuning};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::CameraTuning;
use crate::enemy::EnemyTuning;
use crate::movement::MovementConfig;

/// Everything designers tune, loaded from `assets/data/tuning.ron`.
/// Missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tuning {
    pub movement: MovementConfig,
    pub enemy: EnemyTuning,
    pub camera: CameraTuning,
}

impl Tuning {
    /// Validate every section that has preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate()?;
        self.enemy.validate()?;
        self.camera.validate()
    }
}

/// Where the active tuning came from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum TuningSource {
    File(String),
    /// Built-in defaults, with the reason the file was not used.
    Defaults(String),
}

/// Installs validated tuning as resources before the gameplay plugins read it.
pub struct TuningPlugin {
    pub tuning: Tuning,
    pub source: TuningSource,
}

impl Plugin for TuningPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.tuning.movement.clone())
            .insert_resource(self.tuning.enemy.clone())
            .insert_resource(self.tuning.camera.clone())
            .insert_resource(self.source.clone())
            .add_systems(Startup, log_tuning_source);
    }
}

fn log_tuning_source(source: Res<TuningSource>, movement: Res<MovementConfig>) {
    match &*source {
        TuningSource::File(path) => info!("Loaded tuning from {}", path),
        TuningSource::Defaults(reason) => warn!("Using built-in tuning: {}", reason),
    }
    info!(
        "Movement: max_speed={}, jump_velocity={}, gravity={}, dash_speed={}",
        movement.max_speed,
        movement.base_jump_velocity(),
        movement.base_gravity(),
        movement.dash_speed
    );
}

/// Errors that can occur when loading or validating tuning.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Tuning file could not be read.
    #[error("Failed to read '{path}': {details}")]
    Io { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// A duration or rate that is used as a divisor is zero, negative or not finite.
    #[error("'{field}' must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    /// A value that may be zero is negative or not finite.
    #[error("'{field}' must be zero or positive, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// Terminal speed bounds falling, so it has to point down.
    #[error("'terminal_speed' must be negative, got {0}")]
    TerminalSpeedNotNegative(f32),

    /// Ground probe as wide as the body also touches walls beside it.
    #[error("Ground probe is {probe_width} wide but the body is only {body_width}")]
    ProbeTooWide { probe_width: f32, body_width: f32 },
}

impl ConfigError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, ConfigError::Io { .. })
    }
}

/// Reject zero, negative and non-finite values.
pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// Reject negative and non-finite values.
pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
