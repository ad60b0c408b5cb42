//! Loader and validation for the locomotion tuning file.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::LocomotionTuning;

pub const TUNING_PATH: &str = "assets/data/locomotion.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// A tuning value that fails its range check.
#[derive(Debug)]
pub struct TuningError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tuning field '{}' invalid: {}", self.field, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the tuning file.
pub fn load_tuning(path: &Path) -> Result<LocomotionTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| TuningLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Range checks for every knob. Returns all failures, empty if valid.
/// NaN fails every comparison, so non-finite values are rejected too.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<TuningError> {
    let mut errors = Vec::new();
    let mut check = |ok: bool, field: &'static str, message: String| {
        if !ok {
            errors.push(TuningError { field, message });
        }
    };

    check(
        tuning.base_speed > 0.0,
        "base_speed",
        format!("must be positive, got {}", tuning.base_speed),
    );
    check(
        tuning.sprint_ceiling > tuning.base_speed,
        "sprint_ceiling",
        format!(
            "must exceed base_speed {}, got {}",
            tuning.base_speed, tuning.sprint_ceiling
        ),
    );
    check(
        tuning.boost_speed > tuning.sprint_ceiling,
        "boost_speed",
        format!(
            "must exceed sprint_ceiling {}, got {}",
            tuning.sprint_ceiling, tuning.boost_speed
        ),
    );
    check(
        tuning.sprint_margin >= 0.0,
        "sprint_margin",
        format!("must be non-negative, got {}", tuning.sprint_margin),
    );
    check(
        tuning.acceleration > 0.0,
        "acceleration",
        format!("must be positive, got {}", tuning.acceleration),
    );
    check(
        tuning.normal_deceleration > 0.0,
        "normal_deceleration",
        format!("must be positive, got {}", tuning.normal_deceleration),
    );
    check(
        tuning.boost_deceleration > 0.0,
        "boost_deceleration",
        format!("must be positive, got {}", tuning.boost_deceleration),
    );
    check(
        (0.0..=1.0).contains(&tuning.directional_influence),
        "directional_influence",
        format!("must lie in [0, 1], got {}", tuning.directional_influence),
    );
    check(
        tuning.jump_force > 0.0,
        "jump_force",
        format!("must be positive, got {}", tuning.jump_force),
    );
    check(
        tuning.gravity > 0.0,
        "gravity",
        format!("must be positive, got {}", tuning.gravity),
    );
    check(
        tuning.jump_speed_clamp >= tuning.base_speed,
        "jump_speed_clamp",
        format!(
            "must be at least base_speed {}, got {}",
            tuning.base_speed, tuning.jump_speed_clamp
        ),
    );
    check(
        tuning.air_dash_speed > 0.0,
        "air_dash_speed",
        format!("must be positive, got {}", tuning.air_dash_speed),
    );
    check(
        tuning.air_dash_duration > 0.0,
        "air_dash_duration",
        format!("must be positive, got {}", tuning.air_dash_duration),
    );

    errors
}

/// Load tuning at startup. A missing file keeps the defaults; a file that
/// fails to parse or validate aborts startup.
pub(crate) fn load_locomotion_tuning(mut tuning: ResMut<LocomotionTuning>) {
    let path = Path::new(TUNING_PATH);
    if path.exists() {
        match load_tuning(path) {
            Ok(loaded) => {
                *tuning = loaded;
                info!("Loaded locomotion tuning from {}", TUNING_PATH);
            }
            Err(e) => panic!("{}", e),
        }
    } else {
        warn!("{} not found, using default locomotion tuning", TUNING_PATH);
    }

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        panic!("locomotion tuning failed validation ({} errors)", errors.len());
    }
}
