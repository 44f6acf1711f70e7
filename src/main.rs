use std::path::Path;

use avian2d::prelude::*;
use bevy::prelude::*;

use coyote_platformer::camera::CameraPlugin;
use coyote_platformer::config::{
    ConfigError, TUNING_FILE, Tuning, TuningPlugin, TuningSource, load_tuning,
};
use coyote_platformer::enemy::EnemyPlugin;
use coyote_platformer::level::LevelPlugin;
use coyote_platformer::movement::MovementPlugin;
use coyote_platformer::ui::UiPlugin;

/// Physics tick rate.
const FIXED_HZ: f64 = 50.0;

fn main() -> Result<(), ConfigError> {
    // A missing file falls back to defaults; a broken one refuses to start
    let (tuning, source) = match load_tuning(Path::new(TUNING_FILE)) {
        Ok(tuning) => (tuning, TuningSource::File(TUNING_FILE.to_string())),
        Err(e) if e.is_missing_file() => {
            (Tuning::default(), TuningSource::Defaults(e.to_string()))
        }
        Err(e) => return Err(e),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Coyote".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
        .add_plugins(TuningPlugin { tuning, source })
        .add_plugins((
            MovementPlugin,
            EnemyPlugin,
            CameraPlugin,
            LevelPlugin,
            UiPlugin,
        ))
        .run();

    Ok(())
}
