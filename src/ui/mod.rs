//! UI domain: dash cooldown HUD and death feedback.

mod hud_dash;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::PlayerDiedEvent;
use crate::ui::hud_dash::{spawn_dash_cooldown_ui, update_dash_cooldown_bar};

const DEAD_PLAYER_COLOR: Color = Color::srgb(0.35, 0.35, 0.35);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_dash_cooldown_ui)
            .add_systems(Update, (update_dash_cooldown_bar, tint_dead_player));
    }
}

fn tint_dead_player(
    mut died_events: MessageReader<PlayerDiedEvent>,
    mut sprite_query: Query<&mut Sprite>,
) {
    for event in died_events.read() {
        if let Ok(mut sprite) = sprite_query.get_mut(event.player) {
            sprite.color = DEAD_PLAYER_COLOR;
        }
    }
}
