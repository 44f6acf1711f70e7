//! UI domain: dash recharge meter, centered along the bottom edge.

use bevy::prelude::*;

use crate::movement::{Player, PlayerController};

const TRACK_WIDTH: f32 = 96.0;
const TRACK_HEIGHT: f32 = 6.0;
const BOTTOM_MARGIN: f32 = 24.0;

const DRAINED_COLOR: (f32, f32, f32) = (0.15, 0.3, 0.45);
const CHARGED_COLOR: (f32, f32, f32) = (0.45, 0.9, 1.0);

/// Root of the meter; hidden while the dash is ready.
#[derive(Component)]
pub struct DashMeter;

/// Fill element whose width tracks recharge progress.
#[derive(Component)]
pub struct DashMeterFill;

pub(crate) fn spawn_dash_cooldown_ui(mut commands: Commands) {
    commands
        .spawn((
            DashMeter,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(BOTTOM_MARGIN),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(8.0),
                    padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new("DASH"),
                    TextFont {
                        font_size: 11.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.75, 0.8, 0.85)),
                ));

                panel
                    .spawn((
                        Node {
                            width: Val::Px(TRACK_WIDTH),
                            height: Val::Px(TRACK_HEIGHT),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.08, 0.08, 0.1)),
                    ))
                    .with_children(|track| {
                        track.spawn((
                            DashMeterFill,
                            Node {
                                width: Val::Percent(0.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(recharge_color(0.0)),
                        ));
                    });
            });
        });
}

/// Fill color for a recharge ratio in [0, 1]; brightens as the dash returns.
fn recharge_color(ratio: f32) -> Color {
    let t = ratio.clamp(0.0, 1.0);
    let mix = |from: f32, to: f32| from + (to - from) * t;
    Color::srgb(
        mix(DRAINED_COLOR.0, CHARGED_COLOR.0),
        mix(DRAINED_COLOR.1, CHARGED_COLOR.1),
        mix(DRAINED_COLOR.2, CHARGED_COLOR.2),
    )
}

pub(crate) fn update_dash_cooldown_bar(
    player_query: Query<&PlayerController, With<Player>>,
    mut meter_query: Query<&mut Visibility, With<DashMeter>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<DashMeterFill>>,
) {
    let Ok(controller) = player_query.single() else {
        return;
    };

    let visible = controller.dash_cooldown_visible();
    for mut visibility in &mut meter_query {
        visibility.set_if_neq(if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }

    let ratio = controller.dash_cooldown_ratio();
    for (mut node, mut background) in &mut fill_query {
        node.width = Val::Percent(ratio * 100.0);
        background.0 = recharge_color(ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recharge_color_runs_from_drained_to_charged() {
        let (r, g, b) = DRAINED_COLOR;
        assert_eq!(recharge_color(0.0), Color::srgb(r, g, b));
        let (r, g, b) = CHARGED_COLOR;
        assert_eq!(recharge_color(1.0), Color::srgb(r, g, b));
        // Out-of-range ratios saturate
        assert_eq!(recharge_color(3.0), recharge_color(1.0));
        assert_eq!(recharge_color(-1.0), recharge_color(0.0));
    }
}
