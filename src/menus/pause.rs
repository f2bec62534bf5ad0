//! The pause menu.

use bevy::prelude::*;

use crate::{
    menus::Menu,
    theme::palette::{HEADER_TEXT, LABEL_TEXT, OVERLAY_BACKGROUND},
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Pause), spawn_pause_menu);
}

fn spawn_pause_menu(mut commands: Commands) {
    commands.spawn((
        Name::new("Pause Menu"),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(10.0),
            ..default()
        },
        // Semi-transparent background to hide game
        BackgroundColor(OVERLAY_BACKGROUND),
        GlobalZIndex(2),
        DespawnOnExit(Menu::Pause),
        children![
            (
                Name::new("Pause Header"),
                Text("Game Paused".to_string()),
                TextFont::from_font_size(48.0),
                TextColor(HEADER_TEXT),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ),
            (
                Name::new("Resume Hint"),
                Text("Press Esc to resume".to_string()),
                TextFont::from_font_size(24.0),
                TextColor(LABEL_TEXT),
            ),
        ],
    ));
}
