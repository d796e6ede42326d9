//! Hover tooltip following the pointer

use bevy::prelude::*;

/// Pixel offset of the tooltip from the cursor
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, 10.0);
pub const TOOLTIP_FONT_SIZE: f32 = 14.0;

/// What the tooltip should show, in window coordinates
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct HoverLabel {
    pub text: Option<String>,
    pub position: Vec2,
}

impl HoverLabel {
    pub fn show(&mut self, name: &str, cursor: Vec2) {
        self.text = Some(name.to_owned());
        self.position = cursor + TOOLTIP_OFFSET;
    }

    pub fn hide(&mut self) {
        self.text = None;
    }

    /// Show the hit body's name at the cursor, or hide on a miss
    pub fn update(&mut self, hit: Option<&str>, cursor: Vec2) {
        match hit {
            Some(name) => self.show(name, cursor),
            None => self.hide(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }
}

#[derive(Component)]
pub struct Tooltip;

#[derive(Component)]
pub struct TooltipText;

pub fn spawn_tooltip(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                display: Display::None,
                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GlobalZIndex(10),
            Tooltip,
            Name::new("Tooltip"),
        ))
        .with_child((
            Text::new(""),
            TextFont {
                font_size: TOOLTIP_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            TooltipText,
        ));
}

/// Mirror the hover label onto the tooltip node
pub fn sync_tooltip(
    label: Res<HoverLabel>,
    mut tooltips: Query<&mut Node, With<Tooltip>>,
    mut texts: Query<&mut Text, With<TooltipText>>,
) {
    if !label.is_changed() {
        return;
    }

    for mut node in &mut tooltips {
        match &label.text {
            Some(_) => {
                node.display = Display::Flex;
                node.left = Val::Px(label.position.x);
                node.top = Val::Px(label.position.y);
            }
            None => node.display = Display::None,
        }
    }

    if let Some(name) = &label.text {
        for mut text in &mut texts {
            if text.0 != *name {
                text.0.clone_from(name);
            }
        }
    }
}
