//! Frame description - WHAT to draw, never how
//!
//! `build_frame` walks a `GameState` and emits an ordered list of abstract
//! draw commands. A backend (or a test) interprets them however it likes;
//! nothing here touches pixels, surfaces, or fonts. Sprite commands carry a
//! sprite-set key and a frame index for the asset provider to resolve via
//! `frames[index % count]`.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::moth::MothKind;
use crate::sim::state::GameState;

/// RGB color triple
pub type Color = (u8, u8, u8);

const BACKGROUND: Color = (100, 100, 100);
const MOON: Color = (200, 200, 20);
const ECHO_RED: Color = (255, 0, 0);
const MARKER_YELLOW: Color = (255, 255, 0);
const BLACKOUT_WHITE: Color = (255, 255, 255);
const REDOUT_RED: Color = (200, 0, 0);
const HUD_TEXT: Color = (255, 255, 255);

/// Which sprite set an asset provider should blit from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKey {
    Bat,
    Moth(MothKind),
}

/// One abstract draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Flood the whole frame with a color
    Fill(Color),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Annular arc, angles in radians on the up-screen bearing
    Arc {
        center: Vec2,
        radius: f32,
        min_angle: f32,
        max_angle: f32,
        width: f32,
        color: Color,
    },
    Sprite {
        key: SpriteKey,
        frame: usize,
        pos: Vec2,
        size: Vec2,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Describe one frame of the session in draw order
pub fn build_frame(state: &GameState, settings: &Settings) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(32);

    cmds.push(DrawCmd::Fill(BACKGROUND));
    cmds.push(DrawCmd::Circle {
        center: Vec2::new(PLAY_WIDTH, 20.0),
        radius: 300.0,
        color: MOON,
    });

    if settings.show_scoreboard {
        push_scoreboard(&mut cmds, state);
    }

    for echo in &state.echoes {
        cmds.push(DrawCmd::Arc {
            center: echo.origin,
            radius: echo.radius,
            min_angle: ECHO_MIN_ANGLE,
            max_angle: ECHO_MAX_ANGLE,
            width: ECHO_RING_WIDTH,
            color: ECHO_RED,
        });
    }

    cmds.push(bat_sprite(state));

    for moth in &state.moths {
        if moth.dead {
            // Brief kill marker where the moth went down
            cmds.push(DrawCmd::Circle {
                center: moth.center(),
                radius: 30.0,
                color: MARKER_YELLOW,
            });
        } else if moth.showing {
            cmds.push(DrawCmd::Sprite {
                key: SpriteKey::Moth(moth.kind),
                frame: moth.frame % FRAME_COUNT,
                pos: moth.pos,
                size: Vec2::splat(MOTH_SIZE),
            });
        }
    }

    // Screen effects paint over everything. Blackout keeps the bat visible;
    // redout hides even that. With flashes disabled (reduced motion) the
    // effects still gate gameplay but the full-screen floods are skipped.
    if settings.flash_effects {
        if state.effects.blackout_active() {
            cmds.push(DrawCmd::Fill(BLACKOUT_WHITE));
            cmds.push(bat_sprite(state));
        }
        if state.effects.redout_active() {
            cmds.push(DrawCmd::Fill(REDOUT_RED));
        }
    }

    cmds
}

fn bat_sprite(state: &GameState) -> DrawCmd {
    DrawCmd::Sprite {
        key: SpriteKey::Bat,
        frame: state.bat.frame % FRAME_COUNT,
        pos: state.bat.pos,
        size: Vec2::splat(BAT_SIZE),
    }
}

/// The kill-count / spawn-weight panel in the top-left corner
fn push_scoreboard(cmds: &mut Vec<DrawCmd>, state: &GameState) {
    cmds.push(DrawCmd::Text {
        text: "EATEN  PROB".to_string(),
        pos: Vec2::new(80.0, 5.0),
        size: 30.0,
        color: HUD_TEXT,
    });

    let mut y = 20.0;
    for kind in MothKind::ALL {
        cmds.push(DrawCmd::Sprite {
            key: SpriteKey::Moth(kind),
            frame: 0,
            pos: Vec2::new(20.0, y),
            size: Vec2::splat(50.0),
        });
        cmds.push(DrawCmd::Text {
            text: state.scoreboard.kills(kind).to_string(),
            pos: Vec2::new(110.0, y + 10.0),
            size: 40.0,
            color: HUD_TEXT,
        });
        cmds.push(DrawCmd::Text {
            text: format!("{:.2}", state.scoreboard.prob(kind)),
            pos: Vec2::new(160.0, y + 10.0),
            size: 40.0,
            color: HUD_TEXT,
        });
        y += 50.0;
    }
}
