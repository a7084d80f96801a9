/// Translates game state into draw requests.
///
/// The core never draws anything itself.  `draw_list` produces an ordered
/// list of primitives in field coordinates, and a front-end (the terminal
/// `display` module in the binary) paints them.  No game logic here.

use crate::entities::{EnemyKind, EntireGameStateInfo, Layer, Rect};

// ── Draw primitives ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Projectile,
    Gear,
    Enemy(EnemyKind),
    /// Background artwork, by layer id (1..=4).
    Layer(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Yellow,
    Black,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// One animation cell of a sprite sheet, rotated by `angle` radians
    /// around the centre of `rect`.
    Sprite {
        sprite: Sprite,
        frame_x: u32,
        frame_y: u32,
        rect: Rect,
        angle: f32,
    },
    Rect {
        rect: Rect,
        tint: Tint,
        filled: bool,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        tint: Tint,
        align: TextAlign,
    },
}

// ── HUD layout ───────────────────────────────────────────────────────────────

const HUD_FONT: f32 = 25.0;
const BANNER_FONT: f32 = 70.0;
const DEBUG_FONT: f32 = 20.0;
const HUD_LEFT: f32 = 20.0;
const AMMO_BAR_TOP: f32 = 50.0;
const AMMO_BAR_STEP: f32 = 5.0;
const AMMO_BAR_SIZE: (f32, f32) = (3.0, 20.0);

// ── Public entry point ───────────────────────────────────────────────────────

/// Every primitive for one frame, back to front.
pub fn draw_list(state: &EntireGameStateInfo) -> Vec<DrawCommand> {
    let mut out = Vec::new();

    for layer in &state.background.layers {
        draw_layer(&mut out, layer, state.config.height);
    }
    draw_player(&mut out, state);
    draw_hud(&mut out, state);
    draw_enemies(&mut out, state);
    for p in &state.particles {
        out.push(DrawCommand::Sprite {
            sprite: Sprite::Gear,
            frame_x: p.frame_x,
            frame_y: p.frame_y,
            rect: Rect::new(p.x - p.size * 0.5, p.y - p.size * 0.5, p.size, p.size),
            angle: p.angle,
        });
    }
    draw_layer(&mut out, &state.background.foreground, state.config.height);

    out
}

/// Seamless tiling: each layer is painted twice, side by side.
fn draw_layer(out: &mut Vec<DrawCommand>, layer: &Layer, height: f32) {
    for x in [layer.x, layer.x + layer.width] {
        out.push(DrawCommand::Sprite {
            sprite: Sprite::Layer(layer.id),
            frame_x: 0,
            frame_y: 0,
            rect: Rect::new(x, 0.0, layer.width, height),
            angle: 0.0,
        });
    }
}

fn draw_player(out: &mut Vec<DrawCommand>, state: &EntireGameStateInfo) {
    let p = &state.player;
    let rect = Rect::new(p.x, p.y, p.width, p.height);
    if state.debug {
        out.push(DrawCommand::Rect { rect, tint: Tint::Black, filled: false });
    }
    out.push(DrawCommand::Sprite {
        sprite: Sprite::Player,
        frame_x: p.frame_x,
        frame_y: p.frame_y,
        rect,
        angle: 0.0,
    });

    for proj in &p.projectiles {
        let rect = Rect::new(proj.x, proj.y, proj.width, proj.height);
        if state.debug {
            out.push(DrawCommand::Rect { rect, tint: Tint::Yellow, filled: false });
        }
        out.push(DrawCommand::Sprite {
            sprite: Sprite::Projectile,
            frame_x: 0,
            frame_y: 0,
            rect,
            angle: 0.0,
        });
    }
}

fn draw_hud(out: &mut Vec<DrawCommand>, state: &EntireGameStateInfo) {
    out.push(text(state.score.to_string(), HUD_LEFT, 40.0, HUD_FONT, TextAlign::Left));

    let (w, h) = AMMO_BAR_SIZE;
    for i in 0..state.player.ammo {
        out.push(DrawCommand::Rect {
            rect: Rect::new(HUD_LEFT + AMMO_BAR_STEP * i as f32, AMMO_BAR_TOP, w, h),
            tint: Tint::Yellow,
            filled: true,
        });
    }

    out.push(text(
        format!("Time left: {}", state.time_left_secs()),
        HUD_LEFT,
        100.0,
        HUD_FONT,
        TextAlign::Left,
    ));

    if state.is_game_over() {
        let (headline, subline) = game_over_message(state);
        let cx = state.config.width * 0.5;
        let cy = state.config.height * 0.5;
        out.push(text(headline.to_string(), cx, cy - 20.0, BANNER_FONT, TextAlign::Center));
        out.push(text(subline.to_string(), cx, cy + 20.0, HUD_FONT, TextAlign::Center));
    }
}

fn draw_enemies(out: &mut Vec<DrawCommand>, state: &EntireGameStateInfo) {
    for e in &state.enemies {
        let rect = Rect::new(e.x, e.y, e.width, e.height);
        if state.debug {
            out.push(DrawCommand::Rect { rect, tint: Tint::Red, filled: false });
            out.push(DrawCommand::Text {
                text: e.lives.to_string(),
                x: e.x,
                y: e.y,
                size: DEBUG_FONT,
                tint: Tint::Black,
                align: TextAlign::Left,
            });
        }
        out.push(DrawCommand::Sprite {
            sprite: Sprite::Enemy(e.kind),
            frame_x: e.frame_x,
            frame_y: e.frame_y,
            rect,
            angle: 0.0,
        });
    }
}

/// Headline and subline shown once the session is over.
pub fn game_over_message(state: &EntireGameStateInfo) -> (&'static str, &'static str) {
    if state.has_won() {
        ("Most Wondrous!", "Well done explorer!")
    } else {
        ("Blazes!", "Get my repair kit and try again")
    }
}

fn text(text: String, x: f32, y: f32, size: f32, align: TextAlign) -> DrawCommand {
    DrawCommand::Text { text, x, y, size, tint: Tint::Yellow, align }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::init_state;
    use crate::config::GameConfig;
    use crate::entities::{Enemy, GameStatus};

    fn texts(cmds: &[DrawCommand]) -> Vec<String> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn lucky_at(x: f32, y: f32) -> Enemy {
        Enemy {
            kind: EnemyKind::LuckyFish,
            x,
            y,
            width: 99.0,
            height: 95.0,
            speed_x: -1.0,
            lives: 3,
            score: 15,
            frame_x: 0,
            frame_y: 0,
            marked_for_deletion: false,
        }
    }

    #[test]
    fn one_ammo_bar_per_round() {
        let mut s = init_state(GameConfig::default());
        s.player.ammo = 7;
        let bars = draw_list(&s)
            .into_iter()
            .filter(|c| matches!(c, DrawCommand::Rect { filled: true, .. }))
            .count();
        assert_eq!(bars, 7);
    }

    #[test]
    fn hud_shows_score_and_time() {
        let mut s = init_state(GameConfig::default());
        s.score = -3;
        s.game_time = 1500.0;
        let t = texts(&draw_list(&s));
        assert!(t.contains(&"-3".to_string()));
        assert!(t.contains(&"Time left: 24".to_string()));
    }

    #[test]
    fn game_over_banner_reflects_outcome() {
        let mut s = init_state(GameConfig::default());
        s.status = GameStatus::GameOver;
        s.score = 10;
        assert!(texts(&draw_list(&s)).contains(&"Most Wondrous!".to_string()));
        s.score = 4;
        assert!(texts(&draw_list(&s)).contains(&"Blazes!".to_string()));
    }

    #[test]
    fn debug_adds_hitboxes_and_lives() {
        let mut s = init_state(GameConfig::default());
        s.enemies.push(lucky_at(600.0, 100.0));
        let plain = draw_list(&s);
        s.debug = true;
        let debug = draw_list(&s);
        // player box + enemy box + enemy lives label
        assert_eq!(debug.len(), plain.len() + 3);
        assert!(texts(&debug).contains(&"3".to_string()));
    }

    #[test]
    fn foreground_is_drawn_last() {
        let s = init_state(GameConfig::default());
        let cmds = draw_list(&s);
        assert!(matches!(
            cmds.last(),
            Some(DrawCommand::Sprite { sprite: Sprite::Layer(4), .. })
        ));
        assert!(matches!(
            cmds.first(),
            Some(DrawCommand::Sprite { sprite: Sprite::Layer(1), .. })
        ));
    }
}
