/// All game entity types: pure data, no logic.
///
/// Behaviour lives in the sibling modules (`player`, `enemy`, ...), which
/// add inherent impls to these types.

use crate::config::GameConfig;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned box in field coordinates (origin top-left, y grows down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Projectiles & particles ──────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed per frame, always positive.
    pub speed: f32,
    pub marked_for_deletion: bool,
}

/// Decorative gear thrown out of damaged enemies.  `x`/`y` is the centre.
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Drift speed; the particle moves by `-speed_x` each frame.
    pub speed_x: f32,
    pub speed_y: f32,
    pub gravity: f32,
    pub angle: f32,
    /// Angular velocity in radians per frame.
    pub va: f32,
    pub size: f32,
    pub frame_x: u32,
    pub frame_y: u32,
    pub marked_for_deletion: bool,
}

// ── Player & enemy ───────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed_y: f32,
    pub max_speed: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub ammo_timer: f32,
    pub ammo_interval: f32,
    pub power_up: bool,
    pub power_up_timer: f32,
    pub power_up_limit: f32,
    pub frame_x: u32,
    /// 0 = normal, 1 = powered up, 2 = power-up just collected.
    pub frame_y: u32,
    pub projectiles: Vec<Projectile>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Angler1,
    Angler2,
    /// Grants a power-up instead of costing score on body contact.
    LuckyFish,
    /// Releases Drones when shot down.
    HiveWhale,
    /// Only ever spawned by a HiveWhale.
    Drone,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Own horizontal velocity (negative); scroll speed is applied on top.
    pub speed_x: f32,
    pub lives: i32,
    pub score: i32,
    pub frame_x: u32,
    pub frame_y: u32,
    pub marked_for_deletion: bool,
}

/// Who dealt a hit; decides between instant kill and a single point of damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attacker {
    Player,
    Projectile,
}

// ── Background ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Index into the sprite set used by the renderer.
    pub id: u8,
    pub x: f32,
    pub width: f32,
    pub speed_modifier: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    /// Drawn behind every entity, back to front.
    pub layers: Vec<Layer>,
    /// Drawn last, over every entity.
    pub foreground: Layer,
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire simulation state.  Cloneable so `tick` can return a new copy
/// without mutating its input.
#[derive(Clone, Debug)]
pub struct EntireGameStateInfo {
    pub config: GameConfig,
    pub player: Player,
    /// Insertion (spawn) order is preserved.
    pub enemies: Vec<Enemy>,
    /// Creation order is preserved.
    pub particles: Vec<Particle>,
    pub background: Background,
    /// Goes negative when the player rams too many enemies.
    pub score: i32,
    /// Milliseconds played.
    pub game_time: f32,
    /// Milliseconds since the last spawn tick.
    pub enemy_timer: f32,
    pub status: GameStatus,
    pub debug: bool,
    pub frame: u64,
}

impl EntireGameStateInfo {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Seconds left on the clock, rounded up, as shown on the HUD.
    pub fn time_left_secs(&self) -> i32 {
        ((self.config.time_limit - self.game_time) * 0.001).ceil() as i32
    }

    pub fn has_won(&self) -> bool {
        self.score >= self.config.winning_score
    }
}
