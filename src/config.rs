/// Gameplay tuning and field dimensions.
///
/// `GameConfig::default()` reproduces the stock game.  The binary can
/// override any subset of it from a JSON file; missing keys keep their
/// defaults.

use serde::{Deserialize, Serialize};

use crate::entities::EnemyKind;

/// Last animation column in every sprite sheet; frame counters wrap after it.
pub const MAX_ANIMATION_FRAME: u32 = 37;

/// Enemies start one column past the last frame so their first update wraps to 0.
pub const ENEMY_START_FRAME: u32 = 38;

/// Number of Drones a HiveWhale releases when shot down.
pub const HIVE_WHALE_DRONES: usize = 3;

/// Projectiles are removed once they pass this share of the field width.
pub const PROJECTILE_RANGE_RATIO: f32 = 0.8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    /// Horizontal scroll rate, subtracted from every enemy's own velocity.
    pub scroll_speed: f32,
    /// Milliseconds between spawn ticks.
    pub enemy_interval: f32,
    pub winning_score: i32,
    /// Session length in milliseconds.
    pub time_limit: f32,
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub particle: ParticleTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 500.0,
            scroll_speed: 2.0,
            enemy_interval: 1000.0,
            winning_score: 10,
            time_limit: 25000.0,
            player: PlayerTuning::default(),
            projectile: ProjectileTuning::default(),
            particle: ParticleTuning::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
    pub start_y: f32,
    /// Vertical speed in field units per frame.
    pub max_speed: f32,
    pub max_ammo: u32,
    /// Milliseconds per regenerated round.
    pub ammo_interval: f32,
    /// Power-up duration in milliseconds.
    pub power_up_limit: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 190.0,
            start_x: 20.0,
            start_y: 100.0,
            max_speed: 2.0,
            max_ammo: 20,
            ammo_interval: 500.0,
            power_up_limit: 10000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Muzzle offsets relative to the player's top-left corner.
    pub muzzle_x: f32,
    pub top_muzzle_y: f32,
    pub bottom_muzzle_y: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 3.0,
            speed: 3.0,
            muzzle_x: 70.0,
            top_muzzle_y: 30.0,
            bottom_muzzle_y: 175.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    pub gravity: f32,
    /// Bounce floor as a share of the field height.
    pub floor_ratio: f32,
    /// Velocity kept (and reversed) on each bounce.
    pub bounce_damping: f32,
    /// A bounce slower than this removes the particle.
    pub settle_speed: f32,
    pub sprite_size: f32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            floor_ratio: 0.8,
            bounce_damping: 0.5,
            settle_speed: 5.0,
            sprite_size: 50.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

// ── Enemy variant table ──────────────────────────────────────────────────────

/// Fixed per-variant stats.  Variants differ only in these numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyStats {
    pub lives: i32,
    pub score: i32,
    pub width: f32,
    pub height: f32,
    /// Share of the field height usable for the spawn row, before subtracting
    /// the enemy's own height.
    pub spawn_margin: f32,
    /// `speed_x` is drawn uniformly from `-(min_speed + spread) ..= -min_speed`.
    pub min_speed: f32,
    pub speed_spread: f32,
    /// Sprite sheet rows to pick the animation row from.
    pub sprite_rows: u32,
}

pub fn enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Angler1 => EnemyStats {
            lives: 2,
            score: 2,
            width: 228.0,
            height: 169.0,
            spawn_margin: 0.9,
            min_speed: 0.5,
            speed_spread: 1.5,
            sprite_rows: 3,
        },
        EnemyKind::Angler2 => EnemyStats {
            lives: 3,
            score: 3,
            width: 213.0,
            height: 165.0,
            spawn_margin: 0.9,
            min_speed: 0.5,
            speed_spread: 1.5,
            sprite_rows: 2,
        },
        EnemyKind::LuckyFish => EnemyStats {
            lives: 3,
            score: 15,
            width: 99.0,
            height: 95.0,
            spawn_margin: 0.9,
            min_speed: 0.5,
            speed_spread: 1.5,
            sprite_rows: 2,
        },
        EnemyKind::HiveWhale => EnemyStats {
            lives: 15,
            score: 15,
            width: 400.0,
            height: 227.0,
            spawn_margin: 0.95,
            min_speed: 0.2,
            speed_spread: 1.2,
            sprite_rows: 1,
        },
        EnemyKind::Drone => EnemyStats {
            lives: 3,
            score: 3,
            width: 115.0,
            height: 95.0,
            spawn_margin: 1.0,
            min_speed: 0.5,
            speed_spread: 4.2,
            sprite_rows: 2,
        },
    }
}
