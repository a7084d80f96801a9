/// Enemy variants, their damage/destruction protocol and the spawn table.
///
/// Every variant shares one data layout (`Enemy`); the per-variant numbers
/// come from `config::enemy_stats`, and the only behavioural difference
/// (HiveWhale releasing Drones) is a branch in `process_deletion`.

use log::debug;
use rand::Rng;

use crate::compute::{SimContext, Spawns};
use crate::config::{
    enemy_stats, GameConfig, ENEMY_START_FRAME, HIVE_WHALE_DRONES, MAX_ANIMATION_FRAME,
};
use crate::entities::{Attacker, Enemy, EnemyKind, Particle, Rect};

impl EnemyKind {
    /// The LuckyFish tag: body contact grants a power-up instead of a penalty.
    pub fn is_lucky(self) -> bool {
        self == EnemyKind::LuckyFish
    }
}

impl Enemy {
    /// Build `kind` at (`x`, `y`) with a random speed and sprite row.
    pub fn at(kind: EnemyKind, x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let stats = enemy_stats(kind);
        Self {
            kind,
            x,
            y,
            width: stats.width,
            height: stats.height,
            speed_x: -(rng.gen::<f32>() * stats.speed_spread + stats.min_speed),
            lives: stats.lives,
            score: stats.score,
            frame_x: ENEMY_START_FRAME,
            frame_y: rng.gen_range(0..stats.sprite_rows),
            marked_for_deletion: false,
        }
    }

    /// Build `kind` just past the right edge at a random row.
    pub fn spawn(kind: EnemyKind, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let stats = enemy_stats(kind);
        let span = (config.height * stats.spawn_margin - stats.height).max(0.0);
        let y = rng.gen::<f32>() * span;
        Self::at(kind, config.width, y, rng)
    }

    pub fn update(&mut self, ctx: &SimContext) {
        self.x += self.speed_x - ctx.scroll_speed;
        if self.x + self.width < 0.0 {
            self.marked_for_deletion = true;
        }
        self.frame_x = if self.frame_x < MAX_ANIMATION_FRAME {
            self.frame_x + 1
        } else {
            0
        };
    }

    pub fn is_dead(&self) -> bool {
        self.lives <= 0
    }

    /// Apply one hit.  Body contact kills outright; a projectile costs one
    /// life.  Emits a single spark, or a burst of `score` particles on the
    /// killing hit, and runs the destruction hook once lives reach zero.
    pub fn process_damage(
        &mut self,
        attacker: Attacker,
        ctx: &SimContext,
        rng: &mut impl Rng,
        spawns: &mut Spawns,
    ) {
        match attacker {
            Attacker::Player => self.lives = 0,
            Attacker::Projectile => self.lives -= 1,
        }

        let count = if self.is_dead() { self.score.max(0) as usize } else { 1 };
        let (cx, cy) = Rect::new(self.x, self.y, self.width, self.height).center();
        for _ in 0..count {
            spawns
                .particles
                .push(Particle::new(&ctx.particle, cx, cy, rng));
        }

        if self.is_dead() {
            self.process_deletion(attacker, rng, spawns);
        }
    }

    fn process_deletion(&mut self, attacker: Attacker, rng: &mut impl Rng, spawns: &mut Spawns) {
        self.marked_for_deletion = true;

        if self.kind == EnemyKind::HiveWhale && attacker == Attacker::Projectile {
            for _ in 0..HIVE_WHALE_DRONES {
                let x = self.x + rng.gen::<f32>() * self.width;
                let y = self.y + rng.gen::<f32>() * self.height;
                spawns.enemies.push(Enemy::at(EnemyKind::Drone, x, y, rng));
            }
            debug!("hive whale released {} drones at x={:.0}", HIVE_WHALE_DRONES, self.x);
        }
    }
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Map a uniform roll in [0, 1) onto the spawn table.  Drones never appear here.
pub fn kind_for_roll(roll: f32) -> EnemyKind {
    if roll < 0.3 {
        EnemyKind::Angler1
    } else if roll < 0.6 {
        EnemyKind::Angler2
    } else if roll < 0.8 {
        EnemyKind::HiveWhale
    } else {
        EnemyKind::LuckyFish
    }
}

pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let kind = kind_for_roll(rng.gen::<f32>());
    let enemy = Enemy::spawn(kind, config, rng);
    debug!("spawned {:?} at y={:.0} speed={:.2}", kind, enemy.y, enemy.speed_x);
    enemy
}
