/// The simulation engine.
///
/// Every public function takes an immutable reference to the current
/// `EntireGameStateInfo` (and, where needed, an RNG handle) and returns a
/// brand-new `EntireGameStateInfo`.  Side effects are limited to the injected
/// RNG, so a seeded RNG makes a run fully reproducible.

use log::{debug, info};
use rand::Rng;

use crate::collision::collides;
use crate::config::{GameConfig, ParticleTuning};
use crate::enemy::spawn_enemy;
use crate::entities::{
    Attacker, Background, Enemy, EntireGameStateInfo, GameStatus, Particle, Player,
};
use crate::particle::update_particles;

// ── Frame inputs & shared context ────────────────────────────────────────────

/// Input polled once at the start of a frame.
///
/// `up`/`down` are held states; `fire` and `toggle_debug` are edges that
/// fire once for the frame in which the key went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub toggle_debug: bool,
}

/// Read-only view of engine-wide values that entity updates need.
#[derive(Debug, Clone, Copy)]
pub struct SimContext {
    pub field_width: f32,
    pub field_height: f32,
    pub scroll_speed: f32,
    pub particle: ParticleTuning,
}

impl SimContext {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            field_width: config.width,
            field_height: config.height,
            scroll_speed: config.scroll_speed,
            particle: config.particle,
        }
    }
}

/// Entities created while iterating this frame.  Merged into the state only
/// after every existing entity has been processed, so new arrivals are first
/// updated on the next frame.
#[derive(Debug, Default)]
pub struct Spawns {
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial state for a session.
pub fn init_state(config: GameConfig) -> EntireGameStateInfo {
    EntireGameStateInfo {
        player: Player::new(&config),
        enemies: Vec::new(),
        particles: Vec::new(),
        background: Background::default(),
        score: 0,
        game_time: 0.0,
        enemy_timer: 0.0,
        status: GameStatus::Playing,
        debug: false,
        frame: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

pub fn player_shoot(state: &EntireGameStateInfo) -> EntireGameStateInfo {
    let mut next = state.clone();
    next.player.shoot(&next.config);
    next
}

pub fn toggle_debug(state: &EntireGameStateInfo) -> EntireGameStateInfo {
    EntireGameStateInfo {
        debug: !state.debug,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure; RNG is injected) ────────────────────────────

/// Advance the simulation by one frame of `delta_time` milliseconds.
pub fn tick(
    state: &EntireGameStateInfo,
    input: &FrameInput,
    delta_time: f32,
    rng: &mut impl Rng,
) -> EntireGameStateInfo {
    let mut next = state.clone();
    let ctx = SimContext::from_config(&next.config);

    // ── 0. Edge-triggered input ──────────────────────────────────────────────
    if input.toggle_debug {
        next.debug = !next.debug;
    }
    if input.fire {
        next.player.shoot(&next.config);
    }

    // ── 1. Clock ─────────────────────────────────────────────────────────────
    if !next.is_game_over() {
        next.game_time += delta_time;
        if next.game_time > next.config.time_limit {
            end_game(&mut next, "time limit reached");
        }
    }

    // ── 2. Player ────────────────────────────────────────────────────────────
    next.player.update(input, delta_time, &ctx);

    // ── 3. Enemies: motion, body contact, projectile hits ────────────────────
    let mut spawns = Spawns::default();
    resolve_enemies(&mut next, &ctx, rng, &mut spawns);

    // ── 4. Particles ─────────────────────────────────────────────────────────
    update_particles(&mut next.particles, &ctx);

    // ── 5. Compact enemies, then merge this frame's spawns ───────────────────
    next.enemies.retain(|e| !e.marked_for_deletion);
    next.enemies.append(&mut spawns.enemies);
    next.particles.append(&mut spawns.particles);

    // ── 6. Spawn tick ────────────────────────────────────────────────────────
    if next.enemy_timer > next.config.enemy_interval && !next.is_game_over() {
        let enemy = spawn_enemy(&next.config, rng);
        next.enemies.push(enemy);
        next.enemy_timer = 0.0;
    } else {
        next.enemy_timer += delta_time;
    }

    // ── 7. Background ────────────────────────────────────────────────────────
    next.background.update(next.config.scroll_speed);

    next.frame += 1;
    next
}

/// Step 3 of `tick`.  Each enemy is moved, tested against the player's
/// body, then against every live projectile in order.
///
/// An enemy that is already marked for deletion takes no further damage,
/// so its score is credited exactly once, on the hit that kills it, and
/// later overlapping projectiles fly on.  A projectile spent on one enemy
/// still damages any later enemy it overlaps in the same frame.
fn resolve_enemies(
    state: &mut EntireGameStateInfo,
    ctx: &SimContext,
    rng: &mut impl Rng,
    spawns: &mut Spawns,
) {
    for enemy in state.enemies.iter_mut() {
        enemy.update(ctx);

        if !enemy.marked_for_deletion && collides(&state.player, &*enemy) {
            if enemy.kind.is_lucky() {
                state.player.enter_power_up();
            } else if state.status == GameStatus::Playing {
                state.score -= 1;
            }
            enemy.process_damage(Attacker::Player, ctx, rng, spawns);
        }

        for projectile in state.player.projectiles.iter_mut() {
            if enemy.marked_for_deletion {
                break;
            }
            if !collides(&*projectile, &*enemy) {
                continue;
            }
            enemy.process_damage(Attacker::Projectile, ctx, rng, spawns);
            projectile.marked_for_deletion = true;

            if enemy.is_dead() && state.status == GameStatus::Playing {
                state.score += enemy.score;
                debug!("{:?} destroyed, score {}", enemy.kind, state.score);
                if state.score >= state.config.winning_score {
                    state.status = GameStatus::GameOver;
                    info!("game over: winning score {} reached", state.score);
                }
            }
        }
    }
}

fn end_game(state: &mut EntireGameStateInfo, reason: &str) {
    state.status = GameStatus::GameOver;
    info!("game over: {} (score {})", reason, state.score);
}
