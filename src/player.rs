/// Player ship: movement, ammo regeneration, power-up timer and shooting.

use log::info;

use crate::compute::{FrameInput, SimContext};
use crate::config::{GameConfig, MAX_ANIMATION_FRAME};
use crate::entities::{Player, Projectile};

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let t = &config.player;
        Self {
            x: t.start_x,
            y: t.start_y,
            width: t.width,
            height: t.height,
            speed_y: 0.0,
            max_speed: t.max_speed,
            ammo: t.max_ammo,
            max_ammo: t.max_ammo,
            ammo_timer: 0.0,
            ammo_interval: t.ammo_interval,
            power_up: false,
            power_up_timer: 0.0,
            power_up_limit: t.power_up_limit,
            frame_x: 0,
            frame_y: 0,
            projectiles: Vec::new(),
        }
    }

    /// Advance one frame.  `delta_time` is in milliseconds.
    pub fn update(&mut self, input: &FrameInput, delta_time: f32, ctx: &SimContext) {
        // ── Movement ─────────────────────────────────────────────────────────
        // Half the sprite may leave the field at either edge.
        self.speed_y = if input.up {
            if self.y > -self.height * 0.5 {
                -self.max_speed
            } else {
                0.0
            }
        } else if input.down {
            if self.y < ctx.field_height - self.height * 0.5 {
                self.max_speed
            } else {
                0.0
            }
        } else {
            0.0
        };
        self.y += self.speed_y;

        // ── Projectiles ──────────────────────────────────────────────────────
        for projectile in &mut self.projectiles {
            projectile.update(ctx);
        }
        self.projectiles.retain(|p| !p.marked_for_deletion);

        // ── Ammo ─────────────────────────────────────────────────────────────
        // Time past the interval is thrown away on each regen tick.
        if self.ammo_timer > self.ammo_interval {
            if self.ammo < self.max_ammo {
                self.ammo += 1;
            }
            self.ammo_timer = 0.0;
        } else {
            self.ammo_timer += delta_time;
        }

        // ── Animation & power-up ─────────────────────────────────────────────
        self.frame_x = if self.frame_x < MAX_ANIMATION_FRAME {
            self.frame_x + 1
        } else {
            0
        };

        if self.power_up {
            if self.power_up_timer > self.power_up_limit {
                self.power_up = false;
                self.power_up_timer = 0.0;
                self.frame_y = 0;
                info!("power-up expired");
            } else {
                self.power_up_timer += delta_time;
                self.frame_y = 1;
            }
        }
    }

    /// Fire from the top muzzle (costs one round) and, while powered up,
    /// also from the bottom muzzle for free.  Does nothing when out of ammo.
    pub fn shoot(&mut self, config: &GameConfig) {
        if self.ammo == 0 {
            return;
        }
        let t = &config.projectile;
        self.projectiles
            .push(Projectile::new(t, self.x + t.muzzle_x, self.y + t.top_muzzle_y));
        self.ammo -= 1;

        if self.power_up {
            self.projectiles
                .push(Projectile::new(t, self.x + t.muzzle_x, self.y + t.bottom_muzzle_y));
        }
    }

    pub fn enter_power_up(&mut self) {
        self.power_up = true;
        self.power_up_timer = 0.0;
        self.frame_y = 2;
        self.ammo = self.max_ammo;
        info!("power-up collected");
    }
}
