/// Player projectiles.

use crate::compute::SimContext;
use crate::config::{ProjectileTuning, PROJECTILE_RANGE_RATIO};
use crate::entities::Projectile;

impl Projectile {
    pub fn new(tuning: &ProjectileTuning, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: tuning.width,
            height: tuning.height,
            speed: tuning.speed,
            marked_for_deletion: false,
        }
    }

    /// Fly right; expire past 80% of the field width.
    pub fn update(&mut self, ctx: &SimContext) {
        self.x += self.speed;
        if self.x > ctx.field_width * PROJECTILE_RANGE_RATIO {
            self.marked_for_deletion = true;
        }
    }
}
