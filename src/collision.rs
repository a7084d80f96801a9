/// Axis-aligned box overlap.

use crate::entities::{Enemy, Player, Projectile, Rect};

/// Anything that occupies a box on the field.
pub trait Hitbox {
    fn hitbox(&self) -> Rect;
}

impl Hitbox for Player {
    fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Hitbox for Enemy {
    fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Hitbox for Projectile {
    fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// True when the boxes overlap.  All four comparisons are strict, so boxes
/// that only share an edge do not collide.
pub fn check_collision(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// `check_collision` over two hitboxes.
pub fn collides(a: &impl Hitbox, b: &impl Hitbox) -> bool {
    check_collision(&a.hitbox(), &b.hitbox())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(check_collision(&a, &b));
        assert!(check_collision(&b, &a));
    }

    #[test]
    fn contained_box_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 3.0);
        assert!(check_collision(&outer, &inner));
        assert!(check_collision(&inner, &outer));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!check_collision(&a, &right));
        assert!(!check_collision(&a, &below));
    }

    #[test]
    fn separated_boxes_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 0.0, 10.0, 10.0);
        assert!(!check_collision(&a, &b));
    }
}
