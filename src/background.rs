/// Parallax scroll layers.
///
/// Nothing in gameplay reads layer positions.

use crate::entities::{Background, Layer};

/// Width of one tile of layer artwork; each layer is drawn twice side by side.
pub const LAYER_WIDTH: f32 = 1768.0;

impl Layer {
    pub fn new(id: u8, speed_modifier: f32) -> Self {
        Self {
            id,
            x: 0.0,
            width: LAYER_WIDTH,
            speed_modifier,
        }
    }

    /// Scroll left, snapping back to 0 once a full tile has passed.
    pub fn update(&mut self, scroll_speed: f32) {
        if self.x <= -self.width {
            self.x = 0.0;
        } else {
            self.x -= scroll_speed * self.speed_modifier;
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self {
            layers: vec![Layer::new(1, 0.3), Layer::new(2, 0.4), Layer::new(3, 1.0)],
            foreground: Layer::new(4, 1.3),
        }
    }
}

impl Background {
    pub fn update(&mut self, scroll_speed: f32) {
        for layer in &mut self.layers {
            layer.update(scroll_speed);
        }
        self.foreground.update(scroll_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_scroll_by_modifier() {
        let mut bg = Background::default();
        bg.update(2.0);
        assert!((bg.layers[0].x + 0.6).abs() < 1e-6);
        assert!((bg.layers[1].x + 0.8).abs() < 1e-6);
        assert!((bg.layers[2].x + 2.0).abs() < 1e-6);
        assert!((bg.foreground.x + 2.6).abs() < 1e-6);
    }

    #[test]
    fn layer_wraps_after_full_tile() {
        let mut layer = Layer::new(3, 1.0);
        layer.x = -LAYER_WIDTH;
        layer.update(2.0);
        assert_eq!(layer.x, 0.0);
    }

    #[test]
    fn layer_stays_within_one_tile() {
        let mut layer = Layer::new(4, 1.3);
        for _ in 0..5000 {
            layer.update(2.0);
            assert!(layer.x > -LAYER_WIDTH - 2.6 && layer.x <= 0.0);
        }
    }
}
