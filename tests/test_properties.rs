use angler_raid::collision::check_collision;
use angler_raid::compute::{init_state, tick, FrameInput, SimContext};
use angler_raid::config::{GameConfig, PROJECTILE_RANGE_RATIO};
use angler_raid::enemy::kind_for_roll;
use angler_raid::entities::{EnemyKind, Projectile, Rect};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn frame_input() -> impl Strategy<Value = (FrameInput, f32)> {
    (any::<bool>(), any::<bool>(), any::<bool>(), 0.0f32..2000.0).prop_map(
        |(up, down, fire, dt)| (FrameInput { up, down, fire, toggle_debug: false }, dt),
    )
}

fn rect() -> impl Strategy<Value = Rect> {
    (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..300.0, 0.0f32..300.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn ammo_stays_within_bounds(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame_input(), 1..200),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(GameConfig::default());
        for (input, dt) in &frames {
            s = tick(&s, input, *dt, &mut rng);
            prop_assert!(s.player.ammo <= s.player.max_ammo);
        }
    }

    #[test]
    fn dry_fire_never_creates_projectiles(
        seed in any::<u64>(),
        shots in 1usize..50,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(GameConfig::default());
        s.player.ammo = 0;
        s.player.ammo_timer = 0.0;
        let fire = FrameInput { fire: true, ..Default::default() };
        for _ in 0..shots {
            // zero delta keeps the regen timer from ever firing
            s = tick(&s, &fire, 0.0, &mut rng);
            prop_assert_eq!(s.player.ammo, 0);
            prop_assert!(s.player.projectiles.is_empty());
        }
    }

    #[test]
    fn projectile_moves_right_until_out_of_range(start in 0.0f32..1200.0) {
        let config = GameConfig::default();
        let ctx = SimContext::from_config(&config);
        let mut p = Projectile::new(&config.projectile, start, 0.0);
        let limit = config.width * PROJECTILE_RANGE_RATIO;
        while !p.marked_for_deletion {
            let before = p.x;
            p.update(&ctx);
            prop_assert!(p.x >= before);
            prop_assert_eq!(p.marked_for_deletion, p.x > limit);
        }
    }

    #[test]
    fn collision_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(check_collision(&a, &b), check_collision(&b, &a));
    }

    #[test]
    fn spawn_table_never_yields_drones(roll in 0.0f32..1.0) {
        prop_assert_ne!(kind_for_roll(roll), EnemyKind::Drone);
    }

    #[test]
    fn game_over_is_terminal(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame_input(), 1..300),
    ) {
        let mut config = GameConfig::default();
        config.time_limit = 3000.0;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(config);
        let mut ended: Option<(i32, f32)> = None;
        for (input, dt) in &frames {
            s = tick(&s, input, *dt, &mut rng);
            if let Some((score, time)) = ended {
                prop_assert!(s.is_game_over());
                prop_assert_eq!(s.score, score);
                prop_assert_eq!(s.game_time, time);
            } else if s.is_game_over() {
                ended = Some((s.score, s.game_time));
            }
        }
    }
}
