// End-to-end: build a heart, replay it through the player, and run the NO-button gag.

use heartbeat::evasion::{self, MIN_SCALE, PADDING};
use heartbeat::{
    EvasionState, FrameBuffer, HeartShape, Player, Point, Rect, Surface, frame_index,
    handle_pointer_move, place_initial,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

#[test]
fn heart_for_800x600_with_five_frames() {
    let mut rng = StdRng::seed_from_u64(800_600);
    let shape = HeartShape::build(800.0, 600.0, 5, &mut rng).expect("build");

    assert_eq!(shape.frames().len(), 5);
    assert_eq!(shape.center(), Point::new(400.0, 300.0));
    assert_eq!(shape.center_diffusion_points().len(), 4000);
    assert_eq!(shape.edge_diffusion_points().len(), 3 * shape.base_points().len());

    let keys: HashSet<_> = shape.base_points().iter().map(|p| p.dedup_key()).collect();
    assert_eq!(keys.len(), shape.base_points().len());

    // Outward force excursions stay well inside a generous margin.
    for frame in shape.frames() {
        assert!(!frame.is_empty());
        for p in frame {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!((-200.0..=1000.0).contains(&p.x), "x {}", p.x);
            assert!((-200.0..=800.0).contains(&p.y), "y {}", p.y);
            assert!((1..=3).contains(&p.size));
        }
    }
}

#[test]
fn same_seed_same_heart() {
    let a = HeartShape::build(400.0, 300.0, 2, &mut StdRng::seed_from_u64(5)).expect("a");
    let b = HeartShape::build(400.0, 300.0, 2, &mut StdRng::seed_from_u64(5)).expect("b");
    assert_eq!(a.base_points(), b.base_points());
    assert_eq!(a.frames(), b.frames());
}

#[test]
fn player_paints_into_a_framebuffer_and_loops() {
    let mut rng = StdRng::seed_from_u64(1);
    let shape = HeartShape::build(400.0, 300.0, 20, &mut rng).expect("build");
    let mut player = Player::new();
    let handle = player.start(shape, 0.0).expect("start");

    let mut fb = FrameBuffer::new(400, 300);
    assert!(player.tick(1000.0, &mut fb));
    let lit = fb.pixels.iter().filter(|&&p| p != 0).count();
    assert!(lit > 1000, "only {lit} pixels lit");

    // 2.5 s is frame 20, which wraps to frame 0.
    assert_eq!(frame_index(1000.0, 20), Some(8));
    assert_eq!(frame_index(2500.0, 20), Some(0));

    assert!(player.stop(handle));
    fb.clear();
    assert!(!player.tick(3000.0, &mut fb));
    assert!(fb.pixels.iter().all(|&p| p == 0));
}

#[test]
fn no_button_keeps_running_and_shrinking() {
    let container = Rect::new(0.0, 0.0, 640.0, 480.0);
    let base = (110.0, 44.0);
    let mut rng = StdRng::seed_from_u64(14);

    let element = Rect::new(0.0, 0.0, base.0, base.1);
    let mut state = EvasionState { position: place_initial(&container, &element), scale: 1.0 };

    for _ in 0..30 {
        let element = Rect::new(0.0, 0.0, base.0 * state.scale, base.1 * state.scale);
        let center = Point::new(
            state.position.x + element.width / 2.0,
            state.position.y + element.height / 2.0,
        );
        // Chase the center: always within reach, so it always hops.
        let next = handle_pointer_move(center, &container, &element, &state, &mut rng);
        assert!(next.scale <= state.scale && next.scale >= MIN_SCALE);
        assert!(next.position.x >= PADDING);
        assert!(next.position.x <= container.width - element.width - PADDING);
        assert!(next.position.y >= PADDING);
        assert!(next.position.y <= container.height - element.height - PADDING);
        state = next;
    }
    assert_eq!(state.scale, MIN_SCALE);
}

#[test]
fn cramped_container_pins_the_button_to_padding() {
    let container = Rect::new(0.0, 0.0, 60.0, 30.0);
    let element = Rect::new(0.0, 0.0, 110.0, 44.0);
    let mut rng = StdRng::seed_from_u64(3);
    let state = EvasionState { position: place_initial(&container, &element), scale: 1.0 };
    let next = evasion::evade(&state, &container, &element, &mut rng);
    assert_eq!(next.position, Point::new(PADDING, PADDING));
}
