use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn planner() -> TrajectoryPlanner {
    TrajectoryPlanner::new(
        Canvas {
            width: 128,
            height: 128,
        },
        10,
        5.3,
    )
}

fn speed(t: &Trajectory) -> f64 {
    (t.velocity_x * t.velocity_x + t.velocity_y * t.velocity_y).sqrt()
}

#[test]
fn straight_down_path_has_pure_y_velocity() {
    let t = planner().plan(Direction::TopToBottom, 40.0, 40.0);
    assert_eq!((t.origin_x, t.origin_y), (40.0, 10.0));
    assert!(t.velocity_x.abs() < 1e-12);
    assert!((t.velocity_y - 5.3).abs() < 1e-12);
}

#[test]
fn each_direction_starts_on_its_entry_edge() {
    let p = planner();
    let up = p.plan(Direction::BottomToTop, 30.0, 60.0);
    assert_eq!(up.origin_y, 117.0);
    assert!(up.velocity_y < 0.0);

    let right = p.plan(Direction::LeftToRight, 30.0, 60.0);
    assert_eq!(right.origin_x, 10.0);
    assert!(right.velocity_x > 0.0);

    let left = p.plan(Direction::RightToLeft, 30.0, 60.0);
    assert_eq!(left.origin_x, 117.0);
    assert!(left.velocity_x < 0.0);
}

#[test]
fn velocity_magnitude_is_the_configured_speed() {
    let p = planner();
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..200 {
        let t = p.sample(&mut rng);
        assert!((speed(&t) - 5.3).abs() < 1e-9);
    }
}

#[test]
fn sampled_origins_respect_margin() {
    let p = planner();
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..500 {
        let t = p.sample(&mut rng);
        for v in [t.origin_x, t.origin_y] {
            assert!((10.0..=117.0).contains(&v), "origin {v} outside interior");
            assert_eq!(v.fract(), 0.0);
        }
    }
}

#[test]
fn position_advances_linearly() {
    let t = planner().plan(Direction::LeftToRight, 50.0, 50.0);
    assert_eq!(t.position(0), (10.0, 50.0));
    let (x, y) = t.position(4);
    assert!((x - (10.0 + 4.0 * 5.3)).abs() < 1e-9);
    assert!((y - 50.0).abs() < 1e-9);
}
