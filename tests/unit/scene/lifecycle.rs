use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::config::GeneratorConfig;

fn context(birth_prob: f64, appear_interval: u32) -> RunContext {
    let mut cfg = GeneratorConfig::metric();
    cfg.birth_prob = birth_prob;
    cfg.appear_interval = appear_interval;
    RunContext::new(cfg)
}

fn wait_counter(slot: &ObjectSlot) -> Option<u32> {
    match slot {
        ObjectSlot::Waiting { wait_counter } => Some(*wait_counter),
        ObjectSlot::Active(_) => None,
    }
}

#[test]
fn waiting_counts_up_to_the_interval_then_holds() {
    let ctx = context(0.0, 5);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut slot = ObjectSlot::default();
    for expected in 1..=5 {
        assert!(matches!(
            slot.advance(&ctx, &mut rng).unwrap(),
            StepOutcome::Waiting
        ));
        assert_eq!(wait_counter(&slot), Some(expected));
    }
    // At the threshold the birth draw is retried every step without moving the counter.
    for _ in 0..20 {
        slot.advance(&ctx, &mut rng).unwrap();
        assert_eq!(wait_counter(&slot), Some(5));
    }
    assert_eq!(ctx.ids().issued(), 0);
}

#[test]
fn certain_birth_happens_on_first_eligible_step() {
    let ctx = context(1.0, 0);
    let mut rng = SmallRng::seed_from_u64(2);
    let mut slot = ObjectSlot::default();

    let outcome = slot.advance(&ctx, &mut rng).unwrap();
    assert!(matches!(outcome, StepOutcome::Born { object_id: 0 }));
    assert!(slot.is_active());
    let obj = slot.active().unwrap();
    assert_eq!(obj.step, 0);
    let origin = obj.rounded_position();

    match slot.advance(&ctx, &mut rng).unwrap() {
        StepOutcome::Visible(p) => {
            assert_eq!((p.x, p.y), origin);
            assert_eq!(p.object_id, 0);
        }
        other => panic!("expected a visible object, got {other:?}"),
    }
    assert_eq!(slot.active().unwrap().step, 1);
}

#[test]
fn leaving_the_interior_resets_the_wait_counter() {
    let ctx = context(1.0, 0);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut slot = ObjectSlot::default();
    slot.advance(&ctx, &mut rng).unwrap();

    let mut visible = 0;
    loop {
        match slot.advance(&ctx, &mut rng).unwrap() {
            StepOutcome::Visible(_) => visible += 1,
            StepOutcome::Disappeared { object_id } => {
                assert_eq!(object_id, 0);
                break;
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(visible < 100, "object never left the canvas");
    }
    assert!(!slot.is_active());
    assert_eq!(wait_counter(&slot), Some(0));
    // 107 px of travel at 5.3 px/step along the primary axis.
    assert!(visible >= 20);
}

#[test]
fn visible_positions_stay_inside_the_interior() {
    let ctx = context(0.5, 5);
    let cfg = ctx.config().clone();
    let m = cfg.margin() as i64;
    let mut rng = SmallRng::seed_from_u64(4);
    let mut slots = vec![ObjectSlot::default(); 3];
    for _ in 0..2000 {
        for slot in &mut slots {
            if let StepOutcome::Visible(p) = slot.advance(&ctx, &mut rng).unwrap() {
                assert!(p.x >= m && p.x <= cfg.width as i64 - 1 - m);
                assert!(p.y >= m && p.y <= cfg.height as i64 - 1 - m);
            }
        }
    }
}

#[test]
fn object_ids_are_unique_and_increase_in_birth_order() {
    let ctx = context(0.5, 2);
    let mut rng = SmallRng::seed_from_u64(5);
    let mut slots = vec![ObjectSlot::default(); 3];
    let mut born = Vec::new();
    for _ in 0..1000 {
        for slot in &mut slots {
            if let StepOutcome::Born { object_id } = slot.advance(&ctx, &mut rng).unwrap() {
                born.push(object_id);
            }
        }
    }
    assert!(born.len() > 10);
    assert!(born.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(born[0], 0);
    assert_eq!(ctx.ids().issued(), born.len() as u64);
}
