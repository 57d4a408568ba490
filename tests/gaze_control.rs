use pi_vector_eyes::{Expression, FaceConfig, GazeTarget, LookState, VectorFace};
use proptest::prelude::*;

fn seeded_face(seed: u64) -> VectorFace {
    VectorFace::from_config(FaceConfig::new(240, 240, 60).with_seed(seed)).unwrap()
}

fn arbitrary_expression() -> impl Strategy<Value = Expression> {
    (0..Expression::ALL.len()).prop_map(|i| Expression::ALL[i])
}

/// An expression change or a tick of up to a quarter second
#[derive(Debug, Clone)]
enum Step {
    Set(Expression),
    Tick(f64),
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        arbitrary_expression().prop_map(Step::Set),
        (0.0..0.25f64).prop_map(Step::Tick),
    ]
}

fn max_step(face: &VectorFace) -> f64 {
    let config = face.config();
    config.wander.speed * config.envelope().radius() * config.max_tick_secs()
}

#[test]
fn random_look_enabled_iff_autonomous() {
    proptest!(|(seed in any::<u64>(), steps in prop::collection::vec(arbitrary_step(), 0..200))| {
        let mut face = seeded_face(seed);
        for step in steps {
            match step {
                Step::Set(e) => {
                    face.set_expression(e);
                    prop_assert_eq!(face.look_controller().is_random_look_enabled(), !e.is_directional());
                    prop_assert_eq!(face.current_expression(), e);
                }
                Step::Tick(dt) => face.tick(dt),
            }
        }
    });
}

#[test]
fn gaze_stays_inside_envelope() {
    proptest!(|(seed in any::<u64>(), steps in prop::collection::vec(arbitrary_step(), 0..300))| {
        let mut face = seeded_face(seed);
        let envelope = *face.look_controller().envelope();
        for step in steps {
            match step {
                Step::Set(e) => face.set_expression(e),
                Step::Tick(dt) => face.tick(dt),
            }
            prop_assert!(envelope.contains(&face.current_gaze_target()));
        }
    });
}

#[test]
fn wander_moves_at_bounded_speed() {
    proptest!(|(seed in any::<u64>(), dts in prop::collection::vec(0.0..1.0f64, 1..300))| {
        let mut face = seeded_face(seed);
        let bound = max_step(&face) + 1e-9;
        for dt in dts {
            let before = face.current_gaze_target();
            face.tick(dt);
            prop_assert!(face.current_gaze_target().distance(&before) <= bound);
        }
    });
}

#[test]
fn leaving_a_look_never_teleports() {
    proptest!(|(seed in any::<u64>(), look in 0..4usize, mood in 0..18usize, warmup in 0..120usize)| {
        let mut face = seeded_face(seed);
        for _ in 0..warmup {
            face.tick(1.0 / 60.0);
        }
        face.set_expression(Expression::DIRECTIONAL[look]);
        let held = face.current_gaze_target();

        face.set_expression(Expression::AUTONOMOUS[mood]);
        prop_assert_eq!(face.current_gaze_target(), held);

        face.tick(1.0 / 60.0);
        prop_assert!(face.current_gaze_target().distance(&held) <= max_step(&face) + 1e-9);
    });
}

#[test]
fn repeating_an_expression_is_idempotent() {
    proptest!(|(seed in any::<u64>(), e in arbitrary_expression(), warmup in 0..120usize)| {
        let mut face = seeded_face(seed);
        for _ in 0..warmup {
            face.tick(1.0 / 60.0);
        }
        face.set_expression(e);
        let enabled = face.look_controller().is_random_look_enabled();
        let gaze = face.current_gaze_target();

        face.set_expression(e);
        prop_assert_eq!(face.look_controller().is_random_look_enabled(), enabled);
        prop_assert_eq!(face.current_gaze_target(), gaze);
    });
}

#[test]
fn look_left_disables_and_normal_restores() {
    let mut face = VectorFace::new(240, 240, 60);
    assert!(face.look_controller().is_random_look_enabled());

    face.set_expression(Expression::LookLeft);
    assert!(!face.look_controller().is_random_look_enabled());
    assert_eq!(face.look_state(), LookState::FixedLookActive);

    face.set_expression(Expression::Normal);
    assert!(face.look_controller().is_random_look_enabled());
    assert_eq!(face.look_state(), LookState::RandomLookActive);
}

#[test]
fn every_look_disables_random_look() {
    let mut face = VectorFace::new(240, 240, 60);
    for look in Expression::DIRECTIONAL {
        face.set_expression(look);
        assert!(!face.look_controller().is_random_look_enabled(), "{}", look);
    }
}

#[test]
fn cross_class_round_trips_restore_random_look() {
    let mut face = VectorFace::new(240, 240, 60);
    for (look, mood) in [
        (Expression::LookUp, Expression::Happy),
        (Expression::LookRight, Expression::Sad),
        (Expression::LookDown, Expression::Angry),
    ] {
        face.set_expression(look);
        assert!(!face.look_controller().is_random_look_enabled());
        face.set_expression(mood);
        assert!(face.look_controller().is_random_look_enabled(), "{} -> {}", look, mood);
    }
}

#[test]
fn look_to_look_updates_fixed_target() {
    let mut face = seeded_face(9);
    face.set_expression(Expression::LookLeft);
    let left = face.current_gaze_target();
    face.set_expression(Expression::LookUp);

    assert!(!face.look_controller().is_random_look_enabled());
    let up = face.current_gaze_target();
    assert_ne!(up, left);
    assert_eq!(up.x, 0.0);
    assert!(up.y < 0.0);
}

#[test]
fn each_autonomous_expression_keeps_random_look_from_fresh_face() {
    for mood in Expression::AUTONOMOUS {
        let mut face = VectorFace::new(240, 240, 60);
        face.set_expression(mood);
        assert!(face.look_controller().is_random_look_enabled(), "{}", mood);
    }
}

#[test]
fn autonomous_switches_do_not_disturb_wander() {
    let mut a = seeded_face(21);
    let mut b = seeded_face(21);
    for (i, mood) in Expression::AUTONOMOUS.iter().cycle().take(240).enumerate() {
        if i % 20 == 0 {
            a.set_expression(*mood);
        }
        a.tick(1.0 / 60.0);
        b.tick(1.0 / 60.0);
    }
    assert_eq!(a.current_gaze_target(), b.current_gaze_target());
}

#[test]
fn wander_leaves_center_eventually() {
    let mut face = seeded_face(4);
    let mut moved = false;
    for _ in 0..600 {
        face.tick(1.0 / 60.0);
        if face.current_gaze_target() != GazeTarget::CENTER {
            moved = true;
            break;
        }
    }
    assert!(moved);
}
