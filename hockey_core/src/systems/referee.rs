use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{Body, Config, Events, Puck, Score, Side};

/// A goal the referee awarded this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub scorer: Side,
    /// Scorer's total after the goal
    pub points: u32,
}

/// Check if the puck crossed a goal line, award the point and re-serve it
pub fn check_goals<R: Rng>(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
) -> Option<Goal> {
    let margin = config.goal_margin();
    let mut goal = None;

    for (_entity, (_puck, body)) in world.query_mut::<(&Puck, &mut Body)>() {
        if !body.is_finite() {
            log::warn!("puck at {:?}, skipping goal check", body.pos);
            continue;
        }
        let y = body.pos.y;

        // The human attacks the goal at y = 0, the AI the one at y = H
        let scorer = if y < -margin {
            Side::Human
        } else if y > config.rink_height + margin {
            Side::Ai
        } else {
            continue;
        };

        let points = score.increment(scorer);
        events.record_goal(scorer);

        let (pos, vel) = serve(config, rng);
        body.teleport(pos, vel);
        events.respawned = true;

        log::info!(
            "{:?} scores ({} - {}), puck re-served at {:?} with {:?}",
            scorer,
            score.human,
            score.ai,
            pos,
            vel
        );
        goal = Some(Goal { scorer, points });
    }

    goal
}

/// Random position and velocity for a fresh puck.
///
/// Expects a validated `config` so both position ranges are non-empty.
pub fn serve<R: Rng>(config: &Config, rng: &mut R) -> (Vec2, Vec2) {
    let (x_min, x_max) = config.respawn_x_range();
    let (y_min, y_max) = config.respawn_y_range();
    let speed = config.respawn_max_speed;

    let pos = Vec2::new(rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max));
    let vel = Vec2::new(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed));
    (pos, vel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_puck, GameRng};
    use proptest::prelude::*;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    fn place_puck(world: &mut World, config: &Config, pos: Vec2) -> hecs::Entity {
        let puck = create_puck(world, config);
        world.get::<&mut Body>(puck).unwrap().pos = pos;
        puck
    }

    #[test]
    fn test_human_scores_past_ai_goal_line() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        place_puck(&mut world, &config, Vec2::new(250.0, -31.0));

        let goal = check_goals(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(goal, Some(Goal { scorer: Side::Human, points: 1 }));
        assert_eq!(score, Score { human: 1, ai: 0 });
        assert!(events.human_scored, "Should trigger human_scored event");
        assert!(events.respawned);
    }

    #[test]
    fn test_ai_scores_past_human_goal_line() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        place_puck(&mut world, &config, Vec2::new(250.0, 831.0));

        check_goals(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score { human: 0, ai: 1 });
        assert!(events.ai_scored, "Should trigger ai_scored event");
    }

    #[test]
    fn test_no_goal_on_the_margin() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let puck = place_puck(&mut world, &config, Vec2::new(250.0, -30.0));

        assert_eq!(check_goals(&mut world, &config, &mut score, &mut events, &mut rng), None);
        world.get::<&mut Body>(puck).unwrap().pos.y = 830.0;
        assert_eq!(check_goals(&mut world, &config, &mut score, &mut events, &mut rng), None);

        assert_eq!(score, Score::new());
        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_puck_reserved_with_seeded_draws() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let puck = place_puck(&mut world, &config, Vec2::new(250.0, 900.0));

        check_goals(&mut world, &config, &mut score, &mut events, &mut rng);

        let (pos, vel) = serve(&config, &mut GameRng::new(12345));
        let body = *world.get::<&Body>(puck).unwrap();
        assert_eq!(body.pos, pos);
        assert_eq!(body.vel, vel);
    }

    #[test]
    fn test_nan_puck_is_ignored() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        place_puck(&mut world, &config, Vec2::new(250.0, f32::NAN));

        assert_eq!(check_goals(&mut world, &config, &mut score, &mut events, &mut rng), None);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_puck_with_nan_velocity_is_ignored() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let puck = place_puck(&mut world, &config, Vec2::new(250.0, 900.0));
        world.get::<&mut Body>(puck).unwrap().vel = Vec2::new(0.0, f32::INFINITY);

        assert_eq!(check_goals(&mut world, &config, &mut score, &mut events, &mut rng), None);
        assert_eq!(score, Score::new());
        assert!(!events.respawned);
    }

    #[test]
    fn test_goal_margin_tracks_puck_radius() {
        let (mut world, mut config, mut score, mut events, mut rng) = setup_world();
        config.puck_radius = 10.0;
        place_puck(&mut world, &config, Vec2::new(250.0, -11.0));

        check_goals(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.human, 1);
    }

    #[test]
    fn test_multiple_goals_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let puck = place_puck(&mut world, &config, Vec2::new(250.0, -100.0));

        for expected in 1..=3 {
            world.get::<&mut Body>(puck).unwrap().pos.y = -100.0;
            let goal = check_goals(&mut world, &config, &mut score, &mut events, &mut rng);
            assert_eq!(goal.map(|g| g.points), Some(expected));
        }
        assert_eq!(score, Score { human: 3, ai: 0 });
    }

    proptest! {
        #[test]
        fn prop_serve_stays_in_bounds(seed in any::<u64>()) {
            let config = Config::new();
            let (pos, vel) = serve(&config, &mut GameRng::new(seed));
            prop_assert!((10.0..=490.0).contains(&pos.x));
            prop_assert!((40.0..=720.0).contains(&pos.y));
            prop_assert!((-10.0..=10.0).contains(&vel.x));
            prop_assert!((-10.0..=10.0).contains(&vel.y));
        }

        #[test]
        fn prop_in_play_puck_never_scores(y in -30.0f32..=830.0, x in 0.0f32..500.0) {
            let (mut world, config, mut score, mut events, mut rng) = setup_world();
            place_puck(&mut world, &config, Vec2::new(x, y));
            prop_assert_eq!(check_goals(&mut world, &config, &mut score, &mut events, &mut rng), None);
            prop_assert_eq!(score, Score::new());
        }
    }
}
