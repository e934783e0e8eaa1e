pub mod ai;
pub mod components;
pub mod config;
pub mod confinement;
pub mod error;
pub mod frame;
pub mod game;
pub mod input;
pub mod params;
pub mod resources;
pub mod rink;
pub mod systems;

pub use ai::*;
pub use components::*;
pub use config::*;
pub use confinement::*;
pub use error::*;
pub use frame::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use rink::*;
pub use systems::*;

use hecs::World;
use rand::Rng;

/// Run one tick of game logic.
///
/// Adds paddle forces to the bodies in `world` and referees the puck. The
/// physics engine integrates afterwards and then calls [`clear_forces`].
///
/// A config that fails [`Config::validate`] skips the whole tick, since the
/// AI and re-serve draws need non-empty ranges.
pub fn step<R: Rng>(
    world: &mut World,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
    sink: &mut Option<Box<dyn ScoreSink>>,
) -> Option<Goal> {
    // Clear events at start of tick
    events.clear();

    if let Err(err) = config.validate() {
        log::warn!("invalid config, skipping tick: {}", err);
        return None;
    }

    // 1. Human paddle from held keys
    drive_human_paddle(world, input, config);

    // 2. AI paddle
    drive_ai_paddle(world, config, rng);

    // 3. Goals and re-serve
    let goal = check_goals(world, config, score, events, rng);

    if let (Some(goal), Some(sink)) = (goal, sink.as_mut()) {
        sink.show(goal.scorer, goal.points);
    }

    goal
}

/// Helper to create a paddle entity at its start position.
/// AI paddles also get an [`AiBrain`].
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let body = Body::new(config.paddle_start(side), config.paddle_mass);
    match side {
        Side::Human => world.spawn((Paddle::new(side), body)),
        Side::Ai => world.spawn((Paddle::new(side), body, AiBrain::new())),
    }
}

/// Helper to create the puck entity, at rest on the centre spot
pub fn create_puck(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Puck, Body::new(config.puck_start(), config.puck_mass)))
}
