use hecs::World;
use rand::Rng;

use crate::{confinement_force, AiBrain, Body, Config, InputState, Paddle, Puck, Side};

/// Push the human paddle with the held keys plus its confinement force
pub fn drive_human_paddle(world: &mut World, input: &InputState, config: &Config) {
    let rink = config.size();
    let key_force = input.resultant_force(config.key_force);

    for (_entity, (paddle, body)) in world.query_mut::<(&Paddle, &mut Body)>() {
        if paddle.side != Side::Human {
            continue;
        }
        if !body.is_finite() {
            log::warn!("human paddle at {:?}, skipping force this tick", body.pos);
            continue;
        }

        if let Some(force) = key_force {
            body.apply_force(paddle.side.force_to_world(force));
        }

        let rel_pos = paddle.side.to_own_frame(body.pos, rink);
        if let Some(keep) = confinement_force(rel_pos, config) {
            body.apply_force(paddle.side.force_to_world(keep));
        }
    }
}

/// Let every paddle with an [`AiBrain`] decide on and apply its force
pub fn drive_ai_paddle<R: Rng>(world: &mut World, config: &Config, rng: &mut R) {
    let rink = config.size();

    let puck = world
        .query::<(&Puck, &Body)>()
        .iter()
        .next()
        .map(|(_e, (_puck, body))| *body);
    let puck_pos = match puck {
        Some(puck) if puck.is_finite() => puck.pos,
        Some(puck) => {
            log::warn!("puck at {:?}, AI sits this tick out", puck.pos);
            return;
        }
        None => return, // No puck in world
    };

    for (_entity, (paddle, body, brain)) in world.query_mut::<(&Paddle, &mut Body, &mut AiBrain)>()
    {
        if !body.is_finite() {
            log::warn!("AI paddle at {:?}, skipping force this tick", body.pos);
            continue;
        }

        let side = paddle.side;
        let rel_paddle = side.to_own_frame(body.pos, rink);
        let rel_puck = side.to_own_frame(puck_pos, rink);

        let mut force = side.force_to_world(brain.think(rel_paddle, rel_puck, config, rng));
        if let Some(keep) = confinement_force(rel_paddle, config) {
            force += side.force_to_world(keep);
        }
        body.apply_force(force);
    }
}
