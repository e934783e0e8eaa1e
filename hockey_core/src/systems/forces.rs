use hecs::World;

use crate::Body;

/// Empty every force accumulator once the engine has integrated a step
pub fn clear_forces(world: &mut World) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.force = glam::Vec2::ZERO;
    }
}
