use glam::Vec2;

use crate::Config;

/// Restoring force that keeps a paddle inside its own half.
///
/// `rel_pos` is in the paddle's own frame. Past the forward limit the paddle
/// is pulled back, short of the back limit it is pushed out of its goal
/// mouth; both are linear springs with no cap. Only y is constrained.
/// Returns `None` while the paddle is inside the legal band.
pub fn confinement_force(rel_pos: Vec2, config: &Config) -> Option<Vec2> {
    let k = config.confinement_stiffness;
    let forward = config.forward_limit();
    let back = config.back_limit();

    if rel_pos.y > forward {
        Some(Vec2::new(0.0, k * (forward - rel_pos.y)))
    } else if rel_pos.y < back {
        Some(Vec2::new(0.0, k * (back - rel_pos.y)))
    } else {
        None
    }
}
