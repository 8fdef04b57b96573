//! Actor physics: gravity integration and flap impulse.

use super::types::Actor;

/// Advance the actor by one tick. Velocity is updated before position.
pub fn apply_gravity_and_integrate(actor: &mut Actor, gravity: f64) {
    actor.velocity += gravity;
    actor.y += actor.velocity;
}

/// Flap. Overrides the current velocity rather than adding to it, so every
/// flap feels the same regardless of fall speed.
pub fn apply_impulse(actor: &mut Actor, impulse: f64) {
    actor.velocity = impulse;
}
