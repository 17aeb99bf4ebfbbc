use crate::simulation::body::Body;
use crate::simulation::world::WorldConfig;

/// Advances one body by one frame: gravity, wall response, then the
/// positional move.
///
/// Gravity is added before the wall checks, and the wall checks run before
/// the move, so a reflected velocity is what actually displaces the body
/// this frame. Each axis is an if/else-if pair: a body resolves at most one
/// horizontal and one vertical wall per frame, the first-checked wall
/// winning even if it is past both.
pub(crate) fn integrate(body: &mut Body, config: &WorldConfig) {
    body.velocity.y += config.gravity;

    if body.position.x - body.radius < 0.0 {
        // bounce right
        body.velocity.x = body.velocity.x.abs();
        body.position.x = body.radius;
    } else if body.position.x + body.radius > config.width {
        // bounce left
        body.velocity.x = -body.velocity.x.abs();
        body.position.x = config.width - body.radius;
    }

    if body.position.y - body.radius < 0.0 {
        // bounce down
        body.velocity.y = body.velocity.y.abs();
        body.position.y = body.radius;
    } else if body.position.y + body.radius > config.height {
        // bounce up
        body.velocity.y = -body.velocity.y.abs();
        body.position.y = config.height - body.radius;
    }

    body.position += body.velocity;
}
