use crate::simulation::body::Body;

/// Restitution for body-body impacts; 1.0 keeps collisions perfectly
/// elastic.
const RESTITUTION: f32 = 1.0;

/// True when two circles overlap: center distance strictly less than the
/// sum of their radii. Exact tangency does not count as a collision.
pub(crate) fn bodies_overlap(a: &Body, b: &Body) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// Separates two colliding bodies and exchanges momentum along the contact
/// normal, assuming equal unit masses.
///
/// `overlap` is half the signed gap `dist - radius_a - radius_b`, negative
/// while the bodies interpenetrate, so moving A by `overlap * delta / dist`
/// (and B by the negation) pushes the pair apart. The signs are load-bearing;
/// keep the arithmetic as written.
pub(crate) fn resolve_collision(a: &mut Body, b: &mut Body) {
    let delta = b.position - a.position;
    let dist = delta.length();
    if dist == 0.0 {
        // coincident centers, no usable contact normal
        return;
    }

    let overlap = 0.5 * (dist - a.radius - b.radius);
    a.position += overlap * (delta / dist);
    b.position -= overlap * (delta / dist);

    let norm = delta / dist;
    let rel_vel = b.velocity - a.velocity;
    let vel_along_norm = rel_vel.dot(norm);
    if vel_along_norm > 0.0 {
        // already separating; the positional correction above still stands
        return;
    }

    let j = -(1.0 + RESTITUTION) * vel_along_norm / 2.0;
    let impulse = j * norm;
    a.velocity -= impulse;
    b.velocity += impulse;
}

/// Exhaustive n*(n-1)/2 scan: walks every (i, j) pair, i < j, in increasing
/// order, resolving overlaps in place. Later pairs observe the
/// already-resolved state of earlier ones: multi-way contacts settle
/// sequentially within the frame, not simultaneously.
///
/// Returns the number of pairs resolved.
pub(crate) fn resolve_overlaps(bodies: &mut [Body]) -> usize {
    let mut resolved = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            if bodies_overlap(a, b) {
                resolve_collision(a, b);
                resolved += 1;
            }
        }
    }
    resolved
}
