use glam::Vec2;

/// A simulated circular particle.
///
/// Holds physics state only. The presentation color is attached by index in
/// [`World`](crate::simulation::World) and never read by the physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Body {
    /// Center of the circle, in viewport units.
    pub position: Vec2,
    /// Displacement per frame.
    pub velocity: Vec2,
    /// Circle radius (> 0, constant for the body's lifetime).
    pub radius: f32,
}
