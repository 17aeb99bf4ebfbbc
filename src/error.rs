use thiserror::Error;

/// Startup-time configuration failures.
///
/// The physics step itself is total over well-formed inputs and has no
/// recoverable errors; this only covers rejecting a malformed
/// [`WorldConfig`](crate::simulation::WorldConfig) before the simulation
/// starts.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("invalid simulation parameter: {0}")]
    InvalidParam(String),
}
