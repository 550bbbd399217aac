/// Crate-wide result type. Domain failures are raised as
/// [`SbomError`](super::error::SbomError) and travel inside `anyhow::Error`,
/// so callers can recover them with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
