/// The updater's own recoverable errors.
///
/// Malformed annotation values are currently tolerated and logged rather
/// than raised (see `Updater::derive`); this variant exists so `on_event`'s
/// signature matches the spec's fallible contract even though the present
/// implementation never returns it.
#[derive(Debug, thiserror::Error)]
pub enum UpdaterError {
    #[error("internal updater error: {0}")]
    Internal(String),
}

/// An upstream watch stream failed.
#[derive(Debug, thiserror::Error)]
#[error("service watch stream failed: {0}")]
pub struct WatchError(pub String);

/// Errors surfaced by [`crate::DiscoveryLoop::discover_once`].
///
/// A soft deadline elapsing is deliberately not a member of this enum: it
/// is normal termination, represented by an `Ok` return.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("error on reading event stream: {0}")]
    Watch(#[from] WatchError),

    #[error("error on updating routing on event: {0}")]
    Updater(#[from] UpdaterError),
}
