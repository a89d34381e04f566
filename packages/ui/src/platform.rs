//! Storage backend selection per platform.

use session::Session;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformBackend = session::WebStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformBackend = session::MemoryBackend;

/// The session handle threaded through context.
pub type PlatformSession = Session<PlatformBackend>;

/// Construct the session handle for this program instance.
///
/// On the web every handle observes the same `localStorage`, which is what
/// keeps independently loaded surfaces consistent.
pub fn make_session() -> PlatformSession {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(session::WebStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Session::new(session::MemoryBackend::new())
    }
}
