//! Ambient (hero) player lifecycle
//!
//! The embeddable player API is loaded once per process; players created
//! before it is available are queued on the [`PlayerApiLoader`] and built when
//! it signals readiness. [`AmbientPlayer`] owns at most one live player
//! handle and guarantees it is released on unmount, on video change and on
//! drop.

pub mod ambient;
pub mod loader;

pub use ambient::{AmbientPlayer, EmbeddedPlayer, PlayerFactory, PlayerState};
pub use loader::{PLAYER_API_SCRIPT_URL, PlayerApiLoader};
