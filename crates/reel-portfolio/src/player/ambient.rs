use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, info, warn};

use super::loader::PlayerApiLoader;
use crate::embed::{PlayerConfig, PlayerVars};
use crate::errors::PlayerError;

/// Handle to one live embedded player instance
pub trait EmbeddedPlayer: Send {
    fn play(&mut self);
    fn mute(&mut self);
    fn unmute(&mut self);
    fn is_muted(&self) -> bool;
    /// Release the instance; the handle is dropped right after
    fn destroy(&mut self);
}

/// Constructs players once the player API is available
#[cfg_attr(test, mockall::automock)]
pub trait PlayerFactory: Send + Sync {
    fn create(&self, config: &PlayerConfig) -> Result<Box<dyn EmbeddedPlayer>, PlayerError>;
}

/// Player state codes reported by the player API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

#[derive(Default)]
struct PlayerSlot {
    /// Bumped on every mount/unmount; deferred inits carry the value they were
    /// scheduled with and are discarded on mismatch.
    generation: u64,
    video_id: Option<String>,
    handle: Option<Box<dyn EmbeddedPlayer>>,
}

impl PlayerSlot {
    fn release(&mut self) -> Option<Box<dyn EmbeddedPlayer>> {
        self.generation += 1;
        self.video_id = None;
        self.handle.take()
    }
}

/// Muted, looping background player for the featured video
pub struct AmbientPlayer {
    loader: Arc<PlayerApiLoader>,
    factory: Arc<dyn PlayerFactory>,
    slot: Arc<Mutex<PlayerSlot>>,
}

fn lock_slot(slot: &Mutex<PlayerSlot>) -> MutexGuard<'_, PlayerSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn destroy(handle: Option<Box<dyn EmbeddedPlayer>>) {
    if let Some(mut handle) = handle {
        handle.destroy();
    }
}

impl AmbientPlayer {
    pub fn new(loader: Arc<PlayerApiLoader>, factory: Arc<dyn PlayerFactory>) -> Self {
        Self {
            loader,
            factory,
            slot: Arc::new(Mutex::new(PlayerSlot::default())),
        }
    }

    /// Show `video_id`, replacing whatever was mounted before
    ///
    /// Construction is deferred until the player API is ready.
    ///
    /// # Returns
    /// `true` when the caller must inject the player API script
    pub fn mount(&self, video_id: &str) -> bool {
        let (generation, previous) = {
            let mut slot = lock_slot(&self.slot);
            if slot.video_id.as_deref() == Some(video_id) {
                return false;
            }
            let previous = slot.release();
            slot.video_id = Some(video_id.to_string());
            (slot.generation, previous)
        };
        destroy(previous);

        let config = PlayerConfig {
            video_id: video_id.to_string(),
            player_vars: PlayerVars::ambient(video_id),
        };
        let slot = Arc::downgrade(&self.slot);
        let factory = Arc::clone(&self.factory);

        self.loader
            .when_ready(move || initialize(slot, generation, factory.as_ref(), &config))
    }

    /// Release the current player, if any
    pub fn unmount(&self) {
        let previous = lock_slot(&self.slot).release();
        if previous.is_some() {
            debug!("Releasing ambient player");
        }
        destroy(previous);
    }

    /// Player API state callback; an ended video starts over
    pub fn on_state_change(&self, state: PlayerState) {
        if state != PlayerState::Ended {
            return;
        }
        self.with_handle(|handle| handle.play());
    }

    /// Flip mute on the live player
    ///
    /// # Returns
    /// The new muted state, or `None` while no player is loaded
    pub fn toggle_mute(&self) -> Option<bool> {
        self.with_handle(|handle| {
            if handle.is_muted() {
                handle.unmute();
            } else {
                handle.mute();
            }
            handle.is_muted()
        })
    }

    /// Run `f` against the live player with the slot unlocked
    ///
    /// The handle is checked out for the duration of the call, so callbacks
    /// raised from inside the player find an empty slot. It goes back only if
    /// no mount or unmount happened meanwhile; otherwise it is destroyed.
    fn with_handle<R>(&self, f: impl FnOnce(&mut dyn EmbeddedPlayer) -> R) -> Option<R> {
        let (generation, mut handle) = {
            let mut slot = lock_slot(&self.slot);
            (slot.generation, slot.handle.take()?)
        };
        let result = f(handle.as_mut());

        let stale = {
            let mut slot = lock_slot(&self.slot);
            if slot.generation == generation && slot.handle.is_none() {
                slot.handle = Some(handle);
                None
            } else {
                Some(handle)
            }
        };
        if stale.is_some() {
            debug!("Player released while in use");
        }
        destroy(stale);
        Some(result)
    }

    pub fn is_loaded(&self) -> bool {
        lock_slot(&self.slot).handle.is_some()
    }

    pub fn video_id(&self) -> Option<String> {
        lock_slot(&self.slot).video_id.clone()
    }
}

impl Drop for AmbientPlayer {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn initialize(
    slot: Weak<Mutex<PlayerSlot>>,
    generation: u64,
    factory: &dyn PlayerFactory,
    config: &PlayerConfig,
) {
    let is_current = |slot: &Arc<Mutex<PlayerSlot>>| lock_slot(slot).generation == generation;

    let Some(slot) = slot.upgrade().filter(is_current) else {
        debug!("Discarding stale player init for {}", config.video_id);
        return;
    };

    let mut handle = match factory.create(config) {
        Ok(handle) => handle,
        Err(e) => {
            warn!("Ambient player unavailable: {}", e);
            return;
        }
    };
    handle.mute();
    handle.play();

    let mut guard = lock_slot(&slot);
    if guard.generation != generation {
        drop(guard);
        debug!("Player for {} superseded during init", config.video_id);
        handle.destroy();
        return;
    }
    guard.handle = Some(handle);
    info!("Ambient player ready for {}", config.video_id);
}
