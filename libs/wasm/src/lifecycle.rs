//! Module load state.
//!
//! The host loads the WASM module asynchronously and must not offer the
//! conversion until loading has finished. The state machine is:
//!
//! ```text
//! Uninitialized → Loading → Ready
//!                         ↘ Failed(message)
//! ```
//!
//! `Ready` and `Failed` are final. Initializing again after `Ready` is a
//! no-op; after `Failed` it reports the first failure.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::{info, warn};

/// Where the module is in its load sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    /// Lower-case state name as reported to the host.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

/// Errors from lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("Module is not ready (state: {state}); call init() first")]
    NotReady { state: &'static str },

    #[error("Module initialization is already in progress")]
    AlreadyLoading,

    #[error("Module failed to initialize: {0}")]
    Failed(String),
}

/// Thread-safe holder of a [`LoadState`].
///
/// ```
/// use qr_stl_wasm::lifecycle::{LoadState, ModuleLifecycle};
///
/// let lifecycle = ModuleLifecycle::new();
/// assert!(lifecycle.ensure_ready().is_err());
/// lifecycle.initialize(|| Ok(())).unwrap();
/// assert_eq!(lifecycle.state(), LoadState::Ready);
/// ```
#[derive(Debug)]
pub struct ModuleLifecycle {
    state: Mutex<LoadState>,
}

impl Default for ModuleLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleLifecycle {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(LoadState::Uninitialized),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.lock().clone()
    }

    /// Runs `load` once, moving to `Ready` on success or `Failed` on error.
    ///
    /// The lock is not held while `load` runs; a nested call observes
    /// `Loading` and gets [`LifecycleError::AlreadyLoading`].
    pub fn initialize<F>(&self, load: F) -> Result<(), LifecycleError>
    where
        F: FnOnce() -> Result<(), String>,
    {
        {
            let mut state = self.lock();
            match &*state {
                LoadState::Ready => return Ok(()),
                LoadState::Loading => return Err(LifecycleError::AlreadyLoading),
                LoadState::Failed(message) => return Err(LifecycleError::Failed(message.clone())),
                LoadState::Uninitialized => *state = LoadState::Loading,
            }
        }

        let outcome = load();

        let mut state = self.lock();
        match outcome {
            Ok(()) => {
                info!("Module ready");
                *state = LoadState::Ready;
                Ok(())
            }
            Err(message) => {
                warn!(%message, "Module failed to initialize");
                *state = LoadState::Failed(message.clone());
                Err(LifecycleError::Failed(message))
            }
        }
    }

    /// Succeeds only in the `Ready` state.
    pub fn ensure_ready(&self) -> Result<(), LifecycleError> {
        match &*self.lock() {
            LoadState::Ready => Ok(()),
            LoadState::Failed(message) => Err(LifecycleError::Failed(message.clone())),
            other => Err(LifecycleError::NotReady { state: other.name() }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
