//! Mutual-exclusion discipline guarding each fan-out pass
//!
//! Exactly one backend is the build default, selected by feature:
//!
//! - `platform-lock` (default): [`PlatformLock`], a blocking process-wide
//!   primitive built on `std::sync::{Mutex, Condvar}`.
//! - `external-lock`: [`HookLock`], driven by a caller-installed
//!   [`LockHook`]; with no hook installed, acquire/release are no-ops and
//!   dispatch is not thread-safe.
//! - neither: [`HookLock`] again, and the build script emits a warning.
//!
//! The registry cell inside `Logger` stays internally synchronized either
//! way; the discipline is the reported locking contract and spans one full
//! fan-out pass.

use std::sync::{Condvar, Mutex, RwLock};

use crate::error::{DispatchError, LockOp};

#[cfg(all(feature = "platform-lock", feature = "external-lock"))]
compile_error!("features `platform-lock` and `external-lock` are mutually exclusive; enable at most one");

/// Build-selected default discipline
#[cfg(feature = "platform-lock")]
pub type DefaultLock = PlatformLock;

/// Build-selected default discipline
#[cfg(not(feature = "platform-lock"))]
pub type DefaultLock = HookLock;

/// Name of the compiled default backend
pub const fn default_backend() -> &'static str {
    if cfg!(feature = "platform-lock") {
        "platform-lock"
    } else if cfg!(feature = "external-lock") {
        "external-lock"
    } else {
        "none (lock hook required for thread safety)"
    }
}

/// Caller-supplied locking callback
///
/// Invoked with [`LockOp::Acquire`] to lock and [`LockOp::Release`] to
/// unlock; an `Err` propagates as a lock failure. Calling back into the
/// logger from inside the hook deadlocks or recurses, depending on the
/// hook; don't.
pub type LockHook = Box<dyn Fn(LockOp) -> Result<(), String> + Send + Sync>;

/// Polymorphic {acquire, release} capability
pub trait LockDiscipline: Send + Sync {
    /// Block until the discipline is held
    ///
    /// # Errors
    /// Returns a lock failure when the underlying primitive reports one.
    fn acquire(&self) -> Result<(), DispatchError>;

    /// Release the discipline
    ///
    /// # Errors
    /// Returns a lock failure when the underlying primitive reports one.
    fn release(&self) -> Result<(), DispatchError>;

    /// Install a caller-supplied hook
    ///
    /// Backends with a native primitive accept and ignore it.
    fn install_hook(&self, hook: LockHook) -> Result<(), DispatchError> {
        let _ = hook;
        Ok(())
    }
}

/// Blocking process-wide mutual exclusion
///
/// Poisoning of the inner primitive and release-without-acquire both
/// surface as lock failures.
pub struct PlatformLock {
    held: Mutex<bool>,
    unlocked: Condvar,
}

impl PlatformLock {
    /// Create an unheld lock
    pub fn new() -> Self {
        Self {
            held: Mutex::new(false),
            unlocked: Condvar::new(),
        }
    }
}

impl Default for PlatformLock {
    fn default() -> Self {
        Self::new()
    }
}

impl LockDiscipline for PlatformLock {
    fn acquire(&self) -> Result<(), DispatchError> {
        let mut held = self
            .held
            .lock()
            .map_err(|e| DispatchError::lock_failure(LockOp::Acquire, e.to_string()))?;
        while *held {
            held = self
                .unlocked
                .wait(held)
                .map_err(|e| DispatchError::lock_failure(LockOp::Acquire, e.to_string()))?;
        }
        *held = true;
        Ok(())
    }

    fn release(&self) -> Result<(), DispatchError> {
        let mut held = self
            .held
            .lock()
            .map_err(|e| DispatchError::lock_failure(LockOp::Release, e.to_string()))?;
        if !*held {
            return Err(DispatchError::lock_failure(
                LockOp::Release,
                "lock not held",
            ));
        }
        *held = false;
        self.unlocked.notify_one();
        Ok(())
    }
}

/// Hook-driven locking for hosts without a usable native primitive
///
/// With no hook installed, both operations succeed without doing anything;
/// concurrent dispatch is then unserialized (and documented as such).
#[derive(Default)]
pub struct HookLock {
    hook: RwLock<Option<LockHook>>,
}

impl HookLock {
    /// Create a hookless (no-op) lock
    pub fn new() -> Self {
        Self::default()
    }

    fn invoke(&self, op: LockOp) -> Result<(), DispatchError> {
        let slot = self
            .hook
            .read()
            .map_err(|e| DispatchError::lock_failure(op, e.to_string()))?;
        match slot.as_ref() {
            Some(hook) => hook(op).map_err(|message| DispatchError::LockFailure { op, message }),
            None => Ok(()),
        }
    }
}

impl LockDiscipline for HookLock {
    fn acquire(&self) -> Result<(), DispatchError> {
        self.invoke(LockOp::Acquire)
    }

    fn release(&self) -> Result<(), DispatchError> {
        self.invoke(LockOp::Release)
    }

    fn install_hook(&self, hook: LockHook) -> Result<(), DispatchError> {
        let mut slot = self
            .hook
            .write()
            .map_err(|e| DispatchError::lock_failure(LockOp::Acquire, e.to_string()))?;
        *slot = Some(hook);
        Ok(())
    }
}
