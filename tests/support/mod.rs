//! Process-environment scaffolding for backend-selection tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Serialized, self-restoring override of one environment variable.
///
/// Backend selection reads `REPOSITORY_TYPE` (and the server binary reads
/// `CONFIG_FILE`) from the process environment, which is shared across the
/// whole test binary. Constructing a guard takes a process-wide lock so env
/// tests cannot interleave; dropping it restores the variable to whatever it
/// held before, panicking test included.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Set `key` to `value` for the lifetime of the guard.
    pub fn set(key: &'static str, value: &str) -> Self {
        let guard = Self::capture(key);
        std::env::set_var(key, value);
        guard
    }

    /// Remove `key` for the lifetime of the guard.
    pub fn unset(key: &'static str) -> Self {
        let guard = Self::capture(key);
        std::env::remove_var(key);
        guard
    }

    fn capture(key: &'static str) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        Self {
            key,
            previous: std::env::var(key).ok(),
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => std::env::set_var(self.key, value),
            None => std::env::remove_var(self.key),
        }
    }
}
