//! Mutex helpers for flow state

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks flow state, recovering the guard if a previous holder panicked
///
/// Flow state stays structurally valid after a panic, so the data is still usable.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
