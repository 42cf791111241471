//! Lock helpers that recover from poisoning
//!
//! Every value guarded here is replaced wholesale under the write lock, so a
//! panic mid-write can never leave it half-updated.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Acquire a read guard, recovering the data if the lock was poisoned
pub fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| {
        tracing::warn!("Recovering poisoned lock for read");
        PoisonError::into_inner(e)
    })
}

/// Acquire a write guard, recovering the data if the lock was poisoned
pub fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| {
        tracing::warn!("Recovering poisoned lock for write");
        PoisonError::into_inner(e)
    })
}
