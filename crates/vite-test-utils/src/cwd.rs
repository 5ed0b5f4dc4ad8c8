//! Serialization of tests that change the process working directory.

use std::sync::{Mutex, MutexGuard};

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Hold this while a test changes the working directory.
///
/// The lock survives a poisoning panic so that a test asserting restoration
/// after a panic does not break the tests that follow it.
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
