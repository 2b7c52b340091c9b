use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A value that is built at most once and then shared read-only.
///
/// The lock is held across the whole check-build-populate sequence, so callers
/// racing on an empty cache wait for the first build instead of starting their own.
/// A failed build leaves the cache empty and the next caller tries again.
#[derive(Debug)]
pub struct OnceCache<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> OnceCache<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached value without building it.
    pub fn get(&self) -> Option<Arc<T>> {
        self.lock().as_ref().map(Arc::clone)
    }

    pub fn get_or_try_init<E, F>(&self, build: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut slot = self.lock();
        if let Some(value) = slot.as_ref() {
            return Ok(Arc::clone(value));
        }
        let value = Arc::new(build()?);
        *slot = Some(Arc::clone(&value));
        Ok(value)
    }

    /// Drops the cached value; the next [`OnceCache::get_or_try_init`] builds it again.
    pub fn reset(&self) {
        *self.lock() = None;
    }

    // The slot is only ever None or a finished value, so a panic inside a
    // build cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for OnceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
