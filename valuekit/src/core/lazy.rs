//! Compute-once cache with retry on failure.

use std::cell::{Cell, OnceCell};
use std::convert::Infallible;
use std::fmt;

use tracing::{debug, trace};

/// Holds a producer and the value it produced, once it has produced one.
///
/// The cell starts absent. The first successful [`LazyCache::read`] stores
/// the producer's value; every later read returns that value without calling
/// the producer again. A failed producer call stores nothing, so the next
/// read retries.
///
/// The cache is single-threaded (`OnceCell` is `!Sync`). Callers that share
/// one across threads must serialize access to `read` themselves.
pub struct LazyCache<T, F> {
    cell: OnceCell<T>,
    producer: F,
    loading: Cell<bool>,
}

/// Clears the loading flag when the producer returns or unwinds.
struct LoadingGuard<'a>(&'a Cell<bool>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<T, E, F> LazyCache<T, F>
where
    F: Fn() -> Result<T, E>,
{
    /// Bind `producer` without calling it.
    pub fn new(producer: F) -> Self {
        Self {
            cell: OnceCell::new(),
            producer,
            loading: Cell::new(false),
        }
    }

    /// Return the cached value, invoking the producer if absent.
    ///
    /// A producer error is returned to this caller and not cached.
    ///
    /// # Panics
    ///
    /// If the producer calls `read` on the same cache while it is running.
    pub fn read(&self) -> Result<&T, E> {
        if let Some(value) = self.cell.get() {
            trace!("lazy cache hit");
            return Ok(value);
        }
        if self.loading.replace(true) {
            panic!("LazyCache::read re-entered from its own producer");
        }
        debug!("lazy cache absent, invoking producer");
        let produced = {
            let _guard = LoadingGuard(&self.loading);
            (self.producer)()
        };
        let value = produced?;
        Ok(self.cell.get_or_init(|| value))
    }
}

impl<T, F> LazyCache<T, F>
where
    F: Fn() -> Result<T, Infallible>,
{
    /// `read` for producers that cannot fail.
    pub fn force(&self) -> &T {
        match self.read() {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl<T, F> LazyCache<T, F> {
    /// True once a value is stored. Never invokes the producer.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Stored value, if any, without invoking the producer.
    pub fn peek(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn into_inner(self) -> Option<T> {
        self.cell.into_inner()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for LazyCache<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyCache")
            .field("value", &self.cell.get())
            .finish_non_exhaustive()
    }
}
