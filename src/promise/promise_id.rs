use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a promise.
///
/// # Examples
///
/// ```
/// use promise_lite::promise;
///
/// let p = promise::fulfilled::<i32, String>(1);
/// println!("id = {}", p.id());
/// ```
#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug)]
pub struct PromiseId(pub(crate) u64);

impl PromiseId {
    /// Generates a new `PromiseId`.
    pub(crate) fn generate() -> PromiseId {
        static COUNTER: AtomicU64 = AtomicU64::new(1);

        PromiseId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PromiseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
