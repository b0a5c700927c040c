//! Identifier generators.
//!
//! A generator is invoked at most once per request, from whichever task is
//! serving it, so implementations must be callable concurrently.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces a fresh identifier for a request that did not supply one.
///
/// Implementations should return a non-empty string that is valid as an HTTP
/// header value. Collision avoidance is the generator's responsibility.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

/// Random UUID v4 in hyphenated lower-case form (36 characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic `{prefix}-{n}` identifiers, starting at 1.
///
/// Unique within one process only. Useful for local debugging and tests.
#[derive(Debug, Default)]
pub struct Sequential {
    prefix: String,
    counter: AtomicU64,
}

impl Sequential {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for Sequential {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        if self.prefix.is_empty() {
            n.to_string()
        } else {
            format!("{}-{n}", self.prefix)
        }
    }
}
