//! Search limits and cooperative cancellation for engines.
//!
//! Engines run off the authoritative board on clones, so stopping one is just
//! a matter of telling it to give up and never reading its answer. The
//! [`CancelToken`] carries that signal; engines check it at every node.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Search limits handed to an engine for a single move.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Raised when the caller no longer wants the result
    pub cancel: CancelToken,
}

impl SearchLimits {
    /// Create limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            cancel: CancelToken::new(),
        }
    }

    /// Create limits sharing a caller-owned cancellation token.
    pub fn with_cancel(depth: u8, cancel: CancelToken) -> Self {
        Self { depth, cancel }
    }

    /// Check if search should stop.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Thread-safe stop flag shared between a search and whoever started it.
///
/// Cloning is cheap and every clone observes the same flag. `is_cancelled()`
/// is a relaxed atomic load so it can be called on every node.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    stopped: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the search to stop as soon as possible.
    pub fn cancel(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
