//! Fixed-delay debouncing for filter edits
//!
//! The interactive events browser applies filter changes only after the
//! input has been quiet for the configured delay, so a burst of edits
//! costs one recomputation. Only the latest pushed value survives.

use std::time::Duration;

use tokio::time::Instant;

/// Coalesces rapid updates into one delayed delivery
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Record a new value and restart the quiet-delay clock
    pub fn push(&mut self, value: T) {
        self.pending = Some(value);
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Whether nothing is waiting to be delivered
    pub fn is_idle(&self) -> bool {
        self.deadline.is_none()
    }

    /// Wait out the quiet delay and yield the latest value
    ///
    /// Pends forever while idle, which makes it safe to park in a
    /// `select!` arm next to the input stream. Cancel-safe: dropping the
    /// future before the deadline leaves the pending value in place.
    pub async fn settled(&mut self) -> T {
        loop {
            match self.deadline {
                Some(deadline) => {
                    tokio::time::sleep_until(deadline).await;
                    self.deadline = None;
                    if let Some(value) = self.pending.take() {
                        return value;
                    }
                }
                None => std::future::pending::<()>().await,
            }
        }
    }
}
