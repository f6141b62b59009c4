//! Sliding-window limiter.

use crate::{RateLimitError, RateLimitErrorKind};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Admits at most `max_requests` requests in any rolling `window`.
///
/// Admission times are kept oldest first. Waiters queue on the internal
/// mutex, so they are admitted in arrival order.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    max_requests: usize,
    window: Duration,
    admitted: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_requests` or `window` is zero.
    pub fn new(max_requests: u32, window: Duration) -> Result<Self, RateLimitError> {
        if max_requests == 0 {
            return Err(RateLimitErrorKind::ZeroBudget.into());
        }
        if window.is_zero() {
            return Err(RateLimitErrorKind::ZeroWindow.into());
        }

        debug!(max_requests, window_secs = window.as_secs_f64(), "Created rate limiter");

        Ok(Self {
            max_requests: max_requests as usize,
            window,
            admitted: Mutex::new(VecDeque::with_capacity(max_requests as usize)),
        })
    }

    /// Request budget per window.
    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Wait until a request may be sent, then record it.
    ///
    /// Returns how long the caller waited.
    #[instrument(skip(self), fields(max_requests = self.max_requests))]
    pub async fn admit(&self) -> Duration {
        let started = Instant::now();
        let mut admitted = self.admitted.lock().await;

        loop {
            let now = Instant::now();
            self.prune(&mut admitted, now);

            if admitted.len() < self.max_requests {
                admitted.push_back(now);
                break;
            }
            let Some(&oldest) = admitted.front() else {
                admitted.push_back(now);
                break;
            };

            let wait = (oldest + self.window).saturating_duration_since(now);
            debug!(
                wait_secs = wait.as_secs_f64(),
                in_window = admitted.len(),
                "Rate limit reached, waiting"
            );
            tokio::time::sleep(wait).await;
        }

        started.elapsed()
    }

    /// Record a request if the budget allows it right now.
    ///
    /// Returns `false` without waiting when the budget is spent or another
    /// caller is currently waiting for admission.
    pub async fn try_admit(&self) -> bool {
        let Ok(mut admitted) = self.admitted.try_lock() else {
            return false;
        };

        let now = Instant::now();
        self.prune(&mut admitted, now);
        if admitted.len() < self.max_requests {
            admitted.push_back(now);
            true
        } else {
            false
        }
    }

    /// Number of admissions still inside the window.
    pub async fn in_window(&self) -> usize {
        let mut admitted = self.admitted.lock().await;
        self.prune(&mut admitted, Instant::now());
        admitted.len()
    }

    /// Drop admissions at or beyond the window boundary.
    fn prune(&self, admitted: &mut VecDeque<Instant>, now: Instant) {
        while let Some(oldest) = admitted.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                admitted.pop_front();
            } else {
                break;
            }
        }
    }
}
