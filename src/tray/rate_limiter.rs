//! Outbound request throttling for the Tray API.
//!
//! Tray allows a fixed number of requests per minute per store. Every call made by
//! this crate is funnelled through one `RateLimiter`, which:
//!
//! - dispatches at most `requests_per_window` calls inside each window,
//! - keeps `min_spacing` between consecutive dispatches even when quota remains,
//! - dispatches strictly in submission order, and
//! - resets the window on a fixed tick counted from its own creation.
//!
//! The limiter is an actor. A single worker task owns the queue and the window
//! counter; handles talk to it over an unbounded channel and get their result back
//! on a oneshot channel. The worker spawns each call onto its own task and never
//! waits for it to finish, so a call may submit further calls without deadlocking.

use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::tray::TrayError;

/// Requests Tray accepts per minute.
pub const DEFAULT_REQUESTS_PER_WINDOW: u32 = 180;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);
pub const DEFAULT_MIN_SPACING: Duration = Duration::from_millis(333);

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub requests_per_window: u32,
    pub window: Duration,
    pub min_spacing: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: DEFAULT_REQUESTS_PER_WINDOW,
            window: DEFAULT_WINDOW,
            min_spacing: DEFAULT_MIN_SPACING,
        }
    }
}

impl RateLimitConfig {
    /// Default window and spacing with a custom per-minute quota.
    pub fn per_minute(requests_per_window: u32) -> Self {
        Self {
            requests_per_window,
            ..Self::default()
        }
    }
}

/// A unit of work waiting for a dispatch slot. The closure owns its result channel.
type QueuedCall = Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send>;

/// Dispatch counter for the current window.
#[derive(Debug)]
struct RateWindow {
    count: u32,
    started_at: Instant,
}

impl RateWindow {
    fn new(now: Instant) -> Self {
        Self {
            count: 0,
            started_at: now,
        }
    }

    fn reset(&mut self, now: Instant) {
        // Resets only ever move the window forward.
        if now >= self.started_at {
            self.count = 0;
            self.started_at = now;
        }
    }
}

/// Handle to the limiter worker. Cloning is cheap; all clones share one queue.
#[derive(Clone)]
pub struct RateLimiter {
    tx: mpsc::UnboundedSender<QueuedCall>,
}

impl RateLimiter {
    /// Creates a limiter and spawns its worker on the current tokio runtime.
    ///
    /// The worker exits once every handle has been dropped and the queue is empty.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn new(config: RateLimitConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(config, rx));
        Self { tx }
    }

    /// Queues `operation` and waits for its result.
    ///
    /// The operation is not started until the limiter dispatches it. Its error, if
    /// any, is returned to this caller only; the queue keeps draining.
    ///
    /// # Arguments
    /// - `operation` - Zero-argument async unit of work
    ///
    /// # Returns
    /// - `Ok(T)` - The operation's own result
    /// - `Err(TrayError)` - The operation failed, or the limiter shut down before
    ///   running it
    pub async fn submit<F, Fut, T>(&self, operation: F) -> Result<T, TrayError>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, TrayError>> + Send + 'static,
        T: Send + 'static,
    {
        let (result_tx, result_rx) = oneshot::channel();

        let call: QueuedCall = Box::new(move || {
            Box::pin(async move {
                let result = operation().await;
                // Caller may have given up waiting.
                let _ = result_tx.send(result);
            })
        });

        self.tx
            .send(call)
            .map_err(|_| TrayError::RequestError("rate limiter has shut down".to_string()))?;

        result_rx.await.map_err(|_| {
            TrayError::RequestError("rate limited call was dropped before completing".to_string())
        })?
    }
}

async fn run_worker(config: RateLimitConfig, mut rx: mpsc::UnboundedReceiver<QueuedCall>) {
    let quota = config.requests_per_window.max(1);
    let created_at = Instant::now();

    let mut queue: VecDeque<QueuedCall> = VecDeque::new();
    let mut window = RateWindow::new(created_at);
    let mut reset = tokio::time::interval_at(created_at + config.window, config.window);
    reset.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut next_dispatch_at = created_at;
    let mut closed = false;

    loop {
        if closed && queue.is_empty() {
            break;
        }

        let can_dispatch = !queue.is_empty() && window.count < quota;

        tokio::select! {
            biased;

            _ = reset.tick() => {
                if !queue.is_empty() && window.count >= quota {
                    tracing::debug!(queued = queue.len(), "Rate limit window reset, resuming dispatch");
                }
                window.reset(Instant::now());
            }

            call = rx.recv(), if !closed => match call {
                Some(call) => queue.push_back(call),
                None => closed = true,
            },

            _ = tokio::time::sleep_until(next_dispatch_at), if can_dispatch => {
                if let Some(call) = queue.pop_front() {
                    let now = Instant::now();
                    window.count += 1;
                    next_dispatch_at = now + config.min_spacing;
                    tokio::spawn(call());

                    if window.count >= quota && !queue.is_empty() {
                        let wait = config
                            .window
                            .saturating_sub(now.saturating_duration_since(window.started_at));
                        tracing::debug!(
                            queued = queue.len(),
                            wait_ms = wait.as_millis() as u64,
                            "Rate limit reached, holding queued calls until the window resets"
                        );
                    }
                }
            }
        }
    }

    tracing::debug!("Rate limiter worker stopped");
}
