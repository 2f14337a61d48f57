//! # Route
//!
//! An unbounded FIFO with a terminal closed state.
//!
//! Enqueue never blocks. Dequeue waits for a value or for closure. Once
//! closed, every pending and future dequeue returns [`RouteError::Closed`]
//! even if values remain buffered, so subscription loops and timed-out
//! callers observe shutdown promptly instead of draining stale traffic.

use crate::errors::RouteError;
use dag_wire::Command;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

/// A per-Command logical queue.
#[derive(Debug)]
pub struct Route<T> {
    /// `None` for the outgoing queue.
    command: Option<Command>,
    queue: Mutex<VecDeque<T>>,
    notify: Notify,
    closed: AtomicBool,
}

impl<T> Route<T> {
    /// Inbound route carrying messages of one Command.
    pub(crate) fn for_command(command: Command) -> Self {
        Self::with_command(Some(command))
    }

    /// The outgoing queue, which carries every Command.
    pub(crate) fn outgoing() -> Self {
        Self::with_command(None)
    }

    fn with_command(command: Option<Command>) -> Self {
        Self {
            command,
            queue: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// The Command this route carries, or `None` for the outgoing queue.
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        self.command
    }

    /// Append a value and wake one waiting dequeuer.
    pub fn enqueue(&self, value: T) -> Result<(), RouteError> {
        if self.is_closed() {
            return Err(RouteError::Closed);
        }
        self.queue.lock().push_back(value);
        self.notify.notify_one();
        Ok(())
    }

    /// Wait for the next value.
    pub async fn dequeue(&self) -> Result<T, RouteError> {
        loop {
            // Register interest before checking state so a concurrent
            // enqueue or close between the check and the await is not lost.
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(value) = self.try_dequeue()? {
                return Ok(value);
            }
            notified.await;
        }
    }

    /// Wait for the next value for at most `timeout`.
    ///
    /// A timeout leaves the route open; a value arriving later stays queued
    /// for the next dequeuer.
    pub async fn dequeue_with_timeout(&self, timeout: Duration) -> Result<T, RouteError> {
        tokio::time::timeout(timeout, self.dequeue())
            .await
            .map_err(|_| RouteError::Timeout(timeout))?
    }

    /// Take the next value without waiting.
    pub fn try_dequeue(&self) -> Result<Option<T>, RouteError> {
        if self.is_closed() {
            return Err(RouteError::Closed);
        }
        Ok(self.queue.lock().pop_front())
    }

    /// Close the route and wake every waiter. Idempotent.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of buffered values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
