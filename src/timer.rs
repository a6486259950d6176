// File: ./src/timer.rs
// Scheduled-task handle for the refresh/cycle loops, so the TUI can cancel
// them on teardown instead of leaking ambient timers.
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

pub struct Repeating {
    handle: JoinHandle<()>,
}

impl Repeating {
    /// Run `tick` now and then once per `period` until cancelled.
    pub fn spawn<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                tick().await;
            }
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for Repeating {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
