//! Async driver for the gauge tick
//!
//! The engine itself is synchronous; this module owns the background task
//! that calls [`GameSession::tick`] on a fixed cadence. Callers that want
//! deterministic stepping (tests, headless sims) skip this module and call
//! `tick` directly.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::battle::session::GameSession;
use crate::core::error::Result;

/// Shared ownership of a session across the ticker task and callers
#[derive(Clone)]
pub struct SessionHandle {
    pub session: Arc<Mutex<GameSession>>,
}

impl SessionHandle {
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Spawn the tick loop at the session's configured interval
    ///
    /// The loop runs until the returned handle is shut down. Pausing the
    /// scheduler does not stop the task; ticks simply no-op until resumed.
    pub fn spawn_ticker(&self) -> TickerHandle {
        let session = Arc::clone(&self.session);
        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let interval_ms = session.lock().await.config.tick_interval_ms;
            let mut ticker = time::interval(Duration::from_millis(interval_ms));
            // After a stall, resume on the next beat instead of bursting
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        session.lock().await.tick();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }

            tracing::debug!("ticker task stopped");
        });

        TickerHandle { stop_tx, task }
    }
}

/// Handle to a running ticker task
pub struct TickerHandle {
    stop_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Stop the tick loop and wait for the task to finish
    pub async fn shutdown(self) -> Result<()> {
        drop(self.stop_tx);
        self.task.await?;
        Ok(())
    }
}
