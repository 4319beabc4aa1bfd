//! Periodic, race-free progress publishing for one transfer.

use super::update::{ProgressSink, ProgressUpdate};
use crate::error::Error;
use crate::transfer::{Outcome, Status, Summary, Transfer};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

/// Default interval between two progress updates.
pub const DEFAULT_REFRESH_RATE: Duration = Duration::from_secs(1);

/// Publishes the progress of one [`Transfer`] until it ends.
pub struct ProgressReporter {
    transfer: Arc<Transfer>,
    sink: Arc<dyn ProgressSink>,
    refresh_rate: Duration,
}

impl ProgressReporter {
    pub fn new(transfer: Arc<Transfer>, sink: Arc<dyn ProgressSink>, refresh_rate: Duration) -> Self {
        Self {
            transfer,
            sink,
            refresh_rate,
        }
    }

    /// Publish on every tick until the terminal signal arrives on `done`,
    /// then publish the final update and return the transfer's summary.
    ///
    /// Each wake-up handles either a tick or the terminal signal, never both.
    /// When both are ready the terminal signal wins, so nothing is published
    /// after the final update.
    pub async fn run(self, mut done: oneshot::Receiver<Outcome>) -> Summary {
        let mut ticker = time::interval(self.refresh_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                outcome = &mut done => {
                    let outcome = outcome.unwrap_or_else(|_| self.lost_signal());
                    return self.finish(outcome);
                }
                _ = ticker.tick() => self.tick(),
            }
        }
    }

    fn tick(&self) {
        let update = ProgressUpdate::sample(&self.transfer);
        // The task already ended; its signal is on the way.
        if update.is_terminal() {
            return;
        }
        self.sink.publish(&update);
    }

    fn finish(&self, outcome: Outcome) -> Summary {
        if let Outcome::Failed(error) = outcome {
            self.transfer.fail(error);
        }

        let mut update = ProgressUpdate::sample(&self.transfer);
        if let (Status::Done, Some(total)) = (update.status, update.total) {
            update.bytes = total;
        }

        debug!(
            "{} finished as {} after {} bytes",
            update.label, update.status, update.bytes
        );
        self.sink.publish(&update);

        Summary::new(&self.transfer)
    }

    fn lost_signal(&self) -> Outcome {
        warn!("{} stopped without reporting", self.transfer.label());
        Outcome::Failed(Arc::new(Error::Internal(format!(
            "transfer of {} stopped without reporting an outcome",
            self.transfer.label()
        ))))
    }
}
