//! Fire-and-forget dispatch in front of a blocking sink.
//!
//! `ChannelAuditHook` decouples the evaluator from the audit sink's own
//! latency: `record()` clones the decision onto an unbounded channel and
//! returns immediately, and a worker thread drains the channel into the
//! wrapped sink.  A single worker preserves decision order.
//!
//! The hook never raises into the evaluator: a failed send (worker gone)
//! and a failed downstream write are both counted, never surfaced.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    mpsc, Arc,
};
use std::thread;

use tracing::{info, warn};

use stockgate_contracts::{decision::Decision, error::GateResult};
use stockgate_engine::sink::DecisionSink;

/// A non-blocking `DecisionSink` adapter.
///
/// Dropping the hook closes the channel, drains whatever is queued into the
/// wrapped sink, and joins the worker.  Call [`shutdown`](Self::shutdown)
/// instead to also learn how many decisions were dropped.
pub struct ChannelAuditHook {
    /// `Some` for the hook's whole life; taken on shutdown so the worker's
    /// receive loop terminates.
    tx: Option<mpsc::Sender<Decision>>,
    dropped: Arc<AtomicU64>,
    worker: Option<thread::JoinHandle<()>>,
}

impl ChannelAuditHook {
    /// Spawn a worker thread draining decisions into `sink`.
    pub fn spawn(sink: Box<dyn DecisionSink>) -> Self {
        let (tx, rx) = mpsc::channel::<Decision>();
        let dropped = Arc::new(AtomicU64::new(0));
        let worker_dropped = Arc::clone(&dropped);

        let worker = thread::spawn(move || {
            for decision in rx {
                if let Err(error) = sink.record(&decision) {
                    worker_dropped.fetch_add(1, Ordering::Relaxed);
                    warn!(%error, "audit sink rejected decision");
                }
            }
            info!("audit worker drained");
        });

        Self {
            tx: Some(tx),
            dropped,
            worker: Some(worker),
        }
    }

    /// How many decisions were dropped so far (failed sends plus failed
    /// downstream writes).
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Close the channel, drain the queue, join the worker, and return the
    /// final dropped count.
    pub fn shutdown(mut self) -> u64 {
        self.close();
        self.dropped.load(Ordering::Relaxed)
    }

    fn close(&mut self) {
        // Dropping the sender ends the worker's receive loop once the queue
        // is empty.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for ChannelAuditHook {
    fn drop(&mut self) {
        self.close();
    }
}

impl DecisionSink for ChannelAuditHook {
    /// Enqueue the decision and return immediately.
    ///
    /// Never blocks and never returns an error; if the worker is gone the
    /// decision is counted as dropped.
    fn record(&self, decision: &Decision) -> GateResult<()> {
        let Some(tx) = &self.tx else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return Ok(());
        };

        if tx.send(decision.clone()).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            warn!("audit worker gone, decision dropped");
        }

        Ok(())
    }
}
