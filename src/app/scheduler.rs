//! Render scheduler - the "mark dirty" primitive the provider calls into
//!
//! Requests are queued on an unbounded channel and executed by the app actor
//! strictly in the order they were issued. Nothing is coalesced: two
//! assignments produce two renders.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::messages::{RenderReason, RenderRequest};

/// Receiving end of the render queue, drained by the app actor
pub type RenderQueue = mpsc::UnboundedReceiver<RenderRequest>;

/// Handle used to enqueue render requests
#[derive(Debug, Clone)]
pub struct RenderScheduler {
    tx: mpsc::UnboundedSender<RenderRequest>,
    next_seq: Arc<AtomicU64>,
}

impl RenderScheduler {
    /// Create a scheduler together with the queue it feeds
    pub fn channel() -> (RenderScheduler, RenderQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = RenderScheduler {
            tx,
            next_seq: Arc::new(AtomicU64::new(1)),
        };
        (scheduler, rx)
    }

    /// Enqueue a render request and return its sequence number.
    ///
    /// Requests can't be withdrawn once issued. If the queue has been closed
    /// the request is dropped; the sequence number is still consumed.
    pub fn request(&self, reason: RenderReason) -> u64 {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        if self.tx.send(RenderRequest { seq, reason }).is_err() {
            tracing::warn!(seq, reason = reason.as_str(), "render queue closed, request dropped");
        }
        seq
    }
}
