//! Latest-wins frame hand-off.
//!
//! Frames are stateless and independent, so several may be in flight at
//! once; the display must only ever show the most recently *captured*
//! frame's result. [`FrameSlot`] enforces that: results publish with the
//! sequence number of their source frame, and a result older than the
//! one already in the slot is discarded instead of queued. This keeps
//! camera-to-display latency bounded by one frame.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chroma_core::Frame;
use tracing::trace;

/// A single-slot, latest-wins publication cell for filtered frames.
///
/// # Example
///
/// ```rust
/// use chroma_core::Frame;
/// use chroma_ops::FrameSlot;
///
/// let slot = FrameSlot::new();
/// let seq_a = slot.begin();
/// let seq_b = slot.begin();
///
/// // The newer frame lands first; the older result is then stale
/// assert!(slot.publish(seq_b, Frame::new(2, 2).unwrap()));
/// assert!(!slot.publish(seq_a, Frame::new(2, 2).unwrap()));
/// ```
#[derive(Debug, Default)]
pub struct FrameSlot {
    next_seq: AtomicU64,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Sequence of the newest frame ever published.
    latest_seq: u64,
    /// The newest result, if not yet taken.
    frame: Option<Frame>,
}

impl FrameSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a sequence number for a frame about to be processed.
    ///
    /// Sequence numbers are handed out in capture order; call this when
    /// the frame arrives, before processing starts.
    pub fn begin(&self) -> u64 {
        // First handed-out sequence is 1; 0 means "nothing published yet"
        self.next_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Publishes a finished frame.
    ///
    /// Returns `true` if the frame became the latest result, `false` if
    /// it was stale (a newer frame already published) and was dropped.
    pub fn publish(&self, seq: u64, frame: Frame) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if seq < inner.latest_seq {
            trace!(seq, latest = inner.latest_seq, "discarding stale frame");
            return false;
        }
        inner.latest_seq = seq;
        inner.frame = Some(frame);
        true
    }

    /// Takes the latest result, if a new one arrived since the last take.
    pub fn take_latest(&self) -> Option<Frame> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.frame.take()
    }
}
