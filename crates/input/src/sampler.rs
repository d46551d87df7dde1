//! Single-slot sampler bound to a refresh signal.
//!
//! Raw pointer events can arrive far faster than the display refreshes. The
//! sampler keeps only the latest target (newer samples replace older ones,
//! intermediate samples are dropped) and requests at most one refresh while a
//! flush is outstanding. The flush reads the target at the time it runs, not
//! at the time it was requested.
//!
//! The signal is a trait so hosts can plug in a real repaint scheduler while
//! tests drive flushes by hand.

use crate::types::PointerSample;

/// Scheduler hook for "run a flush before the next repaint".
pub trait RefreshSignal {
    fn request_frame(&mut self);
}

/// Edge-triggered signal for hosts that poll on a fixed tick.
///
/// Requests collapse into a single flag; the host consumes it once per tick
/// with [`ManualRefresh::take_request`]. Also convenient in tests, where the
/// tick is driven by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualRefresh {
    requested: bool,
}

impl ManualRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the request flag, returning whether a flush was requested.
    pub fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

impl RefreshSignal for ManualRefresh {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}

/// Latest-value debouncer for pointer samples.
///
/// State machine per widget instance: `Idle` (no flush outstanding), then a
/// raw event moves to `Scheduled` and requests one refresh; further events
/// while `Scheduled` only overwrite the target. [`FrameSampler::take`]
/// returns to `Idle`.
#[derive(Debug, Clone, Default)]
pub struct FrameSampler {
    target: Option<PointerSample>,
    pending: bool,
}

impl FrameSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw sample and request a refresh if none is outstanding.
    pub fn push(&mut self, sample: PointerSample, signal: &mut dyn RefreshSignal) {
        self.target = Some(sample);
        if !self.pending {
            self.pending = true;
            signal.request_frame();
        }
    }

    /// Seed the target without scheduling a flush.
    ///
    /// Used for the synchronous center sample at widget start, which is
    /// processed immediately rather than deferred.
    pub fn seed(&mut self, sample: PointerSample) {
        self.target = Some(sample);
    }

    /// Flush: consume the pending flag and return the latest target.
    ///
    /// Returns `None` when no flush is outstanding. The target itself is kept
    /// so the next flush-after-push still sees a position.
    pub fn take(&mut self) -> Option<PointerSample> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.target
    }

    /// Whether a flush is currently outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Most recently recorded target, flushed or not.
    pub fn latest(&self) -> Option<PointerSample> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSignal {
        requests: u32,
    }

    impl RefreshSignal for CountingSignal {
        fn request_frame(&mut self) {
            self.requests += 1;
        }
    }

    #[test]
    fn burst_of_events_requests_one_refresh() {
        let mut sampler = FrameSampler::new();
        let mut signal = CountingSignal::default();

        for i in 0..100 {
            sampler.push(PointerSample::new(i as f64, 0.0), &mut signal);
        }

        assert_eq!(signal.requests, 1);
        assert_eq!(sampler.take(), Some(PointerSample::new(99.0, 0.0)));
    }

    #[test]
    fn take_without_push_is_none() {
        let mut sampler = FrameSampler::new();
        assert_eq!(sampler.take(), None);
    }

    #[test]
    fn take_clears_pending_but_keeps_target() {
        let mut sampler = FrameSampler::new();
        let mut signal = CountingSignal::default();

        sampler.push(PointerSample::new(3.0, 4.0), &mut signal);
        assert!(sampler.is_pending());
        assert_eq!(sampler.take(), Some(PointerSample::new(3.0, 4.0)));
        assert!(!sampler.is_pending());

        // No new push: nothing to flush, but the target survives.
        assert_eq!(sampler.take(), None);
        assert_eq!(sampler.latest(), Some(PointerSample::new(3.0, 4.0)));
    }

    #[test]
    fn push_after_flush_schedules_again() {
        let mut sampler = FrameSampler::new();
        let mut signal = CountingSignal::default();

        sampler.push(PointerSample::new(1.0, 1.0), &mut signal);
        sampler.take();
        sampler.push(PointerSample::new(2.0, 2.0), &mut signal);

        assert_eq!(signal.requests, 2);
        assert_eq!(sampler.take(), Some(PointerSample::new(2.0, 2.0)));
    }

    #[test]
    fn seed_does_not_schedule() {
        let mut sampler = FrameSampler::new();
        sampler.seed(PointerSample::new(9.0, 9.0));
        assert!(!sampler.is_pending());
        assert_eq!(sampler.take(), None);
        assert_eq!(sampler.latest(), Some(PointerSample::new(9.0, 9.0)));
    }

    #[test]
    fn manual_refresh_is_edge_triggered() {
        let mut sampler = FrameSampler::new();
        let mut signal = ManualRefresh::new();

        sampler.push(PointerSample::new(0.0, 0.0), &mut signal);
        assert!(signal.is_requested());
        assert!(signal.take_request());
        assert!(!signal.take_request());
    }
}
