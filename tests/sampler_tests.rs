//! Coalescing behavior of the refresh-bound sampler.

use face_tracker::input::{FrameSampler, ManualRefresh, RefreshSignal};
use face_tracker::types::PointerSample;

struct CountingSignal {
    requests: u32,
}

impl RefreshSignal for CountingSignal {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

#[test]
fn many_events_one_flush_last_coordinates_win() {
    let mut sampler = FrameSampler::new();
    let mut signal = CountingSignal { requests: 0 };

    for i in 0..1000 {
        sampler.push(PointerSample::new(i as f64, 2.0 * i as f64), &mut signal);
    }

    // Exactly one refresh request for the whole burst.
    assert_eq!(signal.requests, 1);

    // The flush sees only the last event.
    assert_eq!(sampler.take(), Some(PointerSample::new(999.0, 1998.0)));

    // And there is nothing further to flush.
    assert_eq!(sampler.take(), None);
}

#[test]
fn flush_reads_target_at_flush_time() {
    let mut sampler = FrameSampler::new();
    let mut signal = ManualRefresh::new();

    sampler.push(PointerSample::new(1.0, 1.0), &mut signal);
    // A later event before the refresh replaces the target in place.
    sampler.push(PointerSample::new(7.0, 7.0), &mut signal);

    assert!(signal.take_request());
    assert_eq!(sampler.take(), Some(PointerSample::new(7.0, 7.0)));
}

#[test]
fn alternating_push_flush_schedules_each_time() {
    let mut sampler = FrameSampler::new();
    let mut signal = CountingSignal { requests: 0 };

    for i in 0..5 {
        sampler.push(PointerSample::new(i as f64, 0.0), &mut signal);
        assert!(sampler.take().is_some());
    }
    assert_eq!(signal.requests, 5);
}
