/// Optional frame pacing.
///
/// The loop has no timing contract of its own; a pacer only adds a pause so
/// frames start at most once per `interval_ms`. Time is supplied by the
/// caller in milliseconds, which keeps this deterministic under test.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval_ms: u64,
    last_frame_ms: u64,
    has_frame: bool,
}

impl FramePacer {
    /// `interval_ms == 0` disables pacing.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_frame_ms: 0,
            has_frame: false,
        }
    }

    /// Record that a frame started at `now_ms`.
    pub fn mark(&mut self, now_ms: u64) {
        self.has_frame = true;
        self.last_frame_ms = now_ms;
    }

    /// How long to wait before the next frame may start.
    ///
    /// - No frame yet, or pacing disabled: `0`.
    /// - Otherwise the rest of the interval since the last frame, or `0` once
    ///   it has elapsed.
    pub fn remaining(&self, now_ms: u64) -> u64 {
        if !self.has_frame || self.interval_ms == 0 {
            return 0;
        }
        let elapsed = now_ms.saturating_sub(self.last_frame_ms);
        self.interval_ms.saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_never_waits() {
        let pacer = FramePacer::new(50);
        assert_eq!(pacer.remaining(0), 0);
        assert_eq!(pacer.remaining(1234), 0);
    }

    #[test]
    fn waits_for_rest_of_interval() {
        let mut pacer = FramePacer::new(50);
        pacer.mark(100);
        assert_eq!(pacer.remaining(100), 50);
        assert_eq!(pacer.remaining(120), 30);
        assert_eq!(pacer.remaining(150), 0);
        assert_eq!(pacer.remaining(400), 0);
    }

    #[test]
    fn zero_interval_is_uncapped() {
        let mut pacer = FramePacer::new(0);
        pacer.mark(10);
        assert_eq!(pacer.remaining(10), 0);
    }

    #[test]
    fn clock_going_backwards_waits_full_interval() {
        let mut pacer = FramePacer::new(40);
        pacer.mark(100);
        assert_eq!(pacer.remaining(90), 40);
    }
}
