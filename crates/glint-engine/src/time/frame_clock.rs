use std::time::Instant;

/// Reset-on-read frame clock.
///
/// `restart` returns the seconds elapsed since the previous `restart` (or
/// since `start` for the first read) and rebaselines the clock. This is a
/// stateful, single-consumer measurement: reading it twice in one frame
/// double-counts nothing but splits the frame's time between the two reads,
/// so the second read is near zero. One read per frame is the contract.
///
/// Values are raw; spike clamping (e.g. after a debugger pause) is the
/// caller's decision.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    /// Starts the clock; the first `restart` measures from this moment.
    pub fn start() -> Self {
        Self { last: Instant::now(), frame_index: 0 }
    }

    /// Returns elapsed seconds since the previous read and resets.
    pub fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        self.frame_index = self.frame_index.wrapping_add(1);
        dt
    }

    /// Number of completed reads, one per frame under the usual contract.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_second_read_is_near_zero() {
        let mut clock = FrameClock::start();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let first = clock.restart();
        let second = clock.restart();
        assert!(first >= 0.004, "first read should cover the sleep, got {first}");
        assert!(second < first, "reset-on-read: second read must not re-count");
        assert!(second < 0.05);
    }

    #[test]
    fn frame_index_advances_per_read() {
        let mut clock = FrameClock::start();
        assert_eq!(clock.frame_index(), 0);
        clock.restart();
        clock.restart();
        assert_eq!(clock.frame_index(), 2);
    }
}
