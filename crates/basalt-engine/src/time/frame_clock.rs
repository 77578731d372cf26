use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, Default)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick, i.e. the wall-clock cost of
    /// the previous frame including presentation.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The first tick reports the time since construction (or the last
/// [`reset`](FrameClock::reset)). Game logic running during frame N sees the
/// delta between the start of frame N-1 and the start of frame N.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after a long stall (surface reconfigure, suspension) to avoid
    /// one giant delta leaking into camera movement.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;

        let ft = FrameTime {
            dt,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn tick_reports_elapsed_time_of_previous_interval() {
        let mut clock = FrameClock::new();
        sleep(Duration::from_millis(20));
        let ft = clock.tick();
        assert!(ft.dt >= 0.020, "dt {} below slept duration", ft.dt);
        assert!(ft.dt < 10.0, "dt {} implausibly large", ft.dt);
    }

    #[test]
    fn frame_index_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        let c = clock.tick();
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert_eq!(c.frame_index, 2);
    }

    #[test]
    fn reset_rebases_the_delta() {
        let mut clock = FrameClock::new();
        sleep(Duration::from_millis(20));
        clock.reset();
        let ft = clock.tick();
        assert!(ft.dt < 0.020, "reset did not rebase: dt {}", ft.dt);
    }
}
