use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Repeating interval driven by elapsed frame time.
///
/// The host delivers time through [`IntervalTimer::tick`]; there is no
/// background thread, so dropping the timer is an exact cancellation.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
}

impl IntervalTimer {
    /// Starts a fresh countdown. `interval` must be non-zero.
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self { interval, elapsed: Duration::ZERO }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advances the countdown and returns how many whole intervals completed.
    /// The remainder carries over to the next tick.
    /// Saturates at `u32::MAX` intervals for a pathological stall.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        let elapsed = self.elapsed.saturating_add(dt).as_nanos();
        let interval = self.interval.as_nanos();
        let remainder = elapsed % interval;
        self.elapsed = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );
        u32::try_from(elapsed / interval).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn does_not_fire_before_interval() {
        let mut timer = IntervalTimer::new(ms(100));
        assert_eq!(timer.tick(ms(99)), 0);
        assert_eq!(timer.elapsed(), ms(99));
    }

    #[test]
    fn fires_once_per_interval_and_keeps_remainder() {
        let mut timer = IntervalTimer::new(ms(100));
        assert_eq!(timer.tick(ms(60)), 0);
        assert_eq!(timer.tick(ms(60)), 1);
        assert_eq!(timer.elapsed(), ms(20));
        assert_eq!(timer.tick(ms(80)), 1);
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn keeps_configured_interval() {
        let mut timer = IntervalTimer::new(ms(250));
        timer.tick(ms(600));
        assert_eq!(timer.interval(), ms(250));
        assert_eq!(timer.elapsed(), ms(100));
    }

    #[test]
    fn huge_stall_saturates_instead_of_panicking() {
        let mut timer = IntervalTimer::new(Duration::from_nanos(1));
        assert_eq!(timer.tick(Duration::MAX), u32::MAX);
        assert_eq!(timer.tick(Duration::MAX), u32::MAX);
        assert!(timer.elapsed() < timer.interval());
    }

    #[test]
    fn long_frame_fires_multiple_times() {
        let mut timer = IntervalTimer::new(ms(100));
        assert_eq!(timer.tick(ms(350)), 3);
        assert_eq!(timer.elapsed(), ms(50));
    }
}
