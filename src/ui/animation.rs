//! Mount animations
//!
//! Panels marked to fade in go from fully transparent to opaque over a fixed
//! duration after the dashboard first appears.

#[cfg(test)]
use mockall::automock;
use std::time::{Duration, Instant};

/// Source of the current time, replaceable in tests.
#[cfg_attr(test, automock)]
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Linear opacity ramp starting at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeIn {
    mounted_at: Instant,
    duration: Duration,
}

impl FadeIn {
    pub fn on_mount(mounted_at: Instant, duration: Duration) -> Self {
        Self {
            mounted_at,
            duration,
        }
    }

    /// Opacity in `[0, 1]` at `now`.
    pub fn opacity(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.mounted_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.opacity(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_ramps_linearly() {
        let start = Instant::now();
        let fade = FadeIn::on_mount(start, Duration::from_millis(600));

        assert_eq!(fade.opacity(start), 0.0);
        assert!((fade.opacity(start + Duration::from_millis(300)) - 0.5).abs() < 1e-9);
        assert_eq!(fade.opacity(start + Duration::from_secs(5)), 1.0);
        assert!(!fade.is_complete(start + Duration::from_millis(599)));
        assert!(fade.is_complete(start + Duration::from_millis(600)));
    }

    #[test]
    fn test_zero_duration_is_opaque() {
        let start = Instant::now();
        let fade = FadeIn::on_mount(start, Duration::ZERO);
        assert_eq!(fade.opacity(start), 1.0);
    }

    #[test]
    fn test_mock_clock_drives_opacity() {
        let start = Instant::now();
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .times(1)
            .return_const(start + Duration::from_millis(150));

        let fade = FadeIn::on_mount(start, Duration::from_millis(600));
        assert!((fade.opacity(clock.now()) - 0.25).abs() < 1e-9);
    }
}
