//! Speed setting and its mapping to an inter-step delay.

use std::time::Duration;

/// Base delay in milliseconds at the slowest setting.
const BASE_MS: u64 = 1010;

/// Milliseconds shaved off per speed unit.
const STEP_MS: u64 = 10;

/// Floor so the fastest setting still yields between steps.
const MIN_DELAY_MS: u64 = 10;

/// Animation speed, 1 (slowest) to 100 (fastest).
///
/// Inverse-mapped to the millisecond pause between steps:
/// `delay = max(10, 1010 - speed * 10)`, so speed 1 pauses a full second
/// and speed 100 pauses 10ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed(u8);

impl Speed {
    /// Slowest setting.
    pub const MIN: Speed = Speed(1);

    /// Fastest setting.
    pub const MAX: Speed = Speed(100);

    /// Create a speed, clamping out-of-range values into `1..=100`.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    /// The raw setting.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The pause between steps at this speed.
    pub fn delay(&self) -> Duration {
        let ms = BASE_MS.saturating_sub(u64::from(self.0) * STEP_MS);
        Duration::from_millis(ms.max(MIN_DELAY_MS))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slowest_delay() {
        assert_eq!(Speed::MIN.delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_fastest_delay() {
        assert_eq!(Speed::MAX.delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(Speed::new(0), Speed::MIN);
        assert_eq!(Speed::new(255), Speed::MAX);
    }

    #[test]
    fn test_faster_never_pauses_longer() {
        let mut last = Speed::new(1).delay();
        for v in 2..=100 {
            let delay = Speed::new(v).delay();
            assert!(delay <= last, "speed {} slower than {}", v, v - 1);
            last = delay;
        }
    }
}
