//! The injected wall-clock capability. Keeping time behind a trait makes
//! validity-window checks deterministic to test, including the serial
//! arithmetic wraparound scenario.

use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock {
    /// Seconds since the Unix epoch, truncated to 32 bits as DNSSEC rdata
    /// stores it.
    fn now(&self) -> u32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0)
    }
}

/// Test double; also useful for replaying a validation decision at a
/// recorded point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn now(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_fixed_value() {
        let c = FixedClock(0xFFFF_FFFE);
        assert_eq!(c.now(), 0xFFFF_FFFE);
        assert_eq!(c.now(), c.now());
    }

    #[test]
    fn system_clock_is_nonzero_post_epoch() {
        let c = SystemClock;
        assert!(c.now() > 0);
    }
}
