//! Blocking delays used as the animation clock.

use core::time::Duration;
use embedded_hal::delay::DelayNs;

/// [`DelayNs`] backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Blocks for `duration` at millisecond resolution.
///
/// Durations longer than `u32::MAX` milliseconds saturate.
pub fn block_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    if millis > 0 {
        delay.delay_ms(millis);
    }
}
