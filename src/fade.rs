//! Per-channel linear fading in raw 0-255 space.

use log::trace;

/// Position within an animated transition.
///
/// Rendered steps run from `1` to `total - 1`; step `total` itself is never
/// drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeStep {
    /// Current step, `1..total`.
    pub step: u32,
    /// Number of steps the transition is divided into.
    pub total: u32,
}

impl FadeStep {
    /// Every rendered step of a `total`-step transition, in order.
    ///
    /// Yields nothing when `total < 2`.
    pub fn steps(total: u32) -> impl Iterator<Item = FadeStep> {
        (1..total).map(move |step| FadeStep { step, total })
    }
}

/// Interpolates one channel from `start` toward `target`.
///
/// The intermediate value is `start + (target - start) / total_steps * step`,
/// truncated toward zero. It snaps to `target` when it leaves 0-255 or when
/// it has passed `target` in the direction of travel.
///
/// # Panics
/// Panics if `total_steps` is zero.
pub fn fade_channel(target: u8, start: u8, step: u32, total_steps: u32) -> u8 {
    assert!(total_steps > 0, "fade needs at least one step");

    let target_i = i64::from(target);
    let factor = (target_i - i64::from(start)) as f64 / f64::from(total_steps);
    let raw = (f64::from(start) + factor * f64::from(step)) as i64;
    trace!("factor={factor} raw={raw}");

    // Overshoot above is only checked while rising, below only while falling.
    let overshoot_high = raw > 255 || (raw > target_i && factor > 0.0);
    let overshoot_low = raw < 0 || (raw < target_i && factor < 0.0);

    if overshoot_high || overshoot_low {
        target
    } else {
        raw as u8
    }
}
