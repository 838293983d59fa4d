//! Core types for rendering passes and their errors.

use core::time::Duration;
use embedded_hal::digital::ErrorKind;
use thiserror::Error;

/// How each pass moves pixels toward their target color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionStyle {
    /// Write the target color directly on every pass.
    Step,

    /// Fade every channel from the pixel's current value toward the target.
    #[default]
    Linear,
}

/// Parameters of one [`render_sequence`](crate::SceneSequencer::render_sequence) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Blocking pause after every flushed pass.
    pub delay: Duration,

    /// Number of steps the transition is divided into. Passes run for
    /// steps `1..fade_steps`, so `2` means a single pass.
    pub fade_steps: u32,

    /// Fade or instant set.
    pub transition: TransitionStyle,
}

impl RenderOptions {
    /// Default pause between passes.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    /// Default number of fade steps.
    pub const DEFAULT_FADE_STEPS: u32 = 255;

    /// A single instant pass.
    pub const fn instant() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            fade_steps: 2,
            transition: TransitionStyle::Step,
        }
    }

    /// Sets the pause between passes.
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the number of fade steps.
    pub const fn with_fade_steps(mut self, fade_steps: u32) -> Self {
        self.fade_steps = fade_steps;
        self
    }

    /// Sets the transition style.
    pub const fn with_transition(mut self, transition: TransitionStyle) -> Self {
        self.transition = transition;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            fade_steps: Self::DEFAULT_FADE_STEPS,
            transition: TransitionStyle::Linear,
        }
    }
}

/// Sequence validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// No colors provided.
    #[error("sequence must have at least one color")]
    EmptySequence,

    /// Sequence capacity exceeded.
    #[error("sequence capacity exceeded")]
    CapacityExceeded,
}

/// Hardware failures while playing a scene. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Flushing the pixel buffer to the strip failed.
    #[error("strip flush failed: {0}")]
    Strip(String),

    /// Reading or writing the sun relay pin failed.
    #[error("sun relay I/O failed: {0:?}")]
    Relay(ErrorKind),
}
