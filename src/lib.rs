#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PackedColor`**: A pixel as the strip driver stores it, one 32-bit word
//! - **`fade_channel`**: One step of a linear channel fade with overshoot snapping
//! - **`PixelStrip`**: Trait to implement for your LED strip driver
//! - **`StripRenderer`**: Sets or fades single pixels in the strip buffer
//! - **`ColorSequence`**: Non-empty list of colors spread across the strip
//! - **`SceneSequencer`**: Renders a sequence over a number of fade passes
//! - **`SunRelay`**: The active-low auxiliary relay, over any embedded-hal pin
//! - **`SceneLibrary`**: Dawn, sunset, nightfall, night and explicit color scenes
//!
//! All interpolation is linear in raw 0-255 channel space.

pub mod color;
pub mod config;
pub mod fade;
pub mod hardware;
pub mod relay;
pub mod scene;
pub mod sequence;
pub mod sequencer;
pub mod strip;
pub mod time;
pub mod types;

pub use color::{Channels, PackedColor, pack_for_strip};
pub use config::StripConfig;
pub use fade::{FadeStep, fade_channel};
pub use relay::SunRelay;
pub use scene::{Scene, SceneLibrary};
pub use sequence::{ColorSequence, SequenceBuilder};
pub use sequencer::SceneSequencer;
pub use strip::{PixelStrip, StripRenderer};
pub use time::StdDelay;
pub use types::{RenderOptions, SceneError, SequenceError, TransitionStyle};
