//! Named lighting scenes and the library that plays them.

use crate::color::PackedColor;
use crate::relay::SunRelay;
use crate::sequence::ColorSequence;
use crate::sequencer::SceneSequencer;
use crate::strip::PixelStrip;
use crate::types::{RenderOptions, SceneError, SequenceError, TransitionStyle};
use core::time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;
use log::info;

/// Maximum number of colors in a built-in scene sequence.
pub const SCENE_CAPACITY: usize = 4;

/// Color sequence type used by the built-in scenes.
pub type SceneColors = ColorSequence<SCENE_CAPACITY>;

/// Full white at full brightness.
pub const WHITE: PackedColor = PackedColor::rgb(255, 255, 255);

/// Black at zero brightness.
pub const OFF: PackedColor = PackedColor::OFF;

/// The four warm "day-light" colors, at full brightness.
pub fn daylight() -> Result<SceneColors, SequenceError> {
    ColorSequence::builder()
        .color(PackedColor::rgb(250, 255, 0))?
        .color(PackedColor::rgb(255, 205, 0))?
        .color(PackedColor::rgb(205, 205, 0))?
        .color(PackedColor::rgb(200, 255, 0))?
        .build()
}

/// Three entries of the magenta dusk hue at `brightness`.
pub fn dusk(brightness: u8) -> Result<SceneColors, SequenceError> {
    ColorSequence::repeat(PackedColor::pack(255, 1, 255, brightness), 3)
}

/// A scene that can be requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Sun off, strip full white.
    Dawn,
    /// Strip white, sun off, slow fade through the day-light colors.
    Sunset,
    /// Sun off, snap to day-light, fade to dim magenta, then off.
    Nightfall,
    /// Sun off, strip fully off.
    Night,
    /// Strip set to an explicit color, channels in command-line order.
    Color {
        red: u8,
        blue: u8,
        green: u8,
        brightness: u8,
    },
}

impl core::fmt::Display for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Scene::Dawn => write!(f, "dawn"),
            Scene::Sunset => write!(f, "sunset"),
            Scene::Nightfall => write!(f, "nightfall"),
            Scene::Night => write!(f, "night"),
            Scene::Color {
                red,
                blue,
                green,
                brightness,
            } => write!(f, "color({red}, {blue}, {green}, {brightness})"),
        }
    }
}

/// Plays scenes on a strip and the sun relay.
///
/// Holds no state between scenes beyond what is on the hardware.
pub struct SceneLibrary<S: PixelStrip, P: StatefulOutputPin, D: DelayNs> {
    sequencer: SceneSequencer<S, D>,
    sun: SunRelay<P>,
    daylight: SceneColors,
    dusk_bright: SceneColors,
    dusk_dim: SceneColors,
}

impl<S: PixelStrip, P: StatefulOutputPin, D: DelayNs> SceneLibrary<S, P, D> {
    /// Brightness of the first nightfall fade.
    pub const DUSK_BRIGHT: u8 = 100;
    /// Brightness of the second nightfall fade.
    pub const DUSK_DIM: u8 = 1;

    /// Creates a library over an initialised strip, relay pin and delay.
    pub fn new(strip: S, sun_pin: P, delay: D) -> Result<Self, SequenceError> {
        Ok(Self {
            sequencer: SceneSequencer::new(strip, delay),
            sun: SunRelay::new(sun_pin),
            daylight: daylight()?,
            dusk_bright: dusk(Self::DUSK_BRIGHT)?,
            dusk_dim: dusk(Self::DUSK_DIM)?,
        })
    }

    /// Dispatches to the operation named by `scene`.
    pub fn play(&mut self, scene: Scene) -> Result<(), SceneError> {
        info!("playing {scene}");
        match scene {
            Scene::Dawn => self.dawn(),
            Scene::Sunset => self.sunset(),
            Scene::Nightfall => self.nightfall(),
            Scene::Night => self.night(),
            Scene::Color {
                red,
                blue,
                green,
                brightness,
            } => self.set_color(red, blue, green, brightness),
        }?;
        info!("{scene} done");
        Ok(())
    }

    /// Sun off, every pixel full white.
    pub fn dawn(&mut self) -> Result<(), SceneError> {
        self.sun.turn_off()?;
        self.sequencer.set_all(WHITE)
    }

    /// Every pixel white, sun off, then a one-second-per-step fade through
    /// the day-light colors.
    pub fn sunset(&mut self) -> Result<(), SceneError> {
        self.sequencer.set_all(WHITE)?;
        self.sun.turn_off()?;
        let options = RenderOptions::default().with_delay(Duration::from_secs(1));
        self.sequencer.render_sequence(&self.daylight, options)
    }

    /// Sun off, one instant pass of day-light, fade to magenta at
    /// brightness 100 and then 1, finally every pixel off.
    pub fn nightfall(&mut self) -> Result<(), SceneError> {
        self.sun.turn_off()?;
        let snap = RenderOptions::default()
            .with_fade_steps(2)
            .with_transition(TransitionStyle::Step);
        self.sequencer.render_sequence(&self.daylight, snap)?;
        self.sequencer
            .render_sequence(&self.dusk_bright, RenderOptions::default())?;
        self.sequencer
            .render_sequence(&self.dusk_dim, RenderOptions::default())?;
        self.sequencer.set_all(OFF)
    }

    /// Sun off, every pixel black at zero brightness.
    pub fn night(&mut self) -> Result<(), SceneError> {
        self.sun.turn_off()?;
        self.sequencer.set_all(OFF)
    }

    /// Every pixel set to the given color. Leaves the sun alone.
    ///
    /// Channels arrive red, blue, green, matching the wiring of the strip,
    /// so `set_color(10, 20, 30, 255)` stores `FF140A1E`.
    pub fn set_color(
        &mut self,
        red: u8,
        blue: u8,
        green: u8,
        brightness: u8,
    ) -> Result<(), SceneError> {
        self.sequencer
            .set_all(PackedColor::pack(red, green, blue, brightness))
    }

    /// Returns the sequencer.
    pub fn sequencer(&self) -> &SceneSequencer<S, D> {
        &self.sequencer
    }

    /// Returns the sun relay.
    pub fn sun_mut(&mut self) -> &mut SunRelay<P> {
        &mut self.sun
    }

    /// Returns a reference to the underlying strip.
    pub fn strip(&self) -> &S {
        self.sequencer.strip()
    }
}
