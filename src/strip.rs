//! Pixel buffer abstraction and the per-pixel renderer.
//!
//! [`PixelStrip`] is the seam to the LED driver: an addressable buffer of
//! [`PackedColor`] slots plus a flush. [`StripRenderer`] writes single pixels
//! into that buffer, either directly or one fade step at a time.

use crate::color::{Channels, PackedColor, pack_for_strip};
use crate::fade::{FadeStep, fade_channel};
use crate::types::SceneError;
use log::trace;

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your driver. Writes land in an in-memory buffer and
/// only reach the LEDs on [`show`](PixelStrip::show).
pub trait PixelStrip {
    /// Error returned by a failed flush.
    type Error: core::fmt::Debug;

    /// Number of pixels on the strip.
    fn num_pixels(&self) -> usize;

    /// Current buffer value at `index`.
    ///
    /// Implementations panic when `index` is out of range.
    fn pixel_color(&self, index: usize) -> PackedColor;

    /// Stores `color` at `index` without flushing.
    ///
    /// Implementations panic when `index` is out of range.
    fn set_pixel_color(&mut self, index: usize, color: PackedColor);

    /// Pushes the buffer out to the LEDs.
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// Writes resolved colors into a [`PixelStrip`] buffer.
pub struct StripRenderer<S: PixelStrip> {
    strip: S,
}

impl<S: PixelStrip> StripRenderer<S> {
    /// Wraps an initialised strip.
    pub fn new(strip: S) -> Self {
        Self { strip }
    }

    /// Number of pixels on the underlying strip.
    pub fn num_pixels(&self) -> usize {
        self.strip.num_pixels()
    }

    /// Writes `color` to one pixel through the strip repack. Does not flush.
    pub fn set_pixel(&mut self, index: usize, color: PackedColor) {
        self.strip.set_pixel_color(index, pack_for_strip(color.unpack()));
    }

    /// Moves one pixel a single fade step from its current buffer value
    /// toward `target`. Does not flush.
    pub fn fade_pixel_to(&mut self, index: usize, target: PackedColor, fade: FadeStep) {
        let current = self.strip.pixel_color(index).unpack();
        let target = target.unpack();
        let FadeStep { step, total } = fade;

        let red = fade_channel(target.red, current.red, step, total);
        let green = fade_channel(target.green, current.green, step, total);
        let blue = fade_channel(target.blue, current.blue, step, total);
        let alpha = fade_channel(target.alpha, current.alpha, step, total);

        trace!("{step} : {index} - r:{red} g:{green} b:{blue} a:{alpha}");

        let faded = Channels::new(red, green, blue, alpha);
        self.strip.set_pixel_color(index, pack_for_strip(faded));
    }

    /// Stores `color` as-is in every pixel, flushing after each one.
    ///
    /// Unlike [`set_pixel`](Self::set_pixel) the word is not repacked.
    pub fn set_all(&mut self, color: PackedColor) -> Result<(), SceneError> {
        for index in 0..self.strip.num_pixels() {
            self.strip.set_pixel_color(index, color);
            self.show()?;
        }
        Ok(())
    }

    /// Flushes the buffer.
    pub fn show(&mut self) -> Result<(), SceneError> {
        self.strip
            .show()
            .map_err(|err| SceneError::Strip(format!("{err:?}")))
    }

    /// Returns a reference to the underlying strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }
}
