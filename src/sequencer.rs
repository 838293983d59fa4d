//! Multi-pass rendering of color sequences across the whole strip.
//!
//! Provides [`SceneSequencer`], which spreads a [`ColorSequence`] over the
//! strip in contiguous blocks and walks it through a fixed number of fade
//! steps, flushing once per pass and blocking between passes.

use crate::color::PackedColor;
use crate::fade::FadeStep;
use crate::sequence::ColorSequence;
use crate::strip::{PixelStrip, StripRenderer};
use crate::time::block_for;
use crate::types::{RenderOptions, SceneError, TransitionStyle};
use embedded_hal::delay::DelayNs;
use log::debug;

/// Returns the sequence color assigned to `pixel` on a strip of `num_pixels`.
///
/// The strip is divided into `num_pixels / colors.len()` pixels per color,
/// in order. The remainder left by the integer division takes the last color.
pub fn color_for_pixel<const N: usize>(
    colors: &ColorSequence<N>,
    pixel: usize,
    num_pixels: usize,
) -> PackedColor {
    let pixels_per_color = num_pixels / colors.len();
    if pixel < pixels_per_color * colors.len() {
        colors.colors()[pixel / pixels_per_color]
    } else {
        colors.last()
    }
}

/// Renders color sequences onto a strip, one fade step per pass.
///
/// # Type Parameters
/// * `S` - Strip implementation type
/// * `D` - Delay implementation type
pub struct SceneSequencer<S: PixelStrip, D: DelayNs> {
    renderer: StripRenderer<S>,
    delay: D,
}

impl<S: PixelStrip, D: DelayNs> SceneSequencer<S, D> {
    /// Creates a sequencer over an initialised strip.
    pub fn new(strip: S, delay: D) -> Self {
        Self {
            renderer: StripRenderer::new(strip),
            delay,
        }
    }

    /// Renders `colors` across the strip.
    ///
    /// Runs one pass per fade step in `1..options.fade_steps`. Every pass
    /// writes every pixel, flushes once, then blocks for `options.delay`.
    /// With [`TransitionStyle::Step`] the step count only controls how many
    /// passes run.
    pub fn render_sequence<const N: usize>(
        &mut self,
        colors: &ColorSequence<N>,
        options: RenderOptions,
    ) -> Result<(), SceneError> {
        let num_pixels = self.renderer.num_pixels();

        for fade in FadeStep::steps(options.fade_steps) {
            debug!(
                "pass {}/{} over {} pixels, {} colors",
                fade.step,
                fade.total - 1,
                num_pixels,
                colors.len()
            );

            for pixel in 0..num_pixels {
                let color = color_for_pixel(colors, pixel, num_pixels);
                match options.transition {
                    TransitionStyle::Linear => self.renderer.fade_pixel_to(pixel, color, fade),
                    TransitionStyle::Step => self.renderer.set_pixel(pixel, color),
                }
            }

            self.renderer.show()?;
            block_for(&mut self.delay, options.delay);
        }

        Ok(())
    }

    /// Stores `color` as-is in every pixel, flushing after each one.
    pub fn set_all(&mut self, color: PackedColor) -> Result<(), SceneError> {
        self.renderer.set_all(color)
    }

    /// Returns a reference to the underlying strip.
    pub fn strip(&self) -> &S {
        self.renderer.strip()
    }

    /// Returns a reference to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }
}
