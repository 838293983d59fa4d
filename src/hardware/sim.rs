//! In-memory strip and relay pin for dry runs off the Pi.

use crate::color::PackedColor;
use crate::config::StripConfig;
use crate::strip::PixelStrip;
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use log::{debug, trace};

/// A strip that only exists in memory. Counts flushes.
#[derive(Debug, Clone)]
pub struct MemoryStrip {
    pixels: Vec<PackedColor>,
    shows: usize,
}

impl MemoryStrip {
    /// Creates a strip of `num_pixels` pixels, all off.
    pub fn new(num_pixels: usize) -> Self {
        Self {
            pixels: vec![PackedColor::OFF; num_pixels],
            shows: 0,
        }
    }

    /// Creates a strip sized from `config`.
    pub fn from_config(config: &StripConfig) -> Self {
        Self::new(usize::from(config.led_count))
    }

    /// Current buffer contents.
    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    /// Number of flushes so far.
    pub fn show_count(&self) -> usize {
        self.shows
    }
}

impl PixelStrip for MemoryStrip {
    type Error = Infallible;

    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn pixel_color(&self, index: usize) -> PackedColor {
        self.pixels[index]
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        self.pixels[index] = color;
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.shows += 1;
        trace!("show #{}", self.shows);
        Ok(())
    }
}

/// A relay pin that only exists in memory. Starts high (relay off).
#[derive(Debug, Clone, Default)]
pub struct MemoryPin {
    low: bool,
    writes: usize,
}

impl MemoryPin {
    /// Number of level writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn write(&mut self, low: bool) {
        self.low = low;
        self.writes += 1;
        debug!("sim pin -> {}", if low { "low" } else { "high" });
    }
}

impl ErrorType for MemoryPin {
    type Error = Infallible;
}

impl OutputPin for MemoryPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }
}

impl StatefulOutputPin for MemoryPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.low)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.low)
    }
}
