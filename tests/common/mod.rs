//! Shared test infrastructure for ledstrip-scenes integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin, StatefulOutputPin};
use ledstrip_scenes::{PackedColor, PixelStrip};

// ============================================================================
// Mock Strip
// ============================================================================

/// Error returned by a strip built with [`MockStrip::failing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushFailed;

/// Mock strip that records every buffer write and flush
pub struct MockStrip {
    pixels: Vec<PackedColor>,
    writes: Vec<(usize, PackedColor)>,
    shows: usize,
    /// Number of buffer writes seen at each flush
    writes_at_show: Vec<usize>,
    fail_show: bool,
}

impl MockStrip {
    pub fn new(num_pixels: usize) -> Self {
        Self::filled(num_pixels, PackedColor::OFF)
    }

    pub fn filled(num_pixels: usize, color: PackedColor) -> Self {
        Self {
            pixels: vec![color; num_pixels],
            writes: Vec::new(),
            shows: 0,
            writes_at_show: Vec::new(),
            fail_show: false,
        }
    }

    /// Strip whose flush always fails
    pub fn failing(num_pixels: usize) -> Self {
        Self {
            fail_show: true,
            ..Self::new(num_pixels)
        }
    }

    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    pub fn writes(&self) -> &[(usize, PackedColor)] {
        &self.writes
    }

    pub fn show_count(&self) -> usize {
        self.shows
    }

    pub fn writes_at_show(&self) -> &[usize] {
        &self.writes_at_show
    }

    pub fn clear_history(&mut self) {
        self.writes.clear();
        self.writes_at_show.clear();
        self.shows = 0;
    }
}

impl PixelStrip for MockStrip {
    type Error = FlushFailed;

    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn pixel_color(&self, index: usize) -> PackedColor {
        self.pixels[index]
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        self.pixels[index] = color;
        self.writes.push((index, color));
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        if self.fail_show {
            return Err(FlushFailed);
        }
        self.shows += 1;
        self.writes_at_show.push(self.writes.len());
        Ok(())
    }
}

// ============================================================================
// Mock Relay Pin
// ============================================================================

/// Error returned by a pin built with [`MockPin::failing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFailed;

impl digital::Error for PinFailed {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Mock output pin that counts level writes
pub struct MockPin {
    low: bool,
    writes: Vec<bool>,
    fail: bool,
}

impl MockPin {
    /// Pin currently driven high (relay off)
    pub fn high() -> Self {
        Self {
            low: false,
            writes: Vec::new(),
            fail: false,
        }
    }

    /// Pin currently driven low (relay on)
    pub fn low() -> Self {
        Self {
            low: true,
            ..Self::high()
        }
    }

    /// Pin whose every access fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::low()
        }
    }

    pub fn is_low(&self) -> bool {
        self.low
    }

    /// Written levels in order, `true` meaning low
    pub fn writes(&self) -> &[bool] {
        &self.writes
    }

    fn write(&mut self, low: bool) -> Result<(), PinFailed> {
        if self.fail {
            return Err(PinFailed);
        }
        self.low = low;
        self.writes.push(low);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = PinFailed;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        if self.fail {
            return Err(PinFailed);
        }
        Ok(!self.low)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        if self.fail {
            return Err(PinFailed);
        }
        Ok(self.low)
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records requested pauses instead of sleeping
#[derive(Default)]
pub struct MockDelay {
    millis: Vec<u32>,
    nanos: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `delay_ms` request, in order
    pub fn millis(&self) -> &[u32] {
        &self.millis
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.nanos += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.millis.push(ms);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds the packed value a pixel holds after `set_pixel(color)`
pub fn strip_order(color: PackedColor) -> PackedColor {
    let [a, b2, b1, b0] = color.0.to_be_bytes();
    PackedColor(u32::from_be_bytes([a, b1, b2, b0]))
}
