//! Packed ARGB color codec.
//!
//! The strip driver stores every pixel as one 32-bit word. This module packs
//! four 8-bit channels into that word and reads them back out.
//!
//! The two directions do not use the same byte order:
//!
//! - [`PackedColor::pack`] lays the channels out as `alpha | blue | red | green`
//!   (bits 31..24, 23..16, 15..8, 7..0).
//! - [`PackedColor::unpack`] reads the word as the printed hex string
//!   `AARRGGBB`, so the returned red is bits 23..16, green 15..8, blue 7..0.
//!
//! Both pixel-set paths repack through [`pack_for_strip`], which swaps the
//! green and blue arguments before packing. Existing scenes depend on the
//! resulting hue, so the codec reproduces it exactly.

use log::trace;
use palette::Srgba;

/// Four unpacked 8-bit channels: red, green, blue and alpha (brightness).
pub type Channels = Srgba<u8>;

/// A pixel value as stored in the strip's buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// All channels zero, including brightness.
    pub const OFF: Self = Self(0);

    /// Packs four channels into `alpha << 24 | blue << 16 | red << 8 | green`.
    #[inline]
    pub const fn pack(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(
            ((alpha as u32) << 24) | ((blue as u32) << 16) | ((red as u32) << 8) | (green as u32),
        )
    }

    /// Packs an opaque color (brightness 255).
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::pack(red, green, blue, u8::MAX)
    }

    /// Reads the channels back in printed `AARRGGBB` order.
    pub fn unpack(self) -> Channels {
        let [alpha, red, green, blue] = self.0.to_be_bytes();
        trace!("{} r={} g={} b={} a={}", self, red, green, blue, alpha);
        Srgba::new(red, green, blue, alpha)
    }

    /// Brightness byte (bits 31..24).
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl core::fmt::Display for PackedColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Repacks unpacked channels the way pixels are written to the strip.
///
/// Green and blue trade places on the way in, so relative to the source word
/// the middle two bytes end up swapped.
#[inline]
pub fn pack_for_strip(channels: Channels) -> PackedColor {
    PackedColor::pack(channels.red, channels.blue, channels.green, channels.alpha)
}
