//! Concrete [`PixelStrip`](crate::PixelStrip) and relay pin backends.

pub mod sim;

#[cfg(feature = "rpi")]
pub mod rpi;
