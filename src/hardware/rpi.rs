//! Raspberry Pi backends: a WS281x strip driven over PWM/DMA and the sun
//! relay on a plain GPIO output.

use crate::color::PackedColor;
use crate::config::StripConfig;
use crate::strip::PixelStrip;
use log::{debug, trace};
use rppal::gpio::{Gpio, OutputPin};
use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType, WS2811Error};

/// A WS281x strip on one channel of the `rpi_ws281x` driver.
pub struct Ws281xStrip {
    controller: Controller,
    channel: usize,
}

impl Ws281xStrip {
    /// Initialises the driver from `config`.
    pub fn new(config: &StripConfig) -> Result<Self, WS2811Error> {
        let channel = usize::from(config.pwm_channel);
        let controller = ControllerBuilder::new()
            .freq(config.frequency_hz)
            .dma(i32::from(config.dma_channel))
            .channel(
                channel,
                ChannelBuilder::new()
                    .pin(i32::from(config.led_pin))
                    .count(i32::from(config.led_count))
                    .strip_type(StripType::Ws2811Rgb)
                    .invert(config.invert)
                    .brightness(config.brightness)
                    .build(),
            )
            .build()?;

        debug!(
            "ws281x ready: {} pixels on GPIO {}, channel {}",
            config.led_count, config.led_pin, channel
        );
        Ok(Self {
            controller,
            channel,
        })
    }
}

impl PixelStrip for Ws281xStrip {
    type Error = WS2811Error;

    fn num_pixels(&self) -> usize {
        self.controller.leds(self.channel).len()
    }

    // The driver's raw slots are the little-endian bytes of the 32-bit word.
    fn pixel_color(&self, index: usize) -> PackedColor {
        PackedColor(u32::from_le_bytes(self.controller.leds(self.channel)[index]))
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        self.controller.leds_mut(self.channel)[index] = color.0.to_le_bytes();
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        trace!("ws281x render");
        self.controller.render()
    }
}

/// Claims `config.sun_pin` as an output for the sun relay.
///
/// The pin keeps its level when dropped, so the relay state outlives the
/// process.
pub fn sun_pin(config: &StripConfig) -> Result<OutputPin, rppal::gpio::Error> {
    let mut pin = Gpio::new()?.get(config.sun_pin)?.into_output();
    pin.set_reset_on_drop(false);
    debug!("sun relay on GPIO {}", config.sun_pin);
    Ok(pin)
}
