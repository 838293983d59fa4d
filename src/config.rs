//! Hardware wiring and driver settings.

/// LED strip and relay settings passed through to the hardware backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of LED pixels.
    pub led_count: u16,
    /// GPIO (BCM) pin connected to the pixels. 18 uses PWM.
    pub led_pin: u8,
    /// LED signal frequency in hertz.
    pub frequency_hz: u32,
    /// DMA channel used to generate the signal.
    pub dma_channel: u8,
    /// Driver-level brightness, 0 darkest to 255 brightest.
    pub brightness: u8,
    /// Invert the signal (NPN transistor level shift).
    pub invert: bool,
    /// PWM channel; 1 for GPIOs 13, 19, 41, 45 or 53.
    pub pwm_channel: u8,
    /// GPIO (BCM) pin driving the sun relay.
    pub sun_pin: u8,
}

impl StripConfig {
    /// The wiring of the original installation: 20 pixels on GPIO 18, relay on GPIO 23.
    pub const DEFAULT: Self = Self {
        led_count: 20,
        led_pin: 18,
        frequency_hz: 800_000,
        dma_channel: 10,
        brightness: 255,
        invert: false,
        pwm_channel: 0,
        sun_pin: 23,
    };
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
