//! The "sun" relay: a single active-low digital output.

use crate::types::SceneError;
use embedded_hal::digital::StatefulOutputPin;
use log::debug;

/// Drives the sun relay. Logical low switches it on.
pub struct SunRelay<P: StatefulOutputPin> {
    pin: P,
}

impl<P: StatefulOutputPin> SunRelay<P> {
    /// Wraps a pin already configured as an output.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Switches the relay on by driving the pin low.
    pub fn turn_on(&mut self) -> Result<(), SceneError> {
        debug!("sun on");
        self.pin.set_low().map_err(relay_error)
    }

    /// Switches the relay off. Writes only if it is currently on.
    pub fn turn_off(&mut self) -> Result<(), SceneError> {
        if self.is_on()? {
            debug!("sun off");
            self.pin.set_high().map_err(relay_error)?;
        }
        Ok(())
    }

    /// Reads back whether the relay is on.
    pub fn is_on(&mut self) -> Result<bool, SceneError> {
        self.pin.is_set_low().map_err(relay_error)
    }

    /// Releases the underlying pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

fn relay_error<E: embedded_hal::digital::Error>(err: E) -> SceneError {
    SceneError::Relay(err.kind())
}
