//! # "Fake" pins and delay
//!
//! Useful when a line is not wired up (many breakouts tie the backlight to VCC) but the driver
//! still wants a pin for it, or for running the driver on a host without hardware.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

/// provides a dummy OutputPin that accepts every level and does nothing.
///
/// For example for the LIGHT pin of the PCD8544 when the backlight is hardwired.
#[derive(Debug, Clone, Copy)]
pub struct DummyOutputPin;

impl OutputPin for DummyOutputPin {
    type Error = core::convert::Infallible;
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A delay that returns immediately.
///
/// Only use it with real hardware if the pins toggle slowly enough by themselves; the PCD8544
/// needs at least 250ns per clock half period and a real reset pulse.
#[derive(Debug, Clone, Copy)]
pub struct NoDelay;

impl DelayUs<u32> for NoDelay {
    #[inline]
    fn delay_us(&mut self, _us: u32) {}
}
