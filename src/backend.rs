//! Command/data framing on top of the bit transmitter.
//!
//! The PCD8544 decides what a byte means by the level of the DC line while it is selected with
//! CE: low is an instruction, high goes to the display RAM. Every byte gets its own CE bracket.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::bitbang::{BitBang, BitOrder};
use crate::CLOCK_HIGH_TIME_US;

/// What the chip should do with a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// DC low, the byte is an instruction
    Command,
    /// DC high, the byte is written to DDRAM at the current address
    Data,
}

/// A transport able to deliver single framed bytes to the PCD8544.
pub trait PCD8544Backend {
    type Error;

    /// Send exactly one byte, bracketed by one select/deselect of the chip.
    fn write_byte(&mut self, mode: Mode, value: u8) -> Result<(), Self::Error>;

    /// Busy wait for `us` microseconds.
    fn hold(&mut self, us: u32);

    /// Drive the bus lines to their power-on levels.
    fn set_idle(&mut self) -> Result<(), Self::Error>;
}

/// Bus made of four GPIO lines and a delay.
pub struct PCD8544GpioBackend<CLK, DIN, DC, CE, DELAY> {
    bus: BitBang<CLK, DIN, DELAY>,
    dc: DC,
    ce: CE,
}

impl<CLK, DIN, DC, CE, DELAY, ERR> PCD8544GpioBackend<CLK, DIN, DC, CE, DELAY>
where
    CLK: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    DC: OutputPin<Error = ERR>,
    CE: OutputPin<Error = ERR>,
    DELAY: DelayUs<u32>,
{
    /// Takes the clock, data in, data/command and chip enable lines as configured outputs.
    ///
    /// The chip is deselected immediately.
    pub fn new(
        clk: CLK,
        din: DIN,
        dc: DC,
        mut ce: CE,
        delay: DELAY,
    ) -> Result<PCD8544GpioBackend<CLK, DIN, DC, CE, DELAY>, ERR> {
        ce.set_high()?;
        let bus = BitBang::new(clk, din, delay)?;
        Ok(PCD8544GpioBackend { bus, dc, ce })
    }

    pub fn release(self) -> (CLK, DIN, DC, CE, DELAY) {
        let (clk, din, delay) = self.bus.release();
        (clk, din, self.dc, self.ce, delay)
    }
}

impl<CLK, DIN, DC, CE, DELAY, ERR> PCD8544Backend for PCD8544GpioBackend<CLK, DIN, DC, CE, DELAY>
where
    CLK: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    DC: OutputPin<Error = ERR>,
    CE: OutputPin<Error = ERR>,
    DELAY: DelayUs<u32>,
{
    type Error = ERR;

    fn write_byte(&mut self, mode: Mode, value: u8) -> Result<(), ERR> {
        match mode {
            Mode::Data => self.dc.set_high()?,
            Mode::Command => self.dc.set_low()?,
        }
        self.ce.set_low()?;
        self.bus.transmit_byte(value, BitOrder::MsbFirst)?;
        self.ce.set_high()?;
        self.bus.hold(CLOCK_HIGH_TIME_US);
        Ok(())
    }

    #[inline]
    fn hold(&mut self, us: u32) {
        self.bus.hold(us);
    }

    fn set_idle(&mut self) -> Result<(), ERR> {
        self.ce.set_high()?;
        self.dc.set_high()?;
        self.bus.set_idle()
    }
}
