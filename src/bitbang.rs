//! "Bit bang" serial transmitter for the PCD8544.
//!
//! The PCD8544 only listens (there is no MISO), so this is a write-only, half duplex shifter on
//! two GPIO lines: DIN carries the bit, CLK clocks it in. The chip samples DIN on the rising
//! edge of CLK.
//!
//! Every bit takes three holds of [`CLOCK_HIGH_TIME_US`]:
//!
//! ```text
//!        settle      setup       high
//! CLK  ___________________/‾‾‾‾‾‾‾‾‾‾\___
//! DIN  ------------X=========================
//!                  ^ data changes    ^ sampled on rising edge
//! ```
//!
//! After the eighth bit the line is held quiet for two more quanta before the caller may touch
//! the chip enable line again.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::CLOCK_HIGH_TIME_US;

/// Order in which the bits of a byte are shifted out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// bit 7 first, bit 0 last. This is what the PCD8544 expects.
    MsbFirst,
    /// bit 0 first, bit 7 last
    LsbFirst,
}

/// "Bit bang" transmitter owning the clock and data lines and the delay used to time them.
pub struct BitBang<CLK, DIN, DELAY> {
    clk: CLK,
    din: DIN,
    delay: DELAY,
}

impl<CLK, DIN, DELAY, ERR> BitBang<CLK, DIN, DELAY>
where
    CLK: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    DELAY: DelayUs<u32>,
{
    /// Constructs a transmitter from the "clock" and "data in" pins and a microsecond delay.
    ///
    /// The clock is pulled low right away so the first rising edge is a real one.
    pub fn new(mut clk: CLK, din: DIN, delay: DELAY) -> Result<BitBang<CLK, DIN, DELAY>, ERR> {
        clk.set_low()?;
        Ok(BitBang { clk, din, delay })
    }

    /// Shift all 8 bits of `value` out onto DIN, one full clock cycle per bit.
    pub fn transmit_byte(&mut self, value: u8, order: BitOrder) -> Result<(), ERR> {
        for i in 0..8 {
            let bit = match order {
                BitOrder::MsbFirst => 7 - i,
                BitOrder::LsbFirst => i,
            };
            self.write_bit((value >> bit) & 1 == 1)?;
        }
        self.delay.delay_us(2 * CLOCK_HIGH_TIME_US);
        Ok(())
    }

    /// Busy wait for `us` microseconds on the owned delay.
    #[inline]
    pub fn hold(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    /// Power-on level of the bus lines: data low, clock low.
    pub fn set_idle(&mut self) -> Result<(), ERR> {
        self.din.set_low()?;
        self.clk.set_low()
    }

    /// Give back the pins and the delay.
    pub fn release(self) -> (CLK, DIN, DELAY) {
        (self.clk, self.din, self.delay)
    }

    // The order matters: DIN may only change while CLK is low, and must be stable for a full
    // quantum before the rising edge.
    #[inline]
    fn write_bit(&mut self, high: bool) -> Result<(), ERR> {
        self.delay.delay_us(CLOCK_HIGH_TIME_US);
        self.clk.set_low()?;
        if high {
            self.din.set_high()?;
        } else {
            self.din.set_low()?;
        }
        self.delay.delay_us(CLOCK_HIGH_TIME_US);
        self.clk.set_high()?;
        self.delay.delay_us(CLOCK_HIGH_TIME_US);
        self.clk.set_low()
    }
}
