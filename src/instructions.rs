//! # Instruction set of the PCD8544
//!
//! All instructions are implemented as enums and most arguments as well, written to resemble the
//! data sheet: <https://www.sparkfun.com/datasheets/LCD/Monochrome/Nokia5110.pdf>
//!
//! The chip has two instruction sets, selected by the H bit of `FunctionSet`. Addressing and the
//! display mode live in the basic set (H=0). Contrast, temperature coefficient and bias can only be
//! reached in the extended set (H=1), so those are always wrapped in a switch to H=1 and back.
//!
//! ## Contrast (SetVop)
//! A 7 bit value; more is more voltage on the LCD segments, so darker pixels. The visible range on
//! a typical Nokia 5110 is around 40..60. A Vop of 0 switches the voltage generator off.
//!
//! ## Temperature coefficient
//! The chip raises Vop as the glass gets colder. The coefficient sets how fast.
//!
//! ## Bias
//! The bias system value matched to the multiplex rate of the glass. The Nokia 5110 modules are
//! usually driven with bias value 4 (`Bias1To40`), some prefer 3.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// The Temperature Coefficient, millivolts added to Vop per Kelvin below 27°C.
pub enum TemperatureCoefficient {
    /// Adds 1 mV/K
    TC0 = 0b00,
    /// Adds 9 mV/K
    TC1 = 0b01,
    /// Adds 17 mV/K
    TC2 = 0b10,
    /// Adds 24 mV/K
    TC3 = 0b11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// The bias system (BS2..BS0) for multiplexing the LCD glass.
pub enum MuxRate {
    Bias1To100 = 0,
    Bias1To80 = 1,
    Bias1To65 = 2,
    Bias1To48 = 3,
    Bias1To40 = 4,
    Bias1To24 = 5,
    Bias1To18 = 6,
    Bias1To10 = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// The display mode (normal, inversed, all black or all blank).
pub enum DisplayMode {
    /// Show a blank screen (all pixels off)
    DisplayBlank = 0b000,

    /// Show image from DDRAM, a set bit is a black pixel
    Normal = 0b100,

    /// Show a black screen (all pixels on)
    AllSegmentsOn = 0b001,

    /// Show reverse image from DDRAM, a cleared bit is a black pixel
    InverseVideo = 0b101,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Normal
    }
}

/// PCD8544 instruction set, both basic and "extended" instructions, see data sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// power down, addressing direction and instruction set selection
    // 0x20 | PD << 2 | V << 1 | H
    FunctionSet {
        /// power down (standby) when true
        pd: bool,
        /// vertical addressing when true, horizontal otherwise
        v: bool,
        /// extended instruction set when true
        h: bool,
    },

    /// display configuration, basic instruction set
    // 0x08 | DisplayMode
    SetDisplayMode(DisplayMode),

    /// bank (row) address of DDRAM, 0 <= Y <= 5, basic instruction set
    // 0x40 | Y
    Yaddress(u8),

    /// column address of DDRAM, 0 <= X <= 83, basic instruction set
    // 0x80 | X
    Xaddress(u8),

    /// temperature coefficient, extended instruction set
    // 0x04 | TC
    SetTempCoefficient(TemperatureCoefficient),

    /// bias system, extended instruction set
    // 0x10 | BS
    SetBiasMode(MuxRate),

    /// operating voltage (contrast), extended instruction set
    // 0x80 | Vop
    SetVop(u8),
}

use Instruction::*;

// Use full binary presentation instead of hex, to look the same as data sheet
impl Instruction {
    /// Returns the instruction as the byte sent on the wire.
    ///
    /// Addresses are not range checked in release builds; like the chip itself, an out of range
    /// address ends up somewhere in (or past) DDRAM.
    pub fn byte(self) -> u8 {
        match self {
            FunctionSet { pd, v, h } => {
                0b0010_0000 | ((pd as u8) << 2) | ((v as u8) << 1) | h as u8
            }
            SetDisplayMode(mode) => 0b0000_1000 | mode as u8,
            Yaddress(y) => {
                debug_assert!(y < crate::ROWS, "bank {} out of range", y);
                0b0100_0000 | y
            }
            Xaddress(x) => {
                debug_assert!(x < crate::WIDTH, "column {} out of range", x);
                0b1000_0000 | x
            }
            SetTempCoefficient(coeff) => 0b0000_0100 | coeff as u8,
            SetBiasMode(mux) => 0b0001_0000 | mux as u8,
            SetVop(contrast) => 0b1000_0000 | contrast,
        }
    }
}

/// A prelude for convenience, it pulls all enums into scope.
pub mod prelude {
    pub use super::{
        DisplayMode, DisplayMode::*, Instruction, Instruction::*, MuxRate, MuxRate::*,
        TemperatureCoefficient, TemperatureCoefficient::*,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn function_set_bits() {
        assert_eq!(FunctionSet { pd: false, v: false, h: true }.byte(), 0x21);
        assert_eq!(FunctionSet { pd: false, v: false, h: false }.byte(), 0x20);
        assert_eq!(FunctionSet { pd: true, v: false, h: false }.byte(), 0x24);
        assert_eq!(FunctionSet { pd: false, v: true, h: false }.byte(), 0x22);
    }

    #[test]
    fn init_bytes() {
        assert_eq!(SetVop(0x31).byte(), 0xb1);
        assert_eq!(SetTempCoefficient(TC0).byte(), 0x04);
        assert_eq!(SetBiasMode(Bias1To40).byte(), 0x14);
        assert_eq!(SetBiasMode(Bias1To48).byte(), 0x13);
        assert_eq!(SetDisplayMode(Normal).byte(), 0x0c);
        assert_eq!(SetDisplayMode(InverseVideo).byte(), 0x0d);
        assert_eq!(SetDisplayMode(DisplayBlank).byte(), 0x08);
        assert_eq!(SetDisplayMode(AllSegmentsOn).byte(), 0x09);
    }

    #[test]
    fn addresses() {
        assert_eq!(Xaddress(0).byte(), 0x80);
        assert_eq!(Xaddress(83).byte(), 0x80 | 83);
        assert_eq!(Yaddress(0).byte(), 0x40);
        assert_eq!(Yaddress(5).byte(), 0x45);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn column_out_of_range_asserts_in_debug() {
        Xaddress(84).byte();
    }
}
