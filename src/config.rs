//! Settings sent to the PCD8544 during initialization.

use crate::instructions::{DisplayMode, MuxRate, TemperatureCoefficient};

/// Which level of the LIGHT line switches the backlight on.
///
/// Depends on the breakout board: some drive the LEDs directly, others through a transistor that
/// needs the line pulled low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightPolarity {
    ActiveHigh,
    ActiveLow,
}

/// Initialization configuration. Builder methods override single settings.
///
/// The defaults produce the classic Nokia 5110 init sequence
/// `0x21 0xB1 0x04 0x14 0x0C 0x20 0x0C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub(crate) contrast: u8,
    pub(crate) temperature_coefficient: TemperatureCoefficient,
    pub(crate) bias: MuxRate,
    pub(crate) display_mode: DisplayMode,
    pub(crate) light_polarity: LightPolarity,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contrast: 0x31,
            temperature_coefficient: TemperatureCoefficient::TC0,
            bias: MuxRate::Bias1To40,
            display_mode: DisplayMode::Normal,
            light_polarity: LightPolarity::ActiveHigh,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vop written during init, 0..128. Only the low 7 bits are used.
    pub fn contrast(self, contrast: u8) -> Self {
        Self {
            contrast: contrast & 0x7f,
            ..self
        }
    }

    pub fn temperature_coefficient(self, temperature_coefficient: TemperatureCoefficient) -> Self {
        Self {
            temperature_coefficient,
            ..self
        }
    }

    pub fn bias(self, bias: MuxRate) -> Self {
        Self { bias, ..self }
    }

    /// `Normal` or `InverseVideo` are the useful choices here.
    pub fn display_mode(self, display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            ..self
        }
    }

    pub fn light_polarity(self, light_polarity: LightPolarity) -> Self {
        Self {
            light_polarity,
            ..self
        }
    }
}
