//! # Bit-banged driver for the PCD8544 LCD controller
//!
//! The PCD8544 is the controller behind the Nokia 5110/3310 84x48 monochrome displays. This crate
//! talks to it over plain GPIO lines, clocking every bit out by hand with fixed 14µs half periods,
//! so no SPI peripheral is needed and slow or fast boards behave the same.
//!
//! The crate is layered:
//!  - [`bitbang`] serializes one byte onto DIN/CLK
//!  - [`backend`] frames a byte as command or data with the DC and CE lines
//!  - [`display`] holds the [`PCD8544`] struct: initialization, addressing, contrast, images
//!  - [`textmode`] renders characters from the built-in 5x8 [`font`]
//!
//! Typically you want to look into the following functions:
//!  - `PCD8544::new()` to create and initialize a driver instance
//!  - `PCD8544::set_contrast()` to change the contrast of the display
//!  - `PCD8544::draw_text()` or `writeln!()` to put text on the screen
//!
//! With the `graphics` feature, [`framebuffer::FrameBuffer`] implements the embedded_graphics
//! `DrawTarget` and can be pushed to the display with `PCD8544::draw_image()`.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod backend;
pub mod bitbang;
pub mod config;
pub mod display;
pub mod dummypins;
pub mod font;
pub mod instructions;
pub mod textmode;

#[cfg(feature = "graphics")]
pub mod framebuffer;

#[cfg(test)]
mod mock;

pub use backend::{Mode, PCD8544Backend, PCD8544GpioBackend};
pub use bitbang::{BitBang, BitOrder};
pub use config::{Config, LightPolarity};
pub use display::PCD8544;
pub use instructions::prelude;

/// display width in pixels (columns)
pub const WIDTH: u8 = 84;

/// display height in pixels
pub const HEIGHT: u8 = 48;

/// number of 8 pixel high banks (rows) in the DDRAM
pub const ROWS: u8 = HEIGHT / 8;

/// size of the display DDRAM in bytes, one byte per column per bank
pub const DDRAM_SIZE: usize = WIDTH as usize * ROWS as usize;

/// The basic timing quantum of the bus in microseconds.
///
/// Every half clock period, the settle time before a bit and the gap after deselecting the chip
/// are multiples of this.
pub const CLOCK_HIGH_TIME_US: u32 = 14;
