//! # Text rendering for the PCD8544 driver
//!
//! Characters are 7 columns wide: a blank column, the 5 glyph columns from [`crate::font`] and
//! another blank column. They are streamed at the current DDRAM address, relying on the chip's
//! auto increment, so position the cursor with `goto()` first. 12 characters fit on one of the 6
//! lines.
//!
//! `PCD8544` also implements `core::fmt::Write`, so `write!()` works directly on the screen:
//!
//! ```ignore
//! display.goto(0, 2)?;
//! write!(display, "T: {}C", temperature)?;
//! ```
use core::fmt::Error as FmtError;
use core::fmt::Result as FmtResult;
use core::fmt::Write;

use embedded_hal::digital::v2::OutputPin;

use crate::{backend::PCD8544Backend, display::PCD8544, font::glyph};

impl<Backend, RST, LIGHT> PCD8544<Backend, RST, LIGHT>
where
    Backend: PCD8544Backend,
    RST: OutputPin<Error = Backend::Error>,
    LIGHT: OutputPin<Error = Backend::Error>,
{
    /// Draw one character at the current address.
    ///
    /// `'\n'`, `'\r'` and `'\t'` are skipped without touching the bus. Characters the font
    /// doesn't have are drawn as `'?'`.
    pub fn draw_character(&mut self, c: char) -> Result<(), Backend::Error> {
        if matches!(c, '\n' | '\r' | '\t') {
            return Ok(());
        }
        self.write_data(0x00)?;
        for column in glyph(c).iter() {
            self.write_data(*column)?;
        }
        self.write_data(0x00)
    }

    pub fn draw_text(&mut self, text: &str) -> Result<(), Backend::Error> {
        for c in text.chars() {
            self.draw_character(c)?;
        }
        Ok(())
    }

    /// Draw `count` spaces.
    pub fn pad(&mut self, count: usize) -> Result<(), Backend::Error> {
        for _ in 0..count {
            self.draw_character(' ')?;
        }
        Ok(())
    }
}

// with this implementation of write_str, the PCD8544 becomes addressable with all the standard
// "Write" functions
impl<Backend, RST, LIGHT> Write for PCD8544<Backend, RST, LIGHT>
where
    Backend: PCD8544Backend,
    RST: OutputPin<Error = Backend::Error>,
    LIGHT: OutputPin<Error = Backend::Error>,
{
    fn write_str(&mut self, s: &str) -> FmtResult {
        self.draw_text(s).map_err(|_| FmtError)
    }
}
