//! In-memory screen image for embedded_graphics.
//!
//! This module is behind the "graphics" feature flag. [`FrameBuffer`] implements the
//! embedded_graphics `DrawTarget`, so all circle/rectangle/text/bitmap functions can draw into
//! it. It never talks to the display itself; hand it to `PCD8544::draw_image()` to show it.
//!
//! The typical workflow:
//!  - `clear()` the framebuffer
//!  - draw "stuff" into it
//!  - `display.draw_image(framebuffer.as_bytes())`
//!  - repeat
use core::convert::TryInto;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

use crate::{DDRAM_SIZE, HEIGHT, WIDTH};

const MAX_X: u32 = WIDTH as u32 - 1;
const MAX_Y: u32 = HEIGHT as u32 - 1;

/// 84x48 pixels in DDRAM layout: bank by bank, one byte per column, bit 0 at the top.
#[derive(Clone)]
pub struct FrameBuffer {
    buffer: [u8; DDRAM_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        FrameBuffer {
            buffer: [0u8; DDRAM_SIZE],
        }
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a pixel at x, y. Pixels outside the screen are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        if x > MAX_X || y > MAX_Y {
            return;
        }
        let byte = &mut self.buffer[((y / 8) * WIDTH as u32 + x) as usize];
        let mask = 1 << (y % 8);
        match color {
            BinaryColor::On => *byte |= mask,
            BinaryColor::Off => *byte &= !mask,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<BinaryColor> {
        if x > MAX_X || y > MAX_Y {
            return None;
        }
        let byte = self.buffer[((y / 8) * WIDTH as u32 + x) as usize];
        Some(BinaryColor::from(byte & (1 << (y % 8)) != 0))
    }

    /// The image in the byte order `draw_image()` expects.
    pub fn as_bytes(&self) -> &[u8; DDRAM_SIZE] {
        &self.buffer
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Ok((x, y)) = coord.try_into() {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        let byte: u8 = match color {
            BinaryColor::On => 0xff,
            BinaryColor::Off => 0x00,
        };
        self.buffer = [byte; DDRAM_SIZE];
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH.into(), HEIGHT.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::Recorder;
    use embedded_graphics_core::geometry::Point;

    #[test]
    fn pixel_layout() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, BinaryColor::On);
        fb.set_pixel(83, 47, BinaryColor::On);
        fb.set_pixel(10, 9, BinaryColor::On);
        let bytes = fb.as_bytes();
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[DDRAM_SIZE - 1], 0x80);
        assert_eq!(bytes[84 + 10], 0x02);
        fb.set_pixel(10, 9, BinaryColor::Off);
        assert_eq!(fb.as_bytes()[84 + 10], 0x00);
    }

    #[test]
    fn draw_iter_skips_offscreen() {
        let mut fb = FrameBuffer::new();
        fb.draw_iter(
            [
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(84, 0), BinaryColor::On),
                Pixel(Point::new(0, 48), BinaryColor::On),
                Pixel(Point::new(3, 3), BinaryColor::On),
            ]
            .iter()
            .copied(),
        )
        .unwrap();
        assert_eq!(fb.pixel(3, 3), Some(BinaryColor::On));
        assert_eq!(fb.as_bytes().iter().filter(|b| **b != 0).count(), 1);
        assert_eq!(fb.pixel(84, 0), None);
    }

    #[test]
    fn clear_and_show() {
        let rec = Recorder::new();
        let mut pcd = rec.display();
        let mut fb = FrameBuffer::new();
        fb.clear(BinaryColor::On).unwrap();
        pcd.draw_image(fb.as_bytes()).unwrap();
        assert_eq!(rec.data(), vec![0xff; DDRAM_SIZE]);
    }
}
