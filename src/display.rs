//! # Main driver struct for the PCD8544
//!
//! This holds the bus backend, the reset and backlight pins and the init [`Config`], and
//! implements the controller level operations: the power-on/reset sequence, addressing, contrast
//! and the whole-screen image writes. Text lives in [`crate::textmode`].
//!
//! The driver does not shadow the DDRAM address. The chip increments its column after every data
//! byte and wraps into the next bank (horizontal addressing), so operations that need an absolute
//! position issue a `goto()` first and otherwise just stream bytes.
//!
//! The driver owns its pins. Calling into one instance from two contexts at once would interleave
//! bit transmissions, so share it behind a mutex if you must share it at all.
use embedded_hal::digital::v2::OutputPin;

use crate::{
    backend::{Mode, PCD8544Backend},
    config::{Config, LightPolarity},
    instructions::prelude::*,
    CLOCK_HIGH_TIME_US, DDRAM_SIZE, ROWS, WIDTH,
};

/// time between power-on levels and the reset pulse, and between reset and the first command
const RESET_HOLD_US: u32 = 10_000;

/// settle time after the configuration commands
const INIT_SETTLE_US: u32 = 100_000;

/// main struct for state keeping of the PCD8544 driver
pub struct PCD8544<Backend, RST, LIGHT> {
    backend: Backend,
    rst: RST,
    light: LIGHT,
    config: Config,
    power_down_control: bool,
}

impl<Backend, RST, LIGHT> PCD8544<Backend, RST, LIGHT>
where
    Backend: PCD8544Backend,
    RST: OutputPin<Error = Backend::Error>,
    LIGHT: OutputPin<Error = Backend::Error>,
{
    /// Create a new instance of the PCD8544 driver and initialize the display.
    ///
    /// Arguments:
    ///
    /// - backend: the bus, typically a [`crate::PCD8544GpioBackend`]
    /// - rst: Reset, a GPIO OutputPin connected to RST on the display
    /// - light: a GPIO OutputPin connected to the backlight, or a
    ///   [`crate::dummypins::DummyOutputPin`]
    /// - config: settings applied during initialization
    pub fn new(
        backend: Backend,
        rst: RST,
        light: LIGHT,
        config: Config,
    ) -> Result<PCD8544<Backend, RST, LIGHT>, Backend::Error> {
        let mut pcd = PCD8544 {
            backend,
            rst,
            light,
            config,
            power_down_control: false,
        };

        // resetting the display at startup is mandatory, the PCD8544 is in an undefined state
        // after power on
        pcd.init()?;

        Ok(pcd)
    }

    /// Hardware reset and full initialization, ending with a cleared screen.
    ///
    /// `new()` already does this. Call it again to recover the display after a glitch.
    pub fn init(&mut self) -> Result<(), Backend::Error> {
        debug!("pcd8544: init");

        // power-on levels
        self.rst.set_high()?;
        self.backend.set_idle()?;
        self.light.set_high()?;
        self.backend.hold(RESET_HOLD_US);

        self.rst.set_low()?;
        self.backend.hold(3 * CLOCK_HIGH_TIME_US);
        self.rst.set_high()?;
        self.backend.hold(RESET_HOLD_US);

        self.power_down_control = false;
        for instruction in self.init_sequence().iter() {
            self.write_command(*instruction)?;
        }
        self.backend.hold(INIT_SETTLE_US);

        self.clear()
    }

    // The display mode is sent once while still in the extended set and once more after switching
    // back, where it actually takes effect.
    fn init_sequence(&self) -> [Instruction; 7] {
        let mode = self.config.display_mode;
        [
            FunctionSet { pd: false, v: false, h: true },
            SetVop(self.config.contrast),
            SetTempCoefficient(self.config.temperature_coefficient),
            SetBiasMode(self.config.bias),
            SetDisplayMode(mode),
            FunctionSet { pd: false, v: false, h: false },
            SetDisplayMode(mode),
        ]
    }

    /// Send a single instruction as-is. No instruction set switching is done.
    pub fn write_command(&mut self, instruction: Instruction) -> Result<(), Backend::Error> {
        self.backend.write_byte(Mode::Command, instruction.byte())
    }

    /// Write one byte (8 vertical pixels) at the current address; the chip advances the address.
    pub fn write_data(&mut self, value: u8) -> Result<(), Backend::Error> {
        self.backend.write_byte(Mode::Data, value)
    }

    /// Move the DDRAM address to column `x` (0..84) of bank `y` (0..6).
    ///
    /// Out of range values are not checked in release builds and address wherever the chip puts
    /// them.
    pub fn goto(&mut self, x: u8, y: u8) -> Result<(), Backend::Error> {
        self.write_command(Xaddress(x))?;
        self.write_command(Yaddress(y))
    }

    /// Set the Vop and therefore the contrast of the LCD.
    ///
    /// Only the low 7 bits of a non-zero `contrast` are used; the top bit is forced on. 0 is sent
    /// unmodified and switches the voltage generator off.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Backend::Error> {
        let vop = if contrast != 0 { 0x80 | (contrast & 0x7f) } else { 0 };
        debug!("pcd8544: contrast {=u8:#x}", vop);
        let pd = self.power_down_control;
        self.write_command(FunctionSet { pd, v: false, h: true })?;
        self.write_command(SetVop(vop))?;
        self.write_command(FunctionSet { pd, v: false, h: false })
    }

    /// Change the display mode. It is also used by later calls to `init()`.
    ///
    /// The display mode is a basic instruction, so the basic instruction set is selected first.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), Backend::Error> {
        debug!("pcd8544: display mode {}", mode);
        self.config.display_mode = mode;
        let pd = self.power_down_control;
        self.write_command(FunctionSet { pd, v: false, h: false })?;
        self.write_command(SetDisplayMode(mode))
    }

    /// Power down (true) or wake up (false) the chip. DDRAM content is kept while powered down.
    pub fn set_power_down(&mut self, power_down: bool) -> Result<(), Backend::Error> {
        debug!("pcd8544: power down {}", power_down);
        self.power_down_control = power_down;
        self.write_command(FunctionSet {
            pd: power_down,
            v: false,
            h: false,
        })
    }

    /// Enable or disable the backlight, honoring the configured polarity.
    pub fn set_light(&mut self, enabled: bool) -> Result<(), Backend::Error> {
        let high = match self.config.light_polarity {
            LightPolarity::ActiveHigh => enabled,
            LightPolarity::ActiveLow => !enabled,
        };
        if high {
            self.light.set_high()
        } else {
            self.light.set_low()
        }
    }

    /// Clear the screen by zeroing the whole DDRAM, starting at (0, 0).
    pub fn clear(&mut self) -> Result<(), Backend::Error> {
        self.goto(0, 0)?;
        for _ in 0..DDRAM_SIZE {
            self.write_data(0x00)?;
        }
        Ok(())
    }

    /// Write a full screen image.
    ///
    /// `image` holds one byte per column per bank, bank 0 first, the least significant bit being
    /// the topmost pixel of the bank.
    pub fn draw_image(&mut self, image: &[u8; DDRAM_SIZE]) -> Result<(), Backend::Error> {
        self.goto(0, 0)?;
        for byte in image.iter() {
            self.write_data(*byte)?;
        }
        Ok(())
    }

    /// Draw a one pixel frame around the edge of the screen, leaving the inside untouched.
    pub fn draw_border(&mut self) -> Result<(), Backend::Error> {
        for x in 0..WIDTH {
            self.goto(x, 0)?;
            self.write_data(0x01)?;
        }
        for x in 0..WIDTH {
            self.goto(x, ROWS - 1)?;
            self.write_data(0x80)?;
        }
        for y in 0..ROWS {
            self.goto(WIDTH - 1, y)?;
            self.write_data(0xff)?;
        }
        for y in 0..ROWS {
            self.goto(0, y)?;
            self.write_data(0xff)?;
        }
        Ok(())
    }

    /// Give back the backend and pins. The display keeps showing its last content.
    pub fn release(self) -> (Backend, RST, LIGHT) {
        (self.backend, self.rst, self.light)
    }
}
