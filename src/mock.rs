//! Recording pins and delay for unit tests.
//!
//! All pins and the delay created from one [`Recorder`] append to the same log, so tests see the
//! exact interleaving of level changes and waits. The bus has no read path, so the log is the only
//! thing a test can check; [`Recorder::frames`] decodes it back into the bytes the chip would have
//! latched.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::backend::{Mode, PCD8544GpioBackend};
use crate::config::Config;
use crate::display::PCD8544;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clk,
    Din,
    Dc,
    Ce,
    Rst,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, Level),
    Delay(u32),
}

/// One byte as latched by the chip: the DC level during the CE bracket and the 8 sampled bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub mode: Mode,
    pub value: u8,
}

impl Frame {
    pub fn cmd(value: u8) -> Frame {
        Frame { mode: Mode::Command, value }
    }

    pub fn data(value: u8) -> Frame {
        Frame { mode: Mode::Data, value }
    }
}

pub struct RecordingPin {
    line: Line,
    log: Rc<RefCell<Vec<Event>>>,
}

impl OutputPin for RecordingPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Set(self.line, Level::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Set(self.line, Level::High));
        Ok(())
    }
}

pub struct RecordingDelay {
    log: Rc<RefCell<Vec<Event>>>,
}

impl DelayUs<u32> for RecordingDelay {
    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::Delay(us));
    }
}

pub type TestBackend =
    PCD8544GpioBackend<RecordingPin, RecordingPin, RecordingPin, RecordingPin, RecordingDelay>;
pub type TestDisplay = PCD8544<TestBackend, RecordingPin, RecordingPin>;

#[derive(Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn pin(&self, line: Line) -> RecordingPin {
        RecordingPin { line, log: self.log.clone() }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { log: self.log.clone() }
    }

    pub fn backend(&self) -> TestBackend {
        PCD8544GpioBackend::new(
            self.pin(Line::Clk),
            self.pin(Line::Din),
            self.pin(Line::Dc),
            self.pin(Line::Ce),
            self.delay(),
        )
        .unwrap()
    }

    /// An initialized display with the log emptied afterwards.
    pub fn display(&self) -> TestDisplay {
        self.display_with(Config::default())
    }

    pub fn display_with(&self, config: Config) -> TestDisplay {
        let rst = self.pin(Line::Rst);
        let light = self.pin(Line::Light);
        let display = PCD8544::new(self.backend(), rst, light, config).unwrap();
        self.take();
        display
    }

    /// Drain the log.
    pub fn take(&self) -> Vec<Event> {
        self.log.borrow_mut().drain(..).collect()
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    /// DIN level at every rising CLK edge, regardless of CE.
    pub fn sampled_bits(&self) -> Vec<bool> {
        let mut clk = Level::Low;
        let mut din = Level::Low;
        let mut bits = Vec::new();
        for event in self.log.borrow().iter() {
            match *event {
                Event::Set(Line::Clk, level) => {
                    if clk == Level::Low && level == Level::High {
                        bits.push(din == Level::High);
                    }
                    clk = level;
                }
                Event::Set(Line::Din, level) => din = level,
                _ => {}
            }
        }
        bits
    }

    /// Decode the log into framed bytes.
    ///
    /// Panics when a CE bracket does not contain exactly 8 clocked bits or when DC changes while
    /// the chip is selected.
    pub fn frames(&self) -> Vec<Frame> {
        let mut ce = Level::High;
        let mut dc = Level::High;
        let mut clk = Level::Low;
        let mut din = Level::Low;
        let mut bits: Vec<bool> = Vec::new();
        let mut frames = Vec::new();
        for event in self.log.borrow().iter() {
            match *event {
                Event::Set(Line::Ce, level) => {
                    if ce == Level::Low && level == Level::High {
                        assert_eq!(bits.len(), 8, "chip deselected after {} bits", bits.len());
                        let value = bits.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8);
                        let mode = match dc {
                            Level::Low => Mode::Command,
                            Level::High => Mode::Data,
                        };
                        frames.push(Frame { mode, value });
                        bits.clear();
                    }
                    ce = level;
                }
                Event::Set(Line::Dc, level) => {
                    assert!(ce == Level::High || level == dc, "DC changed while chip selected");
                    dc = level;
                }
                Event::Set(Line::Clk, level) => {
                    if ce == Level::Low && clk == Level::Low && level == Level::High {
                        bits.push(din == Level::High);
                    }
                    clk = level;
                }
                Event::Set(Line::Din, level) => din = level,
                _ => {}
            }
        }
        assert!(bits.is_empty(), "unterminated frame");
        frames
    }

    pub fn commands(&self) -> Vec<u8> {
        self.frames().into_iter().filter(|f| f.mode == Mode::Command).map(|f| f.value).collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.frames().into_iter().filter(|f| f.mode == Mode::Data).map(|f| f.value).collect()
    }

    /// Number of times CE went active.
    pub fn selections(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|e| **e == Event::Set(Line::Ce, Level::Low))
            .count()
    }
}
