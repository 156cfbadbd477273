#![deny(unsafe_code)]
#![allow(clippy::empty_loop)]
#![deny(warnings)]
#![no_std]
#![no_main]
extern crate cortex_m;
extern crate embedded_hal;
extern crate stm32f1xx_hal as hal;

use defmt_rtt as _;
use panic_halt as _;

use core::fmt::Write;
use cortex_m_rt::entry;
use hal::{pac, prelude::*};

use pcd8544_gpio::{Config, PCD8544GpioBackend, PCD8544};

#[entry]
fn main() -> ! {
    // Get access to core and device peripherals and raw flash and rcc
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();
    let mut flash = dp.FLASH.constrain();
    let rcc = dp.RCC.constrain();

    // Freeze clocks
    let clocks = rcc.cfgr.freeze(&mut flash.acr);

    // the bus timing comes from this delay, the pins themselves may toggle as fast as they like
    let delay = cp.SYST.delay(&clocks);

    // Acquire the GPIO peripherals
    let mut gpioa = dp.GPIOA.split();
    let mut gpiob = dp.GPIOB.split();

    let pcd_light = gpiob.pb13.into_push_pull_output(&mut gpiob.crh);
    let pcd_clk = gpiob.pb15.into_push_pull_output(&mut gpiob.crh);
    let pcd_din = gpioa.pa8.into_push_pull_output(&mut gpioa.crh);
    let pcd_dc = gpioa.pa9.into_push_pull_output(&mut gpioa.crh);
    let pcd_ce = gpioa.pa10.into_push_pull_output(&mut gpioa.crh);
    let pcd_rst = gpioa.pa11.into_push_pull_output(&mut gpioa.crh);

    let backend = PCD8544GpioBackend::new(pcd_clk, pcd_din, pcd_dc, pcd_ce, delay).unwrap();

    let mut display = PCD8544::new(backend, pcd_rst, pcd_light, Config::default())
        .expect("Infallible cannot fail");

    display.draw_border().expect("Infallible cannot fail");
    display.goto(3, 2).expect("Infallible cannot fail");
    writeln!(display, "Hello World").expect("Infallible cannot fail");
    defmt::info!("hello world drawn");

    loop {}
}
