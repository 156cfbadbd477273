use pcd8544_gpio::dummypins::{DummyOutputPin, NoDelay};
use pcd8544_gpio::{Config, PCD8544GpioBackend, PCD8544};
use std::fmt::Write;

fn main() {
    let pcd_light = DummyOutputPin;
    let pcd_clk = DummyOutputPin;
    let pcd_din = DummyOutputPin;
    let pcd_dc = DummyOutputPin;
    let pcd_ce = DummyOutputPin;
    let pcd_rst = DummyOutputPin;

    let backend = PCD8544GpioBackend::new(pcd_clk, pcd_din, pcd_dc, pcd_ce, NoDelay)
        .expect("Infallible cannot fail");
    let mut display = PCD8544::new(backend, pcd_rst, pcd_light, Config::default())
        .expect("Infallible cannot fail");

    display.draw_border().expect("Infallible cannot fail");
    display.goto(6, 2).expect("Infallible cannot fail");
    write!(display, "Hello World").unwrap();
}
