//! Operating modes, low-power tuning and suspend around a display refresh.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};
use cst816s::{Config, Cst816s, NoResetPin, OperatingMode};

#[allow(dead_code)]
fn run<I2C, D>(i2c: I2C, delay: D) -> Result<(), cst816s::Error<core::convert::Infallible>>
where
  I2C: I2c<SevenBitAddress>,
  D: DelayNs,
{
  let mut dev = Cst816s::new(i2c, None::<NoResetPin>, delay, Config::default().with_debug(true));
  dev.initialize()?;

  if dev.enter_hardware() {
    assert_eq!(dev.operating_mode(), OperatingMode::Hardware);
  }
  dev.set_long_press_time(3);
  dev.set_auto_reset_time(0);

  dev.set_wake_up_threshold(48);
  dev.set_wake_up_scan_frequency(7);
  dev.set_auto_sleep_timeout(2);
  dev.set_auto_sleep(true);
  dev.log_chip_status();

  dev.suspend();
  // refresh the display here; no touch traffic hits the bus
  dev.resume();

  dev.wake_up();
  if !dev.soft_reset() {
    // chip did not take the reset, keep the current configuration
  }
  Ok(())
}

fn main() {}
