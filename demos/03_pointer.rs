//! Pointer adapter with calibration and rotation.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};
use cst816s::{Calibration, Config, Cst816s, NoResetPin, Pointer, PointerConfig, Rotation, TouchState};

#[allow(dead_code)]
fn run<I2C, D>(i2c: I2C, delay: D) -> Result<(), cst816s::Error<core::convert::Infallible>>
where
  I2C: I2c<SevenBitAddress>,
  D: DelayNs,
{
  let mut dev = Cst816s::new(i2c, None::<NoResetPin>, delay, Config::default());
  dev.initialize()?;
  dev.enter_fast(true);

  let calibration = Calibration { delta_x: -4.0, delta_y: 2.0, ..Calibration::IDENTITY };
  let config = PointerConfig::new(240, 280)
    .with_rotation(Rotation::Deg90)
    .with_calibration(calibration);
  let mut pointer = Pointer::new(dev, config);

  loop {
    let event = pointer.poll();
    match event.state {
      TouchState::Pressed => {
        let _ = event.point;
      }
      TouchState::Released => {}
    }
  }
}

fn main() {}
