//! Polling example: bring-up, then basic and gesture sampling.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  digital::OutputPin,
  i2c::{I2c, SevenBitAddress},
};
use cst816s::{Config, Cst816s, Gesture};

#[allow(dead_code)]
fn run<I2C, RST, D>(i2c: I2C, rst: RST, delay: D) -> Result<(), cst816s::Error<RST::Error>>
where
  I2C: I2c<SevenBitAddress>,
  RST: OutputPin,
  D: DelayNs,
{
  let mut dev = Cst816s::new(i2c, Some(rst), delay, Config::default().with_debug(true));
  let identity = dev.initialize()?;
  let _ = identity.firmware_version;

  loop {
    if let Some(record) = dev.sample_gesture() {
      match record.gesture {
        Gesture::SwipeLeft | Gesture::SwipeRight => {
          // horizontal swipe
        }
        Gesture::LongPress => {
          // long press
        }
        _ => {
          let _ = (record.point, record.pressed);
        }
      }
    } else if let Some(sample) = dev.sample_basic() {
      let _ = sample.point;
    }
  }
}

fn main() {}
