use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Cst816s, Reg};

mod gesture;
mod touchpoint;

pub use gesture::*;
pub use touchpoint::*;

/// Length of the gesture window starting at [`Reg::GestureId`].
pub(crate) const GESTURE_WINDOW: usize = 6;

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Read the current contact with one register access per byte.
  ///
  /// Returns `None` while suspended (without touching the bus), when no
  /// finger is down, or when any of the five reads fails.
  pub fn sample_basic(&mut self) -> Option<TouchSample> {
    if self.suspended {
      return None;
    }

    let fingers = self.read_register(Reg::FingerNum)?;
    if fingers == 0 {
      return None;
    }

    let x_high = self.read_register(Reg::XPosHigh)?;
    let x_low = self.read_register(Reg::XPosLow)?;
    let y_high = self.read_register(Reg::YPosHigh)?;
    let y_low = self.read_register(Reg::YPosLow)?;

    Some(TouchSample::pressed(Point::new(
      decode_coordinate(x_high, x_low),
      decode_coordinate(y_high, y_low),
    )))
  }

  /// Read gesture, finger count, phase and position in one transaction.
  ///
  /// Returns `None` while suspended (without touching the bus), when the
  /// read fails, or when the chip reports zero fingers. In the latter case the
  /// coordinate registers still hold the previous contact and are ignored.
  pub fn sample_gesture(&mut self) -> Option<GestureRecord> {
    if self.suspended {
      return None;
    }

    let mut window = [0u8; GESTURE_WINDOW];
    window.copy_from_slice(self.read_registers(Reg::GestureId, GESTURE_WINDOW)?);
    GestureRecord::decode(&window)
  }
}
