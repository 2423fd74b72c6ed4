use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Cst816s, Reg};

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Seconds of continuous press after which the chip resets itself.
  ///
  /// Clamped to `0..=255`; `0` disables the feature.
  pub fn set_long_press_time(&mut self, seconds: i32) -> bool {
    self.write_register(Reg::LongPressTime, seconds.clamp(0, 255) as u8)
  }

  pub fn long_press_time(&mut self) -> Option<u8> {
    self.read_register(Reg::LongPressTime)
  }

  /// Seconds of touch without a valid gesture after which the chip resets.
  ///
  /// Clamped to `0..=255`; `0` disables the feature.
  pub fn set_auto_reset_time(&mut self, seconds: i32) -> bool {
    self.write_register(Reg::AutoReset, seconds.clamp(0, 255) as u8)
  }

  pub fn auto_reset_time(&mut self) -> Option<u8> {
    self.read_register(Reg::AutoReset)
  }
}
