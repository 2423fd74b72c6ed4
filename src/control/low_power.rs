use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Cst816s, Reg};

/// The low-power scan registers hold `256 - value`. Clamping to `1..=255`
/// first keeps the stored byte in range.
fn encode_inverted(value: i32) -> u8 {
  (256 - value.clamp(1, 255)) as u8
}

fn decode_inverted(raw: u8) -> u16 {
  256 - raw as u16
}

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Low-power scan wake-up threshold. Smaller is more sensitive.
  pub fn wake_up_threshold(&mut self) -> Option<u16> {
    self.read_register(Reg::LowPowerScanThreshold).map(decode_inverted)
  }

  /// Set the wake-up threshold, clamped to `1..=255` (chip default 48).
  pub fn set_wake_up_threshold(&mut self, value: i32) -> bool {
    self.write_register(Reg::LowPowerScanThreshold, encode_inverted(value))
  }

  /// Low-power scan frequency. Smaller is more sensitive.
  pub fn wake_up_scan_frequency(&mut self) -> Option<u16> {
    self.read_register(Reg::LowPowerScanFrequency).map(decode_inverted)
  }

  /// Set the scan frequency, clamped to `1..=255` (chip default 7).
  pub fn set_wake_up_scan_frequency(&mut self, value: i32) -> bool {
    self.write_register(Reg::LowPowerScanFrequency, encode_inverted(value))
  }

  /// Seconds without touch before the chip enters low power.
  pub fn auto_sleep_timeout(&mut self) -> Option<u8> {
    self.read_register(Reg::AutoSleepTime)
  }

  /// Clamped to `1..=255` seconds.
  pub fn set_auto_sleep_timeout(&mut self, seconds: i32) -> bool {
    self.write_register(Reg::AutoSleepTime, seconds.clamp(1, 255) as u8)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fake;

  #[test]
  fn wake_up_threshold_round_trips() {
    let mut dev = fake::device();
    for value in 1..=255 {
      assert!(dev.set_wake_up_threshold(value));
      assert_eq!(dev.i2c.reg(Reg::LowPowerScanThreshold), (256 - value) as u8);
      assert_eq!(dev.wake_up_threshold(), Some(value as u16));
    }
  }

  #[test]
  fn wake_up_threshold_is_clamped() {
    let mut dev = fake::device();
    dev.set_wake_up_threshold(0);
    assert_eq!(dev.wake_up_threshold(), Some(1));
    dev.set_wake_up_threshold(-40);
    assert_eq!(dev.wake_up_threshold(), Some(1));
    dev.set_wake_up_threshold(300);
    assert_eq!(dev.wake_up_threshold(), Some(255));
    assert_eq!(dev.i2c.reg(Reg::LowPowerScanThreshold), 1);
  }

  #[test]
  fn scan_frequency_uses_same_encoding() {
    let mut dev = fake::device();
    dev.set_wake_up_scan_frequency(7);
    assert_eq!(dev.i2c.reg(Reg::LowPowerScanFrequency), 249);
    assert_eq!(dev.wake_up_scan_frequency(), Some(7));
    dev.set_wake_up_scan_frequency(0);
    assert_eq!(dev.wake_up_scan_frequency(), Some(1));
  }

  #[test]
  fn zeroed_register_decodes_past_byte_range() {
    assert_eq!(decode_inverted(0), 256);
  }

  #[test]
  fn unreadable_threshold_is_none() {
    let mut dev = fake::device();
    dev.i2c.fail(Reg::LowPowerScanThreshold);
    assert_eq!(dev.wake_up_threshold(), None);
  }

  #[test]
  fn auto_sleep_timeout_is_clamped() {
    let mut dev = fake::device();
    dev.set_auto_sleep_timeout(0);
    assert_eq!(dev.auto_sleep_timeout(), Some(1));
    dev.set_auto_sleep_timeout(1000);
    assert_eq!(dev.auto_sleep_timeout(), Some(255));
    dev.set_auto_sleep_timeout(2);
    assert_eq!(dev.auto_sleep_timeout(), Some(2));
  }
}
