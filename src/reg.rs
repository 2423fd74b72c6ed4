/******************************************************************************
 * Refer to the Hynitron CST816S register description for more information.  *
 * ========================================================================== *
 *                       CST816S - Registers & Memory Map                     *
*******************************************************************************/

pub(crate) const I2C_ADDR: u8 = 0x15;

/// Value reported by [`Reg::ChipId`] on a CST816S.
pub const CHIP_ID: u8 = 0xB6;

/// IO-control bit that asserts the software reset.
pub(crate) const SOFT_RESET: u8 = 0x04;

/// [`Reg::DisableAutoSleep`] value that keeps the chip out of low power.
pub(crate) const AUTO_SLEEP_DISABLED: u8 = 0xFE;
/// [`Reg::DisableAutoSleep`] value that lets the chip enter low power on its own.
pub(crate) const AUTO_SLEEP_ENABLED: u8 = 0x00;

/// Byte-wide registers of the CST816S.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
  // Touch report (0x01..0x06)
  GestureId = 0x01,
  FingerNum = 0x02,
  XPosHigh = 0x03,
  XPosLow = 0x04,
  YPosHigh = 0x05,
  YPosLow = 0x06,

  RegisterVersion = 0x15,

  // Identification (0xA7..0xA9)
  ChipId = 0xA7,
  ProjectId = 0xA8,
  FirmwareVersion = 0xA9,

  // Gesture & interrupt tuning (0xEC..0xEF)
  MotionMask = 0xEC,
  IrqPulseWidth = 0xED,
  NormalScanPeriod = 0xEE,
  MotionSlideAngle = 0xEF,

  // Low power scan (0xF4..0xF9)
  LowPowerAutoWakeTime = 0xF4,
  LowPowerScanThreshold = 0xF5,
  LowPowerScanWindow = 0xF6,
  LowPowerScanFrequency = 0xF7,
  LowPowerScanIdac = 0xF8,
  AutoSleepTime = 0xF9,

  // Control (0xFA..0xFE)
  IrqControl = 0xFA,
  AutoReset = 0xFB,
  LongPressTime = 0xFC,
  IoControl = 0xFD,
  DisableAutoSleep = 0xFE,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}
