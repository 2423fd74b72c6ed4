use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::reg::AUTO_SLEEP_ENABLED;
use crate::{Cst816s, ModeState, Reg};

/// Diagnostic snapshot combining chip registers and driver state.
///
/// Register fields are `None` when their read failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipStatus {
  pub chip_id: Option<u8>,
  pub firmware_version: Option<u8>,
  pub irq_control: Option<u8>,
  pub motion_mask: Option<u8>,
  pub auto_sleep: Option<bool>,
  pub mode: ModeState,
}

impl fmt::Display for ChipStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "=== CST816S Status ===")?;
    if let Some(id) = self.chip_id {
      writeln!(f, "chip_id: {id:#04x}")?;
    }
    if let Some(v) = self.firmware_version {
      writeln!(f, "fw_version: {v:#04x}")?;
    }
    if let Some(irq) = self.irq_control {
      writeln!(f, "irq_control: {irq:#04x}")?;
    }
    if let Some(mask) = self.motion_mask {
      writeln!(f, "motion_mask: {mask:#04x}")?;
    }
    if let Some(enabled) = self.auto_sleep {
      writeln!(f, "auto_sleep: {}", if enabled { "Enabled" } else { "Disabled" })?;
    }
    writeln!(f, "operating_mode: {}", self.mode.mode.as_str())?;
    writeln!(f, "notify_on_motion: {}", self.mode.notify_on_motion)?;
    writeln!(f, "notify_release_only: {}", self.mode.notify_release_only)?;
    write!(f, "=====================")
  }
}

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Read the diagnostic registers and pair them with the driver state.
  pub fn chip_status(&mut self) -> ChipStatus {
    ChipStatus {
      chip_id: self.read_register(Reg::ChipId),
      firmware_version: self.read_register(Reg::FirmwareVersion),
      irq_control: self.read_register(Reg::IrqControl),
      motion_mask: self.read_register(Reg::MotionMask),
      auto_sleep: self.read_register(Reg::DisableAutoSleep).map(|v| v == AUTO_SLEEP_ENABLED),
      mode: self.mode,
    }
  }

  /// Log [`Cst816s::chip_status`] when debug output is enabled.
  pub fn log_chip_status(&mut self) {
    if !self.config.debug {
      return;
    }
    let status = self.chip_status();
    log::info!("{}", status);
  }
}
