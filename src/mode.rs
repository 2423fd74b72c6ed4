use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Cst816s, IrqControl, MotionMask};

/// How the chip reports touches and how the driver interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
  /// Start-up interrupt mask (touch + change), chip default motion mask.
  Default,
  /// Software-side gesture detection; the chip only signals touch changes,
  /// optionally also motion.
  Fast,
  /// Hardware gesture recognition with double-click and a single
  /// long-press pulse.
  Hardware,
}

impl OperatingMode {
  pub const fn as_str(self) -> &'static str {
    match self {
      OperatingMode::Default => "default",
      OperatingMode::Fast => "fast",
      OperatingMode::Hardware => "hardware",
    }
  }
}

/// Driver-side record of the active mode and its notification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeState {
  pub mode: OperatingMode,
  /// Report while a finger moves, not only on state changes.
  pub notify_on_motion: bool,
  /// Only the release of a gesture is meaningful to consumers.
  pub notify_release_only: bool,
}

impl ModeState {
  pub const fn new() -> Self {
    Self { mode: OperatingMode::Default, notify_on_motion: false, notify_release_only: true }
  }
}

impl Default for ModeState {
  fn default() -> Self {
    Self::new()
  }
}

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Current mode and notification policy.
  pub fn mode_state(&self) -> ModeState {
    self.mode
  }

  pub fn operating_mode(&self) -> OperatingMode {
    self.mode.mode
  }

  /// Switch to fast mode.
  ///
  /// The chip pulses on touch changes, and with `notify_motion` also on
  /// motion and while touched. The motion mask is cleared so no hardware
  /// gesture detector delays the report. Returns whether the
  /// interrupt-control write succeeded; the mode is recorded even if the
  /// following motion-mask write fails.
  pub fn enter_fast(&mut self, notify_motion: bool) -> bool {
    let mut irq = IrqControl::CHANGE;
    if notify_motion {
      irq |= IrqControl::MOTION | IrqControl::TOUCH;
    }

    if !self.write_irq_control(irq) {
      return false;
    }
    let mask_ok = self.write_motion_mask(MotionMask::empty());

    self.mode.mode = OperatingMode::Fast;
    self.mode.notify_on_motion = notify_motion;
    self.log_mode_switch(mask_ok);
    true
  }

  /// Switch to hardware gesture mode.
  ///
  /// Long presses produce a single pulse and double-click detection is the
  /// only extra detector enabled. Same write-ordering and result semantics
  /// as [`Cst816s::enter_fast`].
  pub fn enter_hardware(&mut self) -> bool {
    if !self.write_irq_control(IrqControl::MOTION | IrqControl::ONCE_LONG_PRESS) {
      return false;
    }
    let mask_ok = self.write_motion_mask(MotionMask::DOUBLE_CLICK);

    self.mode.mode = OperatingMode::Hardware;
    self.mode.notify_release_only = true;
    self.mode.notify_on_motion = false;
    self.log_mode_switch(mask_ok);
    true
  }

  fn log_mode_switch(&self, mask_ok: bool) {
    if !self.config.debug {
      return;
    }
    if !mask_ok {
      log::warn!("Motion mask write failed, chip may not match {} mode", self.mode.mode.as_str());
    }
    log::debug!("Set to {} mode, motion={}", self.mode.mode.as_str(), self.mode.notify_on_motion);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{fake, Reg};

  #[test]
  fn starts_in_default_mode() {
    let dev = fake::device();
    assert_eq!(dev.mode_state(), ModeState::new());
    assert!(dev.mode_state().notify_release_only);
  }

  #[test]
  fn fast_with_motion_notification() {
    let mut dev = fake::device();
    dev.i2c.set_reg(Reg::MotionMask, 0x07);
    assert!(dev.enter_fast(true));
    assert_eq!(dev.i2c.reg(Reg::IrqControl), 0x20 | 0x10 | 0x40);
    assert_eq!(dev.i2c.reg(Reg::MotionMask), 0x00);
    assert_eq!(dev.operating_mode(), OperatingMode::Fast);
    assert!(dev.mode_state().notify_on_motion);
  }

  #[test]
  fn fast_without_motion_notification() {
    let mut dev = fake::device();
    assert!(dev.enter_fast(false));
    assert_eq!(dev.i2c.reg(Reg::IrqControl), 0x20);
    assert_eq!(dev.i2c.reg(Reg::MotionMask), 0x00);
    assert!(!dev.mode_state().notify_on_motion);
  }

  #[test]
  fn interrupt_mask_is_written_before_motion_mask() {
    let mut dev = fake::device();
    dev.enter_hardware();
    assert_eq!(dev.i2c.writes, vec![(0xFA, 0x11), (0xEC, 0x01)]);
  }

  #[test]
  fn hardware_mode() {
    let mut dev = fake::device();
    dev.enter_fast(true);
    assert!(dev.enter_hardware());
    assert_eq!(dev.i2c.reg(Reg::IrqControl), 0x10 | 0x01);
    assert_eq!(dev.i2c.reg(Reg::MotionMask), 0x01);
    let state = dev.mode_state();
    assert_eq!(state.mode, OperatingMode::Hardware);
    assert!(state.notify_release_only);
    assert!(!state.notify_on_motion);
  }

  #[test]
  fn failed_interrupt_write_keeps_mode() {
    let mut dev = fake::device();
    dev.i2c.fail(Reg::IrqControl);
    assert!(!dev.enter_fast(true));
    assert!(!dev.enter_hardware());
    assert_eq!(dev.operating_mode(), OperatingMode::Default);
    assert!(dev.i2c.writes.is_empty());
  }

  #[test]
  fn failed_motion_mask_write_still_advances_mode() {
    let mut dev = fake::device();
    dev.i2c.fail(Reg::MotionMask);
    assert!(dev.enter_hardware());
    assert_eq!(dev.operating_mode(), OperatingMode::Hardware);
    assert_eq!(dev.i2c.writes, vec![(0xFA, 0x11)]);
  }
}
