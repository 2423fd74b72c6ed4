use bitflags::bitflags;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Cst816s, Reg};

mod low_power;
mod timing;

bitflags! {
  /// Interrupt-control register (`0xFA`): which conditions pulse the IRQ line.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct IrqControl: u8 {
    /// Periodically pulse the IRQ pin, for wiring tests.
    const TEST = 0x80;
    /// Pulse periodically while a touch is present.
    const TOUCH = 0x40;
    /// Pulse when the touch state changes.
    const CHANGE = 0x20;
    /// Pulse when a gesture is recognised.
    const MOTION = 0x10;
    /// A long press yields a single pulse.
    const ONCE_LONG_PRESS = 0x01;
  }
}

impl IrqControl {
  /// Mask applied at bring-up and after a soft reset.
  pub const DEFAULT: Self = Self::TOUCH.union(Self::CHANGE);
}

bitflags! {
  /// Motion-mask register (`0xEC`): extra gesture detectors.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
  pub struct MotionMask: u8 {
    /// Continuous left/right sliding.
    const CONTINUOUS_LR = 0x04;
    /// Continuous up/down sliding.
    const CONTINUOUS_UD = 0x02;
    /// Double-click recognition.
    const DOUBLE_CLICK = 0x01;
  }
}

impl MotionMask {
  /// Compose a mask from the three independent detector switches.
  pub fn from_capabilities(continuous_lr: bool, continuous_ud: bool, double_click: bool) -> Self {
    let mut mask = Self::empty();
    mask.set(Self::CONTINUOUS_LR, continuous_lr);
    mask.set(Self::CONTINUOUS_UD, continuous_ud);
    mask.set(Self::DOUBLE_CLICK, double_click);
    mask
  }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IrqControl {
  fn format(&self, f: defmt::Formatter) {
    defmt::write!(f, "IrqControl({=u8:#04x})", self.bits());
  }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MotionMask {
  fn format(&self, f: defmt::Formatter) {
    defmt::write!(f, "MotionMask({=u8:#04x})", self.bits());
  }
}

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Read back the interrupt-control register.
  pub fn irq_control(&mut self) -> Option<IrqControl> {
    self.read_register(Reg::IrqControl).map(IrqControl::from_bits_retain)
  }

  /// Read back the motion-mask register.
  pub fn motion_mask(&mut self) -> Option<MotionMask> {
    self.read_register(Reg::MotionMask).map(MotionMask::from_bits_retain)
  }

  /// Enable continuous sliding and double-click detection independently.
  ///
  /// Leaves the operating mode untouched.
  pub fn set_motion_mask(&mut self, continuous_lr: bool, continuous_ud: bool, double_click: bool) -> bool {
    let mask = MotionMask::from_capabilities(continuous_lr, continuous_ud, double_click);
    let ok = self.write_register(Reg::MotionMask, mask.bits());
    if ok && self.config.debug {
      log::debug!(
        "Motion mask set: LR={} UD={} DClick={}",
        continuous_lr,
        continuous_ud,
        double_click
      );
    }
    ok
  }

  pub(crate) fn write_irq_control(&mut self, irq: IrqControl) -> bool {
    self.write_register(Reg::IrqControl, irq.bits())
  }

  pub(crate) fn write_motion_mask(&mut self, mask: MotionMask) -> bool {
    self.write_register(Reg::MotionMask, mask.bits())
  }
}
