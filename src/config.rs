use crate::IrqControl;

/// Start-up configuration applied by [`crate::Cst816s::initialize`].
///
/// The interrupt mask is also what [`crate::Cst816s::soft_reset`] restores,
/// so it doubles as the definition of the default operating mode.
///
/// # Example
/// ```no_run
/// use cst816s::{Config, IrqControl};
///
/// let config = Config::default()
///   .with_debug(true)
///   .with_interrupt(IrqControl::TOUCH.union(IrqControl::CHANGE))
///   .with_auto_sleep(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Log transport faults and state changes.
  pub debug: bool,
  /// Interrupt-control mask written during bring-up and after a soft reset.
  pub interrupt: IrqControl,
  /// Whether the chip may drop into low power on its own.
  pub auto_sleep: bool,
}

impl Config {
  pub const fn new(debug: bool, interrupt: IrqControl, auto_sleep: bool) -> Self {
    Self { debug, interrupt, auto_sleep }
  }

  pub const fn with_debug(mut self, debug: bool) -> Self {
    self.debug = debug;
    self
  }

  pub const fn with_interrupt(mut self, interrupt: IrqControl) -> Self {
    self.interrupt = interrupt;
    self
  }

  pub const fn with_auto_sleep(mut self, auto_sleep: bool) -> Self {
    self.auto_sleep = auto_sleep;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(false, IrqControl::DEFAULT, false)
  }
}
