use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::reg::{AUTO_SLEEP_DISABLED, AUTO_SLEEP_ENABLED, SOFT_RESET};
use crate::{Cst816s, Error, ModeState, Reg, CHIP_ID};

/// Identification registers captured during [`Cst816s::initialize`].
///
/// Each field is `None` when the corresponding read failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identity {
  pub chip_id: Option<u8>,
  pub register_version: Option<u8>,
  pub project_id: Option<u8>,
  pub firmware_version: Option<u8>,
}

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Bring the controller up.
  ///
  /// Pulses the reset line, reads the identification registers, verifies the
  /// chip id and applies the start-up interrupt and auto-sleep settings.
  /// Unreadable identification registers are tolerated; a readable chip id
  /// that is not [`CHIP_ID`] aborts before anything is written.
  pub fn initialize(&mut self) -> Result<Identity, Error<P>> {
    self.hardware_reset()?;

    let identity = Identity {
      chip_id: self.read_register(Reg::ChipId),
      register_version: self.read_register(Reg::RegisterVersion),
      project_id: self.read_register(Reg::ProjectId),
      firmware_version: self.read_register(Reg::FirmwareVersion),
    };
    log_identity(&identity);

    if let Some(id) = identity.chip_id {
      if id != CHIP_ID {
        return Err(Error::InvalidChipId(id));
      }
    }

    self.write_irq_control(self.config.interrupt);
    self.set_auto_sleep(self.config.auto_sleep);
    self.mode = ModeState::new();

    Ok(identity)
  }

  /// Pulse the reset line: low for 1 ms, then high and 50 ms to boot.
  ///
  /// Does nothing when no reset pin was provided.
  pub fn hardware_reset(&mut self) -> Result<(), Error<P>> {
    let Some(rst) = self.reset.as_mut() else {
      return Ok(());
    };

    rst.set_low().map_err(Error::ResetPin)?;
    self.delay.delay_ms(1);
    rst.set_high().map_err(Error::ResetPin)?;
    self.delay.delay_ms(50);
    Ok(())
  }

  /// Reset the chip through the IO-control register.
  ///
  /// Restores the start-up interrupt mask afterwards and returns the driver
  /// to [`crate::OperatingMode::Default`]. The result reflects only whether
  /// the reset could be asserted.
  pub fn soft_reset(&mut self) -> bool {
    if !self.write_register(Reg::IoControl, SOFT_RESET) {
      return false;
    }
    self.delay.delay_ms(50);
    self.write_register(Reg::IoControl, 0);
    self.delay.delay_ms(100);

    self.write_irq_control(self.config.interrupt);
    self.mode = ModeState::new();
    if self.config.debug {
      log::debug!("Soft reset completed");
    }
    true
  }

  /// Kick the chip out of low power.
  ///
  /// The CST816S wakes on transitions of the sleep-disable register rather
  /// than on a particular value, hence the burst of writes. The auto-sleep
  /// setting observed beforehand is restored at the end; if it could not be
  /// read, auto-sleep is left disabled.
  pub fn wake_up(&mut self) {
    let auto_sleep = self.auto_sleep();

    self.write_register(Reg::DisableAutoSleep, AUTO_SLEEP_ENABLED);
    self.delay.delay_ms(10);
    self.write_register(Reg::DisableAutoSleep, AUTO_SLEEP_DISABLED);
    self.delay.delay_ms(50);
    self.write_register(Reg::DisableAutoSleep, AUTO_SLEEP_DISABLED);
    self.delay.delay_ms(50);
    self.set_auto_sleep(auto_sleep == Some(true));
  }

  /// Whether the chip is allowed to enter low power by itself.
  pub fn auto_sleep(&mut self) -> Option<bool> {
    self.read_register(Reg::DisableAutoSleep).map(|v| v == AUTO_SLEEP_ENABLED)
  }

  pub fn set_auto_sleep(&mut self, enable: bool) -> bool {
    let value = if enable { AUTO_SLEEP_ENABLED } else { AUTO_SLEEP_DISABLED };
    self.write_register(Reg::DisableAutoSleep, value)
  }

  /// Stop sampling until [`Cst816s::resume`].
  ///
  /// Purely driver-side: no register is touched and configuration calls keep
  /// working. Use it to keep the bus quiet while the host does something
  /// timing sensitive, such as a display refresh.
  pub fn suspend(&mut self) {
    self.suspended = true;
  }

  pub fn resume(&mut self) {
    self.suspended = false;
  }

  pub fn is_suspended(&self) -> bool {
    self.suspended
  }
}

fn log_identity(identity: &Identity) {
  match identity.chip_id {
    Some(id) => log::info!("Chip ID: {:#04x}", id),
    None => log::warn!("Chip ID unavailable"),
  }
  match identity.register_version {
    Some(v) => log::info!("Touch version: {}", v),
    None => log::warn!("Touch version unavailable"),
  }
  match identity.project_id {
    Some(id) => log::info!("Proj ID: {:#04x}", id),
    None => log::warn!("Proj ID unavailable"),
  }
  match identity.firmware_version {
    Some(v) => log::info!("FW Version: {:#04x}", v),
    None => log::warn!("FW Version unavailable"),
  }
}
