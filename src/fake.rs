//! Simulated CST816S for unit tests.
//!
//! The bus models the chip's register file with an auto-incrementing address
//! pointer, counts transactions and records every register write. Faults can
//! be injected for the whole bus or for transactions touching particular
//! registers.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, ErrorKind, I2c, NoAcknowledgeSource, Operation, SevenBitAddress};

use crate::reg::I2C_ADDR;
use crate::{Config, Cst816s, Reg, CHIP_ID};

pub(crate) type FakeDevice = Cst816s<FakeBus, FakePin, FakeDelay>;

/// Handle without a reset pin, wrapped around a chip reporting the expected id.
pub(crate) fn device() -> FakeDevice {
  Cst816s::new(FakeBus::new(), None, FakeDelay::default(), Config::default().with_debug(true))
}

pub(crate) fn device_with_reset() -> FakeDevice {
  Cst816s::new(FakeBus::new(), Some(FakePin::default()), FakeDelay::default(), Config::default().with_debug(true))
}

pub(crate) struct FakeBus {
  regs: [u8; 256],
  pointer: u8,
  pub(crate) transactions: usize,
  pub(crate) writes: Vec<(u8, u8)>,
  pub(crate) offline: bool,
  pub(crate) failing: Vec<u8>,
}

impl FakeBus {
  pub(crate) fn new() -> Self {
    let mut bus = Self {
      regs: [0; 256],
      pointer: 0,
      transactions: 0,
      writes: Vec::new(),
      offline: false,
      failing: Vec::new(),
    };
    bus.set_reg(Reg::ChipId, CHIP_ID);
    bus.set_reg(Reg::RegisterVersion, 0x02);
    bus.set_reg(Reg::ProjectId, 0x11);
    bus.set_reg(Reg::FirmwareVersion, 0x03);
    bus
  }

  pub(crate) fn reg(&self, reg: Reg) -> u8 {
    self.regs[u8::from(reg) as usize]
  }

  pub(crate) fn set_reg(&mut self, reg: Reg, value: u8) {
    self.regs[u8::from(reg) as usize] = value;
  }

  pub(crate) fn fail(&mut self, reg: Reg) {
    self.failing.push(reg.into());
  }

  /// Values written to `reg`, oldest first.
  pub(crate) fn writes_to(&self, reg: Reg) -> Vec<u8> {
    let addr = u8::from(reg);
    self.writes.iter().filter(|(r, _)| *r == addr).map(|(_, v)| *v).collect()
  }

  fn check(&self) -> Result<(), ErrorKind> {
    if self.failing.contains(&self.pointer) {
      Err(ErrorKind::Other)
    } else {
      Ok(())
    }
  }
}

impl i2c::ErrorType for FakeBus {
  type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for FakeBus {
  fn transaction(&mut self, address: SevenBitAddress, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    self.transactions += 1;
    if self.offline || address != I2C_ADDR {
      return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
    }

    for op in operations {
      match op {
        Operation::Write(bytes) => {
          let Some((&reg, data)) = bytes.split_first() else {
            continue;
          };
          self.pointer = reg;
          self.check()?;
          for &value in data {
            self.regs[self.pointer as usize] = value;
            self.writes.push((self.pointer, value));
            self.pointer = self.pointer.wrapping_add(1);
          }
        }
        Operation::Read(buf) => {
          self.check()?;
          for byte in buf.iter_mut() {
            *byte = self.regs[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
          }
        }
      }
    }
    Ok(())
  }
}

/// Reset pin recording every level it is driven to.
#[derive(Default)]
pub(crate) struct FakePin {
  pub(crate) levels: Vec<bool>,
  pub(crate) broken: bool,
}

impl digital::ErrorType for FakePin {
  type Error = digital::ErrorKind;
}

impl OutputPin for FakePin {
  fn set_low(&mut self) -> Result<(), Self::Error> {
    if self.broken {
      return Err(digital::ErrorKind::Other);
    }
    self.levels.push(false);
    Ok(())
  }

  fn set_high(&mut self) -> Result<(), Self::Error> {
    if self.broken {
      return Err(digital::ErrorKind::Other);
    }
    self.levels.push(true);
    Ok(())
  }
}

/// Delay that returns immediately and remembers what was asked of it.
#[derive(Default)]
pub(crate) struct FakeDelay {
  pub(crate) millis: Vec<u32>,
}

impl DelayNs for FakeDelay {
  fn delay_ns(&mut self, _ns: u32) {}

  fn delay_ms(&mut self, ms: u32) {
    self.millis.push(ms);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn register_pointer_auto_increments() {
    let mut bus = FakeBus::new();
    bus.write(I2C_ADDR, &[0x03, 0x01, 0x02]).unwrap();
    let mut buf = [0u8; 2];
    bus.write_read(I2C_ADDR, &[0x03], &mut buf).unwrap();
    assert_eq!(buf, [0x01, 0x02]);
    assert_eq!(bus.writes, vec![(0x03, 0x01), (0x04, 0x02)]);
    assert_eq!(bus.transactions, 2);
  }

  #[test]
  fn wrong_address_is_not_acknowledged() {
    let mut bus = FakeBus::new();
    assert!(bus.write(0x38, &[0x00]).is_err());
  }
}
