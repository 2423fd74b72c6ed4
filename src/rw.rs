use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{Error as _, I2c, SevenBitAddress};

use crate::reg::I2C_ADDR;
use crate::{Cst816s, Reg, MULTI_READ_CAPACITY};

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Read a single register.
  ///
  /// The register address is written without releasing the bus and the value
  /// is clocked back with a repeated start. Returns `None` if either half of
  /// the transaction fails; the fault itself is only logged, and only in
  /// debug mode. There is exactly one attempt per call.
  pub fn read_register(&mut self, reg: Reg) -> Option<u8> {
    match self.i2c.write_read(I2C_ADDR, &[reg.into()], &mut self.rx_buf) {
      Ok(()) => Some(self.rx_buf[0]),
      Err(err) => {
        if self.config.debug {
          log::warn!("I2C read error at reg {:#04x}: {:?}", u8::from(reg), err.kind());
        }
        None
      }
    }
  }

  /// Write a single register as a `[reg, value]` frame.
  ///
  /// Returns `false` on a bus fault.
  pub fn write_register(&mut self, reg: Reg, value: u8) -> bool {
    match self.i2c.write(I2C_ADDR, &[reg.into(), value]) {
      Ok(()) => true,
      Err(err) => {
        if self.config.debug {
          log::warn!("I2C write error at reg {:#04x}: {:?}", u8::from(reg), err.kind());
        }
        false
      }
    }
  }

  /// Read `count` consecutive registers starting at `start`.
  ///
  /// `count` is clamped to [`MULTI_READ_CAPACITY`]. The returned slice
  /// borrows the handle's receive buffer and is overwritten by the next call.
  pub fn read_registers(&mut self, start: Reg, count: usize) -> Option<&[u8]> {
    let count = count.min(MULTI_READ_CAPACITY);
    match self.i2c.write_read(I2C_ADDR, &[start.into()], &mut self.multi_buf[..count]) {
      Ok(()) => Some(&self.multi_buf[..count]),
      Err(err) => {
        if self.config.debug {
          log::warn!("I2C multi-read error at reg {:#04x}: {:?}", u8::from(start), err.kind());
        }
        None
      }
    }
  }
}
