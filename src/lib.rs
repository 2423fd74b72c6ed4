#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking, `no_std` driver for the Hynitron CST816S capacitive touch and
//! gesture controller.
//!
//! The CST816S reports a single contact, a small set of hardware-recognised
//! gestures and exposes a handful of power-management knobs through a flat
//! byte-wide register map. This crate wraps that map with:
//!
//! - A register transport that turns bus faults into "no data" instead of
//!   errors, so a flaky bus costs a sample rather than the driver
//! - Reset, identity check, soft reset and the wake-up write burst
//! - An operating-mode state machine (default, fast, hardware) that always
//!   pairs the interrupt-control write with the matching motion-mask write
//! - Basic and gesture sampling behind a suspend/resume gate
//! - A [`Pointer`] adapter applying calibration and display rotation
//!
//! ```no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, SevenBitAddress};
//! use cst816s::{Config, Cst816s, NoResetPin};
//!
//! fn example<I2C, D>(i2c: I2C, delay: D) -> Result<(), cst816s::Error<core::convert::Infallible>>
//! where
//!   I2C: I2c<SevenBitAddress>,
//!   D: DelayNs,
//! {
//!   let mut touch = Cst816s::new(i2c, None::<NoResetPin>, delay, Config::default());
//!   touch.initialize()?;
//!
//!   if let Some(sample) = touch.sample_basic() {
//!     let _ = (sample.point.x, sample.point.y);
//!   }
//!   Ok(())
//! }
//! ```
//!
//! # Concurrency
//!
//! Every operation blocks for the duration of its bus transaction and any
//! reset/wake delays. The receive buffers live inside the handle and are
//! reused across calls, so all calls on one handle must be serialised; the
//! `&mut self` receivers enforce that within safe code.
mod config;
mod control;
mod event;
#[cfg(test)]
mod fake;
mod init;
mod mode;
mod pointer;
mod reg;
mod rw;
mod status;

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::i2c::{I2c, SevenBitAddress};

pub use config::Config;
pub use control::{IrqControl, MotionMask};
pub use event::{
  decode_coordinate, EventPhase, Gesture, GestureRecord, Point, TouchSample, TouchState, MAX_COORDINATE,
};
pub use init::Identity;
pub use mode::{ModeState, OperatingMode};
pub use pointer::{Calibration, Pointer, PointerConfig, PointerEvent, Rotation, TouchSource};
pub use reg::{Reg, CHIP_ID};
pub use status::ChipStatus;

/// Capacity of the multi-register receive buffer.
pub const MULTI_READ_CAPACITY: usize = 8;

/// Errors that can occur while bringing up the controller.
///
/// Bus faults are deliberately absent: the register transport absorbs them
/// and reports "no data" instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<P> {
  /// The reset line could not be driven.
  ResetPin(P),
  /// The device reported an unexpected chip identifier during bring-up.
  InvalidChipId(u8),
}

impl<P: core::fmt::Debug> core::fmt::Display for Error<P> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Error::ResetPin(e) => write!(f, "reset pin error: {e:?}"),
      Error::InvalidChipId(id) => write!(f, "incorrect chip id: got {id:#04x}, expected {CHIP_ID:#04x}"),
    }
  }
}

/// Placeholder reset pin for boards that do not wire the CST816S reset line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResetPin;

impl ErrorType for NoResetPin {
  type Error = Infallible;
}

impl OutputPin for NoResetPin {
  fn set_low(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  fn set_high(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }
}

/// Driver handle for one CST816S.
///
/// Owns the I²C peripheral, the optional reset pin and a delay provider.
/// Create an instance with [`Cst816s::new`] and call
/// [`Cst816s::initialize`] before sampling.
pub struct Cst816s<I, RST, D> {
  i2c: I,
  reset: Option<RST>,
  delay: D,
  config: Config,
  rx_buf: [u8; 1],
  multi_buf: [u8; MULTI_READ_CAPACITY],
  suspended: bool,
  mode: ModeState,
}

impl<I, RST, D, P> Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  /// Create a new driver instance.
  ///
  /// Nothing is read or written before [`Cst816s::initialize`] is called.
  pub fn new(i2c: I, reset: Option<RST>, delay: D, config: Config) -> Self {
    Self {
      i2c,
      reset,
      delay,
      config,
      rx_buf: [0; 1],
      multi_buf: [0; MULTI_READ_CAPACITY],
      suspended: false,
      mode: ModeState::new(),
    }
  }

  /// The configuration this handle was created with.
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Toggle diagnostic logging at runtime.
  pub fn set_debug(&mut self, debug: bool) {
    self.config.debug = debug;
  }

  /// Destroy the driver and hand back the owned peripherals.
  pub fn release(self) -> (I, Option<RST>, D) {
    (self.i2c, self.reset, self.delay)
  }
}
