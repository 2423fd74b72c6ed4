//! Pointer adapter turning raw samples into display-space press/release
//! events.
//!
//! The adapter only needs something that can produce a [`TouchSample`]; the
//! driver handle provides that through [`TouchSource`]. Bring the handle up
//! first, then move it into a [`Pointer`]:
//!
//! ```no_run
//! # use embedded_hal::{delay::DelayNs, i2c::{I2c, SevenBitAddress}};
//! # use cst816s::{Config, Cst816s, NoResetPin, Pointer, PointerConfig, Rotation};
//! # fn example<I2C: I2c<SevenBitAddress>, D: DelayNs>(i2c: I2C, delay: D) -> Result<(), cst816s::Error<core::convert::Infallible>> {
//! let mut touch = Cst816s::new(i2c, None::<NoResetPin>, delay, Config::default());
//! touch.initialize()?;
//!
//! let mut pointer = Pointer::new(touch, PointerConfig::new(240, 280).with_rotation(Rotation::Deg90));
//! let event = pointer.poll();
//! if event.state.is_pressed() {
//!   let _ = (event.point.x, event.point.y);
//! }
//! # Ok(())
//! # }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Cst816s, Point, TouchSample, TouchState};

/// Capability consumed by [`Pointer`]: produce the current contact, if any.
pub trait TouchSource {
  fn read_touch(&mut self) -> Option<TouchSample>;
}

impl<I, RST, D, P> TouchSource for Cst816s<I, RST, D>
where
  I: I2c<SevenBitAddress>,
  RST: OutputPin<Error = P>,
  D: DelayNs,
{
  fn read_touch(&mut self) -> Option<TouchSample> {
    self.sample_basic()
  }
}

/// Display rotation, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
  #[default]
  Deg0,
  Deg90,
  Deg180,
  Deg270,
}

/// Affine correction from panel to display coordinates.
///
/// `x' = alpha_x * x + beta_x * y + delta_x`, and likewise for `y'`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
  pub alpha_x: f32,
  pub beta_x: f32,
  pub delta_x: f32,
  pub alpha_y: f32,
  pub beta_y: f32,
  pub delta_y: f32,
}

impl Calibration {
  pub const IDENTITY: Self =
    Self { alpha_x: 1.0, beta_x: 0.0, delta_x: 0.0, alpha_y: 0.0, beta_y: 1.0, delta_y: 0.0 };

  fn apply(&self, point: Point) -> (i32, i32) {
    let (x, y) = (point.x as f32, point.y as f32);
    let cx = self.alpha_x * x + self.beta_x * y + self.delta_x;
    let cy = self.alpha_y * x + self.beta_y * y + self.delta_y;
    (cx as i32, cy as i32)
  }
}

impl Default for Calibration {
  fn default() -> Self {
    Self::IDENTITY
  }
}

/// Settings for [`Pointer`]. `width` and `height` are the panel's native,
/// unrotated dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerConfig {
  pub width: u16,
  pub height: u16,
  pub rotation: Rotation,
  pub calibration: Option<Calibration>,
  pub debug: bool,
}

impl PointerConfig {
  pub const fn new(width: u16, height: u16) -> Self {
    Self { width, height, rotation: Rotation::Deg0, calibration: None, debug: false }
  }

  pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
    self.rotation = rotation;
    self
  }

  pub const fn with_calibration(mut self, calibration: Calibration) -> Self {
    self.calibration = Some(calibration);
    self
  }

  pub const fn with_debug(mut self, debug: bool) -> Self {
    self.debug = debug;
    self
  }
}

/// State of the pointer after one poll, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerEvent {
  pub state: TouchState,
  pub point: Point,
}

pub struct Pointer<S> {
  source: S,
  config: PointerConfig,
  last: Point,
  pressed: bool,
}

impl<S: TouchSource> Pointer<S> {
  pub fn new(source: S, config: PointerConfig) -> Self {
    Self { source, config, last: Point::default(), pressed: false }
  }

  /// Sample the source once.
  ///
  /// A missing sample, whatever the reason, reads as a release at the last
  /// known position.
  pub fn poll(&mut self) -> PointerEvent {
    match self.source.read_touch() {
      Some(sample) if sample.state.is_pressed() => {
        let point = self.transform(sample.point);
        if self.config.debug && !self.pressed {
          log::debug!("Pointer pressed at {:?}", point);
        }
        self.last = point;
        self.pressed = true;
        PointerEvent { state: TouchState::Pressed, point }
      }
      _ => {
        if self.config.debug && self.pressed {
          log::debug!("Pointer released at {:?}", self.last);
        }
        self.pressed = false;
        PointerEvent { state: TouchState::Released, point: self.last }
      }
    }
  }

  pub fn rotation(&self) -> Rotation {
    self.config.rotation
  }

  pub fn set_rotation(&mut self, rotation: Rotation) {
    self.config.rotation = rotation;
  }

  pub fn source(&self) -> &S {
    &self.source
  }

  /// Direct access to the source, e.g. to suspend sampling or switch modes.
  pub fn source_mut(&mut self) -> &mut S {
    &mut self.source
  }

  pub fn release(self) -> S {
    self.source
  }

  fn transform(&self, raw: Point) -> Point {
    let (x, y) = match self.config.calibration {
      Some(cal) => cal.apply(raw),
      None => (raw.x as i32, raw.y as i32),
    };

    let max_x = self.config.width.saturating_sub(1);
    let max_y = self.config.height.saturating_sub(1);
    let x = x.clamp(0, max_x as i32) as u16;
    let y = y.clamp(0, max_y as i32) as u16;

    match self.config.rotation {
      Rotation::Deg0 => Point::new(x, y),
      Rotation::Deg90 => Point::new(max_y - y, x),
      Rotation::Deg180 => Point::new(max_x - x, max_y - y),
      Rotation::Deg270 => Point::new(y, max_x - x),
    }
  }
}
