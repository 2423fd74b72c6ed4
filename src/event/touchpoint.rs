/// Largest coordinate the 12-bit position registers can carry.
pub const MAX_COORDINATE: u16 = 0x0FFF;

/// Rebuild a 12-bit coordinate from its register pair.
///
/// Only the low nibble of the high register belongs to the position; the
/// upper bits carry event flags.
#[inline]
pub const fn decode_coordinate(high: u8, low: u8) -> u16 {
  ((high as u16 & 0x0F) << 8) | low as u16
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
  pub x: u16,
  pub y: u16,
}

impl Point {
  pub const fn new(x: u16, y: u16) -> Self {
    Self { x, y }
  }
}

impl core::fmt::Debug for Point {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchState {
  Pressed,
  Released,
}

impl TouchState {
  pub const fn is_pressed(self) -> bool {
    matches!(self, TouchState::Pressed)
  }
}

/// One reading from [`crate::Cst816s::sample_basic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
  pub state: TouchState,
  pub point: Point,
}

impl TouchSample {
  pub const fn pressed(point: Point) -> Self {
    Self { state: TouchState::Pressed, point }
  }
}
