use super::{decode_coordinate, Point, GESTURE_WINDOW};

/// Gesture code reported in [`crate::Reg::GestureId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
  None,
  SwipeUp,
  SwipeDown,
  SwipeLeft,
  SwipeRight,
  SingleClick,
  DoubleClick,
  LongPress,
  /// Code outside the documented set, kept verbatim.
  Unknown(u8),
}

impl Gesture {
  pub fn is_swipe(&self) -> bool {
    matches!(self, Gesture::SwipeUp | Gesture::SwipeDown | Gesture::SwipeLeft | Gesture::SwipeRight)
  }

  pub fn is_click(&self) -> bool {
    matches!(self, Gesture::SingleClick | Gesture::DoubleClick)
  }
}

impl From<u8> for Gesture {
  fn from(id: u8) -> Self {
    match id {
      0x00 => Self::None,
      0x01 => Self::SwipeUp,
      0x02 => Self::SwipeDown,
      0x03 => Self::SwipeLeft,
      0x04 => Self::SwipeRight,
      0x05 => Self::SingleClick,
      0x0B => Self::DoubleClick,
      0x0C => Self::LongPress,
      other => Self::Unknown(other),
    }
  }
}

impl From<Gesture> for u8 {
  fn from(g: Gesture) -> Self {
    match g {
      Gesture::None => 0x00,
      Gesture::SwipeUp => 0x01,
      Gesture::SwipeDown => 0x02,
      Gesture::SwipeLeft => 0x03,
      Gesture::SwipeRight => 0x04,
      Gesture::SingleClick => 0x05,
      Gesture::DoubleClick => 0x0B,
      Gesture::LongPress => 0x0C,
      Gesture::Unknown(id) => id,
    }
  }
}

/// Event flag carried in the top two bits of the x-position high register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventPhase {
  Down = 0,
  Up = 1,
  Contact = 2,
  Reserved = 3,
}

impl EventPhase {
  pub const fn from_bits(bits: u8) -> Self {
    match bits & 0b11 {
      0 => Self::Down,
      1 => Self::Up,
      2 => Self::Contact,
      _ => Self::Reserved,
    }
  }

  /// `true` for phases in which a finger is on the panel.
  pub const fn is_pressed(self) -> bool {
    matches!(self, EventPhase::Down | EventPhase::Contact)
  }
}

/// One reading from [`crate::Cst816s::sample_gesture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureRecord {
  pub gesture: Gesture,
  pub fingers: u8,
  pub phase: EventPhase,
  pub point: Point,
  pub pressed: bool,
}

impl GestureRecord {
  /// Decode the six registers starting at the gesture id.
  ///
  /// Frames with zero fingers decode to `None`; their coordinates are stale.
  pub fn decode(window: &[u8; GESTURE_WINDOW]) -> Option<Self> {
    let fingers = window[1];
    if fingers == 0 {
      return None;
    }

    let phase = EventPhase::from_bits(window[2] >> 6);
    Some(Self {
      gesture: Gesture::from(window[0]),
      fingers,
      phase,
      point: Point::new(decode_coordinate(window[2], window[3]), decode_coordinate(window[4], window[5])),
      pressed: phase.is_pressed(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn documented_gesture_codes() {
    let codes = [
      (0x00, Gesture::None),
      (0x01, Gesture::SwipeUp),
      (0x02, Gesture::SwipeDown),
      (0x03, Gesture::SwipeLeft),
      (0x04, Gesture::SwipeRight),
      (0x05, Gesture::SingleClick),
      (0x0B, Gesture::DoubleClick),
      (0x0C, Gesture::LongPress),
    ];
    for (code, gesture) in codes {
      assert_eq!(Gesture::from(code), gesture);
      assert_eq!(u8::from(gesture), code);
    }
    assert_eq!(Gesture::from(0x06), Gesture::Unknown(0x06));
    assert!(Gesture::SwipeLeft.is_swipe());
    assert!(Gesture::DoubleClick.is_click());
    assert!(!Gesture::LongPress.is_swipe());
  }

  #[test]
  fn zero_fingers_is_no_record_whatever_the_payload() {
    for filler in [0x00, 0x5A, 0xFF] {
      let window = [filler, 0, filler, filler, filler, filler];
      assert_eq!(GestureRecord::decode(&window), None);
    }
  }

  #[test]
  fn phase_and_pressed_flag() {
    let expected = [
      (0x00, EventPhase::Down, true),
      (0x40, EventPhase::Up, false),
      (0x80, EventPhase::Contact, true),
      (0xC0, EventPhase::Reserved, false),
    ];
    for (flags, phase, pressed) in expected {
      let record = GestureRecord::decode(&[0x00, 1, flags | 0x0A, 0xBC, 0x03, 0x21]).unwrap();
      assert_eq!(record.phase, phase);
      assert_eq!(record.pressed, pressed);
      assert_eq!(record.point, Point::new(0xABC, 0x321));
    }
  }

  #[test]
  fn gesture_and_finger_count_are_passed_through() {
    let record = GestureRecord::decode(&[0x0C, 2, 0x00, 0x10, 0x00, 0x20]).unwrap();
    assert_eq!(record.gesture, Gesture::LongPress);
    assert_eq!(record.fingers, 2);
  }
}
