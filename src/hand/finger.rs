use super::landmark::Landmark;
use super::landmarks::LandmarkSet;

/// Finger of one hand, in fingertip order.
///
/// The thumb is tested along the horizontal axis and every other finger
/// along the vertical axis. The thumb rule assumes one canonical hand
/// orientation: it does not tell left from right hands, so a mirrored
/// hand reads its thumb backwards. Known limitation, carried as is.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    pub const fn all() -> [Finger; crate::FINGER_COUNT] {
        [
            Finger::Thumb,
            Finger::Index,
            Finger::Middle,
            Finger::Ring,
            Finger::Pinky,
        ]
    }
    pub const fn tip(&self) -> Landmark {
        match self {
            Finger::Thumb => Landmark::ThumbTip,
            Finger::Index => Landmark::IndexTip,
            Finger::Middle => Landmark::MiddleTip,
            Finger::Ring => Landmark::RingTip,
            Finger::Pinky => Landmark::PinkyTip,
        }
    }
    /// The joint the tip is compared against. One below the tip for the
    /// thumb, two below (the PIP joint) for the others.
    pub const fn reference(&self) -> Landmark {
        match self {
            Finger::Thumb => Landmark::ThumbIp,
            Finger::Index => Landmark::IndexPip,
            Finger::Middle => Landmark::MiddlePip,
            Finger::Ring => Landmark::RingPip,
            Finger::Pinky => Landmark::PinkyPip,
        }
    }
    /// Strict comparison, no tolerance. A tip level with its joint is curled.
    pub fn extended(&self, hand: &LandmarkSet) -> bool {
        let tip = hand[self.tip()];
        let joint = hand[self.reference()];
        match self {
            Finger::Thumb => tip.left_of(&joint),
            _ => tip.above(&joint),
        }
    }
}

/// u8 isomorphism
impl From<u8> for Finger {
    fn from(n: u8) -> Finger {
        match n {
            0 => Finger::Thumb,
            1 => Finger::Index,
            2 => Finger::Middle,
            3 => Finger::Ring,
            4 => Finger::Pinky,
            _ => unreachable!("invalid finger"),
        }
    }
}
impl From<Finger> for u8 {
    fn from(f: Finger) -> u8 {
        f as u8
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Finger::Thumb => write!(f, "thumb"),
            Finger::Index => write!(f, "index"),
            Finger::Middle => write!(f, "middle"),
            Finger::Ring => write!(f, "ring"),
            Finger::Pinky => write!(f, "pinky"),
        }
    }
}
