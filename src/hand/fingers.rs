use super::finger::Finger;
use super::landmarks::LandmarkSet;
use crate::Arbitrary;

/// Which fingers of one hand are extended, packed as a 5-bit set.
///
/// Bit `i` is set iff the finger with tip-order index `i` is extended,
/// so the thumb is the least significant bit. Only 32 values exist, which
/// keeps the gesture table exhaustively checkable.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FingerStates(u8);

impl FingerStates {
    const fn mask() -> u8 {
        0b11111
    }
    pub fn extended(&self, finger: Finger) -> bool {
        self.0 & (1 << u8::from(finger)) != 0
    }
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }
}

/// read each finger off the landmarks
impl From<&LandmarkSet> for FingerStates {
    fn from(hand: &LandmarkSet) -> Self {
        Finger::all()
            .into_iter()
            .filter(|finger| finger.extended(hand))
            .map(|finger| 1u8 << u8::from(finger))
            .fold(Self(0), |Self(bits), bit| Self(bits | bit))
    }
}

/// u8 isomorphism, truncated to five fingers
impl From<u8> for FingerStates {
    fn from(n: u8) -> Self {
        Self(n & Self::mask())
    }
}
impl From<FingerStates> for u8 {
    fn from(states: FingerStates) -> u8 {
        states.0
    }
}

/// [thumb, index, middle, ring, pinky]
impl From<[bool; crate::FINGER_COUNT]> for FingerStates {
    fn from(fingers: [bool; crate::FINGER_COUNT]) -> Self {
        fingers
            .into_iter()
            .enumerate()
            .filter(|(_, up)| *up)
            .fold(Self(0), |Self(bits), (i, _)| Self(bits | 1u8 << i))
    }
}
impl From<FingerStates> for [bool; crate::FINGER_COUNT] {
    fn from(states: FingerStates) -> Self {
        Finger::all().map(|finger| states.extended(finger))
    }
}

impl Arbitrary for FingerStates {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..=Self::mask()))
    }
}

/// thumb first: `T` extended, `F` curled
impl std::fmt::Display for FingerStates {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for finger in Finger::all() {
            match self.extended(finger) {
                true => write!(f, "T")?,
                false => write!(f, "F")?,
            }
        }
        Ok(())
    }
}
