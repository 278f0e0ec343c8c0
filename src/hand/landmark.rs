/// Named role of each point in the 21-point hand-tracking numbering.
///
/// The tracker emits points in this fixed order: the wrist, then four joints
/// per finger from the palm outward (thumb, index, middle, ring, pinky).
/// Every fingertip therefore sits at a multiple of four.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Landmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl Landmark {
    /// All 21 landmarks in tracker order.
    pub const fn all() -> [Landmark; crate::LANDMARK_COUNT] {
        [
            Landmark::Wrist,
            Landmark::ThumbCmc,
            Landmark::ThumbMcp,
            Landmark::ThumbIp,
            Landmark::ThumbTip,
            Landmark::IndexMcp,
            Landmark::IndexPip,
            Landmark::IndexDip,
            Landmark::IndexTip,
            Landmark::MiddleMcp,
            Landmark::MiddlePip,
            Landmark::MiddleDip,
            Landmark::MiddleTip,
            Landmark::RingMcp,
            Landmark::RingPip,
            Landmark::RingDip,
            Landmark::RingTip,
            Landmark::PinkyMcp,
            Landmark::PinkyPip,
            Landmark::PinkyDip,
            Landmark::PinkyTip,
        ]
    }
}

/// usize isomorphism
impl From<Landmark> for usize {
    fn from(landmark: Landmark) -> usize {
        landmark as usize
    }
}
impl TryFrom<usize> for Landmark {
    type Error = String;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(n)
            .copied()
            .ok_or_else(|| format!("invalid landmark index: {}", n))
    }
}
