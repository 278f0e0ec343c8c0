use super::finger::Finger;
use super::fingers::FingerStates;
use super::landmark::Landmark;
use super::point::Point;
use crate::Arbitrary;
use crate::LANDMARK_COUNT;

/// One detected hand: exactly 21 points in tracker order.
///
/// The fixed-size array makes a wrong point count unrepresentable once
/// constructed. Fallible construction from tracker output rejects anything
/// that is not exactly 21 points rather than guessing; a missing hand is
/// signalled upstream by simply not producing a set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkSet([Point; LANDMARK_COUNT]);

impl LandmarkSet {
    pub fn points(&self) -> &[Point; LANDMARK_COUNT] {
        &self.0
    }
    pub fn get(&self, landmark: Landmark) -> Point {
        self.0[usize::from(landmark)]
    }
}

impl std::ops::Index<Landmark> for LandmarkSet {
    type Output = Point;
    fn index(&self, landmark: Landmark) -> &Self::Output {
        &self.0[usize::from(landmark)]
    }
}

/// array isomorphism
impl From<[Point; LANDMARK_COUNT]> for LandmarkSet {
    fn from(points: [Point; LANDMARK_COUNT]) -> Self {
        Self(points)
    }
}
impl From<LandmarkSet> for [Point; LANDMARK_COUNT] {
    fn from(hand: LandmarkSet) -> Self {
        hand.0
    }
}

/// tracker output, which may be malformed
impl TryFrom<&[Point]> for LandmarkSet {
    type Error = anyhow::Error;
    fn try_from(points: &[Point]) -> Result<Self, Self::Error> {
        <[Point; LANDMARK_COUNT]>::try_from(points)
            .map(Self)
            .map_err(|_| {
                anyhow::anyhow!(
                    "expected {} landmarks per hand, got {}",
                    LANDMARK_COUNT,
                    points.len()
                )
            })
    }
}
impl TryFrom<Vec<Point>> for LandmarkSet {
    type Error = anyhow::Error;
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::try_from(points.as_slice())
    }
}

/// Synthesize an upright, palm-facing hand whose fingers sit in exactly
/// the given states. Curled fingertips drop below their PIP joint and a
/// curled thumb tip folds back across its IP joint.
impl From<FingerStates> for LandmarkSet {
    fn from(states: FingerStates) -> Self {
        let mut points = [Point::default(); LANDMARK_COUNT];
        points[usize::from(Landmark::Wrist)] = Point::new(0.50, 0.90);
        points[usize::from(Landmark::ThumbCmc)] = Point::new(0.40, 0.82);
        points[usize::from(Landmark::ThumbMcp)] = Point::new(0.34, 0.75);
        points[usize::from(Landmark::ThumbIp)] = Point::new(0.30, 0.68);
        points[usize::from(Landmark::ThumbTip)] = match states.extended(Finger::Thumb) {
            true => Point::new(0.24, 0.62),
            false => Point::new(0.38, 0.70),
        };
        for finger in Finger::all().into_iter().skip(1) {
            let x = 0.38 + 0.08 * u8::from(finger) as f32;
            let tip = usize::from(finger.tip());
            let (dip, top) = match states.extended(finger) {
                true => (0.42, 0.34),
                false => (0.56, 0.60),
            };
            points[tip - 3] = Point::new(x, 0.62);
            points[tip - 2] = Point::new(x, 0.50);
            points[tip - 1] = Point::new(x, dip);
            points[tip] = Point::new(x, top);
        }
        Self(points)
    }
}

impl Arbitrary for LandmarkSet {
    fn random() -> Self {
        Self::from(FingerStates::random())
    }
}
