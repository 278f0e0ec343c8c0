use super::gesture::Gesture;
use crate::hand::FingerStates;
use crate::hand::LandmarkSet;

/// Label one hand from its landmarks.
///
/// Pure and frame-independent: no history, no smoothing, so a borderline
/// frame may flip the label between consecutive frames.
pub fn classify(hand: &LandmarkSet) -> Gesture {
    Gesture::from(FingerStates::from(hand))
}

/// Label every detected hand of one frame, preserving input order.
pub fn classify_all(hands: &[LandmarkSet]) -> Vec<Gesture> {
    hands.iter().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::hand::Landmark;
    use crate::hand::Point;

    fn pose(fingers: [bool; 5]) -> LandmarkSet {
        LandmarkSet::from(FingerStates::from(fingers))
    }

    #[test]
    fn fist_is_rock() {
        assert!(classify(&pose([false; 5])) == Gesture::Rock);
    }

    #[test]
    fn open_hand_is_paper() {
        assert!(classify(&pose([true; 5])) == Gesture::Paper);
    }

    #[test]
    fn victory_sign_is_scissors() {
        assert!(classify(&pose([false, true, true, false, false])) == Gesture::Scissors);
    }

    #[test]
    fn thumbs_up_is_unknown() {
        assert!(classify(&pose([true, false, false, false, false])) == Gesture::Unknown);
    }

    #[test]
    fn scissors_with_thumb_is_unknown() {
        assert!(classify(&pose([true, true, true, false, false])) == Gesture::Unknown);
    }

    #[test]
    fn mirrored_thumb_misreads() {
        // same open hand, thumb tip pushed to the other side of its joint
        let mut points = <[Point; crate::LANDMARK_COUNT]>::from(pose([true; 5]));
        let ip = points[usize::from(Landmark::ThumbIp)];
        points[usize::from(Landmark::ThumbTip)] = Point::new(ip.x + 0.06, ip.y - 0.06);
        assert!(classify(&LandmarkSet::from(points)) == Gesture::Unknown);
    }

    #[test]
    fn deterministic() {
        for _ in 0..32 {
            let hand = LandmarkSet::random();
            let first = classify(&hand);
            assert!((0..8).all(|_| classify(&hand) == first));
        }
    }

    #[test]
    fn batch_preserves_order() {
        let hands = [
            pose([true; 5]),
            pose([false; 5]),
            pose([true, false, true, false, true]),
            pose([false, true, true, false, false]),
        ];
        assert!(
            classify_all(&hands)
                == vec![
                    Gesture::Paper,
                    Gesture::Rock,
                    Gesture::Unknown,
                    Gesture::Scissors
                ]
        );
        assert!(classify_all(&[]).is_empty());
    }
}
