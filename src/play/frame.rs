use crate::hand::LandmarkSet;
use crate::hand::Point;

/// Tracker output for one video frame: zero or more hands.
///
/// On the wire each frame is one JSON object per line:
/// `{"hands": [[{"x": 0.5, "y": 0.9}, ...], ...]}`. Hands are kept as
/// raw point lists until [`Frame::landmarks`] validates them.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub hands: Vec<Vec<Point>>,
}

impl Frame {
    /// Validated hands in tracker order. One malformed hand rejects the frame.
    pub fn landmarks(&self) -> anyhow::Result<Vec<LandmarkSet>> {
        self.hands
            .iter()
            .map(|hand| LandmarkSet::try_from(hand.as_slice()))
            .collect()
    }
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

impl From<&[LandmarkSet]> for Frame {
    fn from(hands: &[LandmarkSet]) -> Self {
        Self {
            hands: hands.iter().map(|hand| hand.points().to_vec()).collect(),
        }
    }
}

/// JSON line
impl TryFrom<&str> for Frame {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(s)?)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
