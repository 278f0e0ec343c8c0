use crate::Arbitrary;
use crate::hand::FingerStates;
use rand::Rng;

/// Hand shape read from one frame.
///
/// Standard cycle: Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
/// `Unknown` is a legitimate label for any finger pattern outside the
/// three recognized shapes; it beats nothing and loses to nothing.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    #[default]
    Unknown,
}

impl Gesture {
    /// The three playable gestures.
    pub const fn all() -> [Gesture; 3] {
        [Gesture::Rock, Gesture::Paper, Gesture::Scissors]
    }
    pub fn is_valid(&self) -> bool {
        !matches!(self, Gesture::Unknown)
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.loser().is_some_and(|loser| loser == *other)
    }
    /// The unique gesture that beats this one.
    pub fn winner(&self) -> Option<Self> {
        match self {
            Gesture::Rock => Some(Gesture::Paper),
            Gesture::Paper => Some(Gesture::Scissors),
            Gesture::Scissors => Some(Gesture::Rock),
            Gesture::Unknown => None,
        }
    }
    /// The unique gesture that loses to this one.
    pub fn loser(&self) -> Option<Self> {
        match self {
            Gesture::Rock => Some(Gesture::Scissors),
            Gesture::Paper => Some(Gesture::Rock),
            Gesture::Scissors => Some(Gesture::Paper),
            Gesture::Unknown => None,
        }
    }
    /// Uniform draw over the three playable gestures.
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::all()[rng.random_range(0..Self::all().len())]
    }
}

/// Exact match against the finger pattern, no tolerance.
/// Everything outside the three shapes is Unknown.
impl From<FingerStates> for Gesture {
    fn from(states: FingerStates) -> Self {
        match u8::from(states) {
            0b00000 => Gesture::Rock,
            0b11111 => Gesture::Paper,
            0b00110 => Gesture::Scissors,
            _ => Gesture::Unknown,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Gesture {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Gesture::Rock),
            "paper" | "p" => Ok(Gesture::Paper),
            "scissors" | "s" => Ok(Gesture::Scissors),
            "unknown" => Ok(Gesture::Unknown),
            _ => Err(format!("invalid gesture str: {}", s)),
        }
    }
}

impl Arbitrary for Gesture {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Gesture::Rock => write!(f, "rock"),
            Gesture::Paper => write!(f, "paper"),
            Gesture::Scissors => write!(f, "scissors"),
            Gesture::Unknown => write!(f, "unknown"),
        }
    }
}
