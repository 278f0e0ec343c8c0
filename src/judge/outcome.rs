/// Result of one round, always from the player's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
    /// At least one side showed an unrecognized hand.
    Invalid,
}

impl Outcome {
    pub const fn all() -> [Outcome; 4] {
        [Outcome::Win, Outcome::Lose, Outcome::Draw, Outcome::Invalid]
    }
    /// The same round seen from the other side.
    pub fn flip(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            other => *other,
        }
    }
    pub fn is_decisive(&self) -> bool {
        matches!(self, Outcome::Win | Outcome::Lose)
    }
}

/// str isomorphism
impl TryFrom<&str> for Outcome {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "win" => Ok(Outcome::Win),
            "lose" => Ok(Outcome::Lose),
            "draw" => Ok(Outcome::Draw),
            "invalid" => Ok(Outcome::Invalid),
            _ => Err(format!("invalid outcome str: {}", s)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Invalid => write!(f, "invalid"),
        }
    }
}
