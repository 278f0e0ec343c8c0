/// How the opponent picks its move. Defaults to countering the player.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
pub enum OpponentPolicy {
    /// Uniform over rock, paper, scissors, blind to the player.
    Fair,
    /// Counter the player's gesture.
    #[default]
    AlwaysWin,
    /// Throw whatever the player's gesture beats.
    AlwaysLose,
}

impl OpponentPolicy {
    pub const fn all() -> [OpponentPolicy; 3] {
        [
            OpponentPolicy::Fair,
            OpponentPolicy::AlwaysWin,
            OpponentPolicy::AlwaysLose,
        ]
    }
    pub fn is_rigged(&self) -> bool {
        !matches!(self, OpponentPolicy::Fair)
    }
}

/// str isomorphism
impl TryFrom<&str> for OpponentPolicy {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "fair" | "random" => Ok(OpponentPolicy::Fair),
            "always-win" | "win" => Ok(OpponentPolicy::AlwaysWin),
            "always-lose" | "lose" => Ok(OpponentPolicy::AlwaysLose),
            _ => Err(format!("invalid policy str: {}", s)),
        }
    }
}

impl std::fmt::Display for OpponentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OpponentPolicy::Fair => write!(f, "fair"),
            OpponentPolicy::AlwaysWin => write!(f, "always-win"),
            OpponentPolicy::AlwaysLose => write!(f, "always-lose"),
        }
    }
}
