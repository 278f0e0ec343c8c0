use crate::gesture::Gesture;
use crate::judge::Outcome;
use crate::judge::Round;
use colored::*;

/// What the player sees after one frame.
///
/// `None` is the "nothing recognized" screen: both moves read Unknown and
/// there is no result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene(pub Option<Round>);

impl Scene {
    fn title(gesture: Gesture) -> &'static str {
        match gesture {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
            Gesture::Unknown => "Unknown",
        }
    }
    fn verdict(outcome: Outcome) -> ColoredString {
        match outcome {
            Outcome::Win => "Player Wins!".green().bold(),
            Outcome::Lose => "Computer Wins!".red().bold(),
            Outcome::Draw => "It's a Draw!".blue().bold(),
            Outcome::Invalid => "Invalid Move!".normal().bold(),
        }
    }
}

impl From<Option<Round>> for Scene {
    fn from(round: Option<Round>) -> Self {
        Self(round)
    }
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            None => {
                writeln!(f, "Player's move: {}", Self::title(Gesture::Unknown))?;
                write!(f, "Computer's move: {}", Self::title(Gesture::Unknown))
            }
            Some(round) => {
                writeln!(f, "Player's move: {}", Self::title(round.player))?;
                writeln!(f, "Computer's move: {}", Self::title(round.opponent))?;
                write!(f, "{}", Self::verdict(round.outcome))
            }
        }
    }
}
