use crate::judge::Outcome;

/// Running tally of judged rounds, kept by the host across frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    wins: usize,
    losses: usize,
    draws: usize,
    invalid: usize,
}

impl Scoreboard {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Invalid => self.invalid += 1,
        }
    }
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Lose => self.losses,
            Outcome::Draw => self.draws,
            Outcome::Invalid => self.invalid,
        }
    }
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.draws + self.invalid
    }
    /// Player wins over decisive rounds. Zero before any decisive round.
    pub fn win_rate(&self) -> crate::Frequency {
        match self.wins + self.losses {
            0 => 0.,
            n => self.wins as crate::Frequency / n as crate::Frequency,
        }
    }
}

impl Extend<Outcome> for Scoreboard {
    fn extend<T: IntoIterator<Item = Outcome>>(&mut self, outcomes: T) {
        outcomes.into_iter().for_each(|outcome| self.add(outcome));
    }
}

impl FromIterator<Outcome> for Scoreboard {
    fn from_iter<T: IntoIterator<Item = Outcome>>(outcomes: T) -> Self {
        let mut board = Self::default();
        board.extend(outcomes);
        board
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rounds: {}  Win rate: {:.2}", self.rounds(), self.win_rate())?;
        writeln!(f, "┌─────────┬────────┐")?;
        writeln!(f, "│ Outcome │  Count │")?;
        writeln!(f, "├─────────┼────────┤")?;
        for outcome in Outcome::all() {
            writeln!(f, "│ {:>7} │ {:>6} │", outcome.to_string(), self.count(outcome))?;
        }
        write!(f, "└─────────┴────────┘")
    }
}
