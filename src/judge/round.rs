use super::judge::judge;
use super::judge::opponent_move;
use super::outcome::Outcome;
use super::policy::OpponentPolicy;
use crate::gesture::Gesture;
use rand::Rng;

/// One judged round: both moves and the player's result.
///
/// Rounds are independent. Nothing carries over from one frame to the
/// next; score keeping belongs to whoever collects the rounds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Round {
    pub player: Gesture,
    pub opponent: Gesture,
    pub outcome: Outcome,
}

impl Round {
    pub fn new<R>(player: Gesture, policy: OpponentPolicy, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let opponent = opponent_move(player, policy, rng);
        Self {
            player,
            opponent,
            outcome: judge(player, opponent),
        }
    }
    /// Play the primary (first) hand of a frame.
    ///
    /// None when the frame has no hand or the primary hand is unrecognized;
    /// the opponent does not move against an unreadable hand.
    pub fn primary<R>(hands: &[Gesture], policy: OpponentPolicy, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        hands
            .first()
            .copied()
            .filter(Gesture::is_valid)
            .map(|player| Self::new(player, policy, rng))
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "player: {}, opponent: {}, result: {}",
            self.player, self.opponent, self.outcome
        )
    }
}
