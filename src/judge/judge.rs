use super::outcome::Outcome;
use super::policy::OpponentPolicy;
use crate::gesture::Gesture;
use rand::Rng;

/// Opponent move when the player's hand was not recognized under
/// [`OpponentPolicy::AlwaysWin`].
pub const FALLBACK_WIN: Gesture = Gesture::Rock;
/// Opponent move when the player's hand was not recognized under
/// [`OpponentPolicy::AlwaysLose`].
pub const FALLBACK_LOSE: Gesture = Gesture::Scissors;

/// Judge one round from the player's side.
///
/// Pure: identical gestures always give the identical outcome.
/// Any Unknown on either side makes the round Invalid.
pub fn judge(player: Gesture, opponent: Gesture) -> Outcome {
    match (player, opponent) {
        (Gesture::Unknown, _) | (_, Gesture::Unknown) => Outcome::Invalid,
        (p, o) if p == o => Outcome::Draw,
        (p, o) if p.beats(&o) => Outcome::Win,
        _ => Outcome::Lose,
    }
}

/// Pick the opponent's gesture under `policy`.
///
/// Rigged policies are deterministic and fall back to [`FALLBACK_WIN`] or
/// [`FALLBACK_LOSE`] for an Unknown player. Only `Fair` touches `rng`, and
/// it ignores the player entirely.
pub fn opponent_move<R>(player: Gesture, policy: OpponentPolicy, rng: &mut R) -> Gesture
where
    R: Rng + ?Sized,
{
    match policy {
        OpponentPolicy::Fair => Gesture::sample(rng),
        OpponentPolicy::AlwaysWin => player.winner().unwrap_or(FALLBACK_WIN),
        OpponentPolicy::AlwaysLose => player.loser().unwrap_or(FALLBACK_LOSE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn standard_cycle() {
        assert!(judge(Gesture::Rock, Gesture::Scissors) == Outcome::Win);
        assert!(judge(Gesture::Scissors, Gesture::Paper) == Outcome::Win);
        assert!(judge(Gesture::Paper, Gesture::Rock) == Outcome::Win);
        assert!(judge(Gesture::Paper, Gesture::Scissors) == Outcome::Lose);
        assert!(judge(Gesture::Scissors, Gesture::Rock) == Outcome::Lose);
        assert!(judge(Gesture::Rock, Gesture::Paper) == Outcome::Lose);
        assert!(judge(Gesture::Rock, Gesture::Rock) == Outcome::Draw);
        assert!(judge(Gesture::Paper, Gesture::Paper) == Outcome::Draw);
        assert!(judge(Gesture::Scissors, Gesture::Scissors) == Outcome::Draw);
    }

    #[test]
    fn antisymmetric() {
        for p in Gesture::all() {
            for o in Gesture::all() {
                assert!(judge(p, o) == judge(o, p).flip());
                assert!(judge(p, o) != Outcome::Invalid);
            }
        }
    }

    #[test]
    fn unknown_invalidates() {
        for g in Gesture::all() {
            assert!(judge(g, Gesture::Unknown) == Outcome::Invalid);
            assert!(judge(Gesture::Unknown, g) == Outcome::Invalid);
        }
        assert!(judge(Gesture::Unknown, Gesture::Unknown) == Outcome::Invalid);
    }

    #[test]
    fn always_win_wins() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for g in Gesture::all() {
            let o = opponent_move(g, OpponentPolicy::AlwaysWin, rng);
            assert!(judge(g, o) == Outcome::Lose);
            assert!(judge(o, g) == Outcome::Win);
        }
    }

    #[test]
    fn always_lose_loses() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for g in Gesture::all() {
            let o = opponent_move(g, OpponentPolicy::AlwaysLose, rng);
            assert!(judge(g, o) == Outcome::Win);
            assert!(judge(o, g) == Outcome::Lose);
        }
    }

    #[test]
    fn rigged_mappings() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let win = OpponentPolicy::AlwaysWin;
        let lose = OpponentPolicy::AlwaysLose;
        assert!(opponent_move(Gesture::Rock, win, rng) == Gesture::Paper);
        assert!(opponent_move(Gesture::Scissors, win, rng) == Gesture::Rock);
        assert!(opponent_move(Gesture::Paper, win, rng) == Gesture::Scissors);
        assert!(opponent_move(Gesture::Rock, lose, rng) == Gesture::Scissors);
        assert!(opponent_move(Gesture::Scissors, lose, rng) == Gesture::Paper);
        assert!(opponent_move(Gesture::Paper, lose, rng) == Gesture::Rock);
    }

    #[test]
    fn unknown_fallbacks() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!(opponent_move(Gesture::Unknown, OpponentPolicy::AlwaysWin, rng) == Gesture::Rock);
        assert!(opponent_move(Gesture::Unknown, OpponentPolicy::AlwaysLose, rng) == Gesture::Scissors);
    }

    #[test]
    fn fair_is_reproducible() {
        let draw = |seed| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            (0..64)
                .map(|_| opponent_move(Gesture::Rock, OpponentPolicy::Fair, rng))
                .collect::<Vec<Gesture>>()
        };
        assert!(draw(7) == draw(7));
    }

    #[test]
    fn fair_is_uniform() {
        const N: usize = 30_000;
        let ref mut rng = SmallRng::seed_from_u64(42);
        let mut counts = [0usize; 3];
        for i in 0..N {
            let player = Gesture::all()[i % 3];
            match opponent_move(player, OpponentPolicy::Fair, rng) {
                Gesture::Rock => counts[0] += 1,
                Gesture::Paper => counts[1] += 1,
                Gesture::Scissors => counts[2] += 1,
                Gesture::Unknown => panic!("fair opponent threw unknown"),
            }
        }
        for count in counts {
            let freq = count as crate::Frequency / N as crate::Frequency;
            assert!((freq - 1. / 3.).abs() < 0.02, "{:?}", counts);
        }
    }

    #[test]
    fn fair_ignores_unknown_player() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..64 {
            assert!(opponent_move(Gesture::Unknown, OpponentPolicy::Fair, rng).is_valid());
        }
    }
}
