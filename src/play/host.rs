use super::args::Args;
use super::feed::Feed;
use super::frame::Frame;
use super::scene::Scene;
use super::scoreboard::Scoreboard;
use crate::gesture::Gesture;
use crate::gesture::classify_all;
use crate::judge::OpponentPolicy;
use crate::judge::Round;
use dialoguer::Select;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::BufRead;

/// Drives the game one frame at a time and owns everything that outlives
/// a single round: the opponent's random source and the score.
pub struct Host {
    policy: OpponentPolicy,
    rng: SmallRng,
    scoreboard: Scoreboard,
}

impl Host {
    pub fn new(policy: OpponentPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self {
            policy,
            rng,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn run(args: Args) -> anyhow::Result<()> {
        log::info!("opponent policy: {}", args.policy);
        let mut host = Self::new(args.policy, args.seed);
        match (args.manual, args.input) {
            (true, _) => host.manual(),
            (false, Some(ref path)) => host.replay(Feed::open(path)?),
            (false, None) => host.replay(Feed::from(std::io::stdin().lock())),
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Classify every hand in the frame and play the primary one.
    pub fn step(&mut self, frame: &Frame) -> anyhow::Result<Option<Round>> {
        let hands = frame.landmarks()?;
        let gestures = classify_all(&hands);
        log::debug!("classified {} hands: {:?}", gestures.len(), gestures);
        let round = Round::primary(&gestures, self.policy, &mut self.rng);
        if let Some(round) = round {
            log::info!("{}", round);
            self.scoreboard.add(round.outcome);
        }
        Ok(round)
    }

    /// Render every frame of the feed. Malformed frames are skipped with a
    /// warning; read errors end the session.
    pub fn replay<B>(&mut self, mut feed: Feed<B>) -> anyhow::Result<()>
    where
        B: BufRead,
    {
        while let Some(line) = feed.next() {
            let line = line?;
            match Frame::try_from(line.as_str()).and_then(|frame| self.step(&frame)) {
                Ok(round) => println!("{}\n", Scene::from(round)),
                Err(e) => log::warn!("skipping frame {}: {}", feed.frames(), e),
            }
        }
        log::info!("feed exhausted after {} frames", feed.frames());
        println!("{}", self.scoreboard);
        Ok(())
    }

    /// Menu-driven rounds for when no tracker is attached.
    pub fn manual(&mut self) -> anyhow::Result<()> {
        let choices = ["Rock", "Paper", "Scissors", "Quit"];
        loop {
            let selection = Select::new()
                .with_prompt("\nYOUR MOVE")
                .report(false)
                .items(choices.as_slice())
                .default(0)
                .interact()?;
            let player = match Gesture::try_from(choices[selection]) {
                Ok(gesture) => gesture,
                Err(_) => break,
            };
            let round = Round::new(player, self.policy, &mut self.rng);
            log::info!("{}", round);
            self.scoreboard.add(round.outcome);
            println!("{}", Scene::from(Some(round)));
        }
        println!("{}", self.scoreboard);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::FingerStates;
    use crate::hand::LandmarkSet;
    use crate::hand::Point;
    use crate::judge::Outcome;

    fn frame(hands: &[[bool; 5]]) -> Frame {
        let hands = hands
            .iter()
            .map(|fingers| LandmarkSet::from(FingerStates::from(*fingers)))
            .collect::<Vec<LandmarkSet>>();
        Frame::from(hands.as_slice())
    }

    #[test]
    fn counters_primary_hand() {
        let mut host = Host::new(OpponentPolicy::AlwaysWin, Some(0));
        let round = host.step(&frame(&[[false; 5], [true; 5]])).unwrap().unwrap();
        assert!(round.player == Gesture::Rock);
        assert!(round.opponent == Gesture::Paper);
        assert!(round.outcome == Outcome::Lose);
        assert!(host.scoreboard().count(Outcome::Lose) == 1);
    }

    #[test]
    fn empty_frame_plays_nothing() {
        let mut host = Host::new(OpponentPolicy::Fair, Some(0));
        assert!(host.step(&Frame::default()).unwrap().is_none());
        assert!(host.scoreboard().rounds() == 0);
    }

    #[test]
    fn unknown_hand_plays_nothing() {
        let mut host = Host::new(OpponentPolicy::AlwaysLose, Some(0));
        let round = host.step(&frame(&[[true, false, false, false, false]])).unwrap();
        assert!(round.is_none());
        assert!(host.scoreboard().rounds() == 0);
    }

    #[test]
    fn malformed_frame_is_error() {
        let mut host = Host::new(OpponentPolicy::AlwaysWin, Some(0));
        let frame = Frame {
            hands: vec![vec![Point::default(); 7]],
        };
        assert!(host.step(&frame).is_err());
        assert!(host.scoreboard().rounds() == 0);
    }

    #[test]
    fn seeded_fair_sessions_agree() {
        let play = || {
            let mut host = Host::new(OpponentPolicy::Fair, Some(5));
            (0..32)
                .map(|_| host.step(&frame(&[[true; 5]])).unwrap().unwrap().opponent)
                .collect::<Vec<Gesture>>()
        };
        assert!(play() == play());
    }

    #[test]
    fn replay_skips_bad_frames() {
        let lines = [
            frame(&[[false, true, true, false, false]]).to_string(),
            String::from("not json"),
            String::new(),
            frame(&[[true; 5]]).to_string(),
            Frame::default().to_string(),
        ]
        .join("\n");
        let mut host = Host::new(OpponentPolicy::AlwaysLose, Some(0));
        host.replay(Feed::from(std::io::Cursor::new(lines))).unwrap();
        assert!(host.scoreboard().rounds() == 2);
        assert!(host.scoreboard().count(Outcome::Win) == 2);
    }
}
