//! Roshambo Binary
//!
//! Replays hand-tracker landmark frames (JSON lines) against a computer
//! opponent, or runs menu-driven rounds with --manual.
//!
//! Options: --policy, --seed, --input, --manual

use clap::Parser;
use roshambo::play::*;

fn main() -> anyhow::Result<()> {
    roshambo::log()?;
    Host::run(Args::parse())
}
