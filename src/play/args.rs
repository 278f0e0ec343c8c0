use crate::judge::OpponentPolicy;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Play rock-paper-scissors against landmark frames from a hand tracker",
    long_about = None
)]
pub struct Args {
    /// How the computer picks its move
    #[arg(long, value_enum, default_value_t = OpponentPolicy::AlwaysWin)]
    pub policy: OpponentPolicy,
    /// Seed for the fair opponent, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON-lines landmark feed, one frame per line (defaults to stdin)
    #[arg(long, conflicts_with = "manual")]
    pub input: Option<std::path::PathBuf>,
    /// Pick your gesture from a menu instead of reading a feed
    #[arg(long)]
    pub manual: bool,
}
