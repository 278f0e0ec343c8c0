//! Host side of the game: landmark feed in, rendered rounds out.
//!
//! Everything here is an outer collaborator of the core. Camera capture and
//! hand tracking happen upstream; this module replays their landmark frames,
//! renders each round to the terminal, and keeps the score.

pub mod args;
pub use args::*;

pub mod feed;
pub use feed::*;

pub mod frame;
pub use frame::*;

pub mod host;
pub use host::*;

pub mod scene;
pub use scene::*;

pub mod scoreboard;
pub use scoreboard::*;
