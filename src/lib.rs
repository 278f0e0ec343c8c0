//! Hand-gesture rock-paper-scissors.
//!
//! The core turns one detected hand (21 ordered landmarks) into a [`Gesture`],
//! picks an opponent move under an [`OpponentPolicy`], and judges the round.
//! It never touches pixels, windows, or files. The `server` feature adds a
//! host that replays landmark frames from a JSON-lines feed.
//!
//! [`Gesture`]: gesture::Gesture
//! [`OpponentPolicy`]: judge::OpponentPolicy
pub mod gesture;
pub mod hand;
pub mod judge;
#[cfg(feature = "server")]
pub mod play;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Normalized image-space coordinate. Smaller y is visually higher.
pub type Coordinate = f32;
/// Empirical frequencies when sampling opponent moves.
pub type Frequency = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// HAND TOPOLOGY
// ============================================================================
/// Points per detected hand, in the 21-point hand-tracking numbering.
pub const LANDMARK_COUNT: usize = 21;
/// Fingers per hand, thumb through pinky.
pub const FINGER_COUNT: usize = 5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
