pub mod classify;
pub use classify::*;

pub mod gesture;
pub use gesture::*;
