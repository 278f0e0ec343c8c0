pub mod judge;
pub use judge::*;

pub mod outcome;
pub use outcome::*;

pub mod policy;
pub use policy::*;

pub mod round;
pub use round::*;
