pub mod finger;
pub use finger::*;

pub mod fingers;
pub use fingers::*;

pub mod landmark;
pub use landmark::*;

pub mod landmarks;
pub use landmarks::*;

pub mod point;
pub use point::*;
