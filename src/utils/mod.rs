pub mod curve;
pub mod projection;

pub use curve::*;
pub use projection::*;
