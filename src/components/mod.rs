pub mod focal_point;
pub mod rig;
pub mod shake;
pub mod wall;

pub use focal_point::*;
pub use rig::*;
pub use shake::*;
pub use wall::*;
