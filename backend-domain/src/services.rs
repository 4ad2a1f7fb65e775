// Pure domain services

pub mod combat;
pub mod experience;
pub mod gains;
pub mod milestones;

pub use combat::*;
pub use experience::*;
pub use gains::*;
pub use milestones::*;
