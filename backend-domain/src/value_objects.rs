// Domain value objects
pub mod boss;
pub mod identifiers;
pub mod skill;

pub use boss::*;
pub use identifiers::*;
pub use skill::*;
