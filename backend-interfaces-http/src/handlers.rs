pub mod checklist_handlers;
pub mod ops_handlers;
pub mod player_handlers;

pub use checklist_handlers::*;
pub use ops_handlers::*;
pub use player_handlers::*;
