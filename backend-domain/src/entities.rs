// Domain entities

pub mod aggregate;
pub mod checklist;
pub mod collection_log;
pub mod model;
pub mod profile;
pub mod scoreboard;
pub mod snapshot;
pub mod stats_document;

pub use aggregate::*;
pub use checklist::*;
pub use collection_log::*;
pub use model::*;
pub use profile::*;
pub use scoreboard::*;
pub use snapshot::*;
pub use stats_document::*;
