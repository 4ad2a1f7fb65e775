pub mod checklist_file;
pub mod clickhouse_snapshots;
pub mod memory_snapshots;

pub use checklist_file::*;
pub use clickhouse_snapshots::*;
pub use memory_snapshots::*;
