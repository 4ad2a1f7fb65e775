pub mod aggregate_commands;
pub mod checklist_commands;
