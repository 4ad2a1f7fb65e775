pub mod checklist_queries;
pub mod profile_queries;
