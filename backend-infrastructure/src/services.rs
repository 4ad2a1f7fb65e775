pub mod collection_log_client;
pub mod health_service;
pub mod hiscores_client;
pub mod refresh_service;

pub use collection_log_client::*;
pub use health_service::*;
pub use hiscores_client::*;
pub use refresh_service::*;
