pub mod auth_service;
pub mod profile_service;
pub mod table_service;

pub use table_service::TableClient;
