pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

// Re-export the grid types and core services for external use
pub use models::*;
pub use services::*;
