// Declare submodules
pub mod notification_dto;
pub mod notification_handlers;
pub mod notification_models;
pub mod notification_service;
pub mod notification_store;
pub mod routes;

// Re-export public items
pub use notification_service::{initial_store, NotificationEvent, NotificationService};
pub use routes::notification_routes;
