use axum::{
    routing::{get, patch, put},
    Router,
};

use crate::state::AppState;
use super::notification_handlers;

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(notification_handlers::get_notifications)
                .post(notification_handlers::create_notification),
        )
        .route("/categories", get(notification_handlers::get_categories))
        .route("/stream", get(notification_handlers::notification_stream))
        .route("/filter/category", put(notification_handlers::set_category))
        .route("/filter/search", put(notification_handlers::set_search_query))
        .route(
            "/:id",
            get(notification_handlers::get_notification)
                .delete(notification_handlers::delete_notification),
        )
        .route("/:id/read", patch(notification_handlers::mark_notification_read))
}
