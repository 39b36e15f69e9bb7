use crate::{
    notification::{
        notification_dto::{
            CreateNotificationRequest, MarkReadResponse, NotificationListResponse,
            SetCategoryRequest, SetSearchQueryRequest,
        },
        notification_handlers,
        notification_models::{
            Category, CategoryFilter, CategoryTab, IconHint, Notification, NotificationId,
        },
        notification_routes, NotificationEvent,
    },
    state::AppState,
};
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        notification_handlers::get_notifications,
        notification_handlers::create_notification,
        notification_handlers::get_categories,
        notification_handlers::get_notification,
        notification_handlers::set_category,
        notification_handlers::set_search_query,
        notification_handlers::mark_notification_read,
        notification_handlers::delete_notification,
        notification_handlers::notification_stream,
    ),
    components(
        schemas(
            Notification,
            NotificationId,
            Category,
            CategoryFilter,
            CategoryTab,
            IconHint,
            NotificationEvent,
            CreateNotificationRequest,
            SetCategoryRequest,
            SetSearchQueryRequest,
            NotificationListResponse,
            MarkReadResponse,
        )
    ),
    tags(
        (name = "notifications", description = "Notification inbox endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().nest("/notifications", notification_routes());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
