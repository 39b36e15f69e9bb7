use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive},
        IntoResponse, Sse,
    },
    Json,
};
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use validator::Validate;

use crate::{error::Result, state::AppState};
use super::{
    notification_dto::{
        CreateNotificationRequest, MarkReadResponse, NotificationListResponse, SetCategoryRequest,
        SetSearchQueryRequest,
    },
    notification_models::{CategoryFilter, CategoryTab, Notification, NotificationId},
};

/// Get the visible notifications under the active filters
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Visible notifications", body = NotificationListResponse)
    ),
    tag = "notifications"
)]
pub async fn get_notifications(
    State(state): State<AppState>,
) -> Result<Json<NotificationListResponse>> {
    Ok(Json(state.notification_service.inbox().await))
}

/// Ingest a new notification
#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 400, description = "Invalid notification")
    ),
    tag = "notifications"
)]
pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let notification = state.notification_service.create(payload.into()).await;

    Ok((StatusCode::CREATED, Json(notification)))
}

/// List the category tabs
#[utoipa::path(
    get,
    path = "/api/notifications/categories",
    responses(
        (status = 200, description = "Category tabs in display order", body = Vec<CategoryTab>)
    ),
    tag = "notifications"
)]
pub async fn get_categories() -> Json<Vec<CategoryTab>> {
    Json(CategoryFilter::ALL_TABS.into_iter().map(CategoryTab::from).collect())
}

/// Get a single notification
#[utoipa::path(
    get,
    path = "/api/notifications/{id}",
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification", body = Notification),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications"
)]
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Notification>> {
    let notification = state.notification_service.get(&NotificationId(id)).await?;
    Ok(Json(notification))
}

/// Select the active category tab
#[utoipa::path(
    put,
    path = "/api/notifications/filter/category",
    request_body = SetCategoryRequest,
    responses(
        (status = 200, description = "Filtered notifications", body = NotificationListResponse),
        (status = 422, description = "Unknown category")
    ),
    tag = "notifications"
)]
pub async fn set_category(
    State(state): State<AppState>,
    Json(payload): Json<SetCategoryRequest>,
) -> Result<Json<NotificationListResponse>> {
    Ok(Json(state.notification_service.set_category(payload.category).await))
}

/// Replace the search query
#[utoipa::path(
    put,
    path = "/api/notifications/filter/search",
    request_body = SetSearchQueryRequest,
    responses(
        (status = 200, description = "Filtered notifications", body = NotificationListResponse)
    ),
    tag = "notifications"
)]
pub async fn set_search_query(
    State(state): State<AppState>,
    Json(payload): Json<SetSearchQueryRequest>,
) -> Result<Json<NotificationListResponse>> {
    Ok(Json(state.notification_service.set_search_query(payload.query).await))
}

/// Mark notification as read
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Read state applied; unknown ids are ignored", body = MarkReadResponse)
    ),
    tag = "notifications"
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MarkReadResponse>> {
    Ok(Json(state.notification_service.mark_as_read(&NotificationId(id)).await))
}

/// Delete a notification
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(
        ("id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted, or already absent")
    ),
    tag = "notifications"
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.notification_service.delete(&NotificationId(id)).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Subscribe to inbox changes via Server-Sent Events
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    responses(
        (status = 200, description = "SSE stream of notification events")
    ),
    tag = "notifications"
)]
pub async fn notification_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let rx = state.notification_service.subscribe();

    let stream = tokio_stream::wrappers::BroadcastStream::new(rx)
        .filter_map(|msg| async move {
            match msg {
                Ok(event) => match Event::default().json_data(&event) {
                    Ok(event) => Some(Ok(event)),
                    Err(e) => {
                        tracing::error!("Failed to encode notification event: {:?}", e);
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!("Notification stream lagged: {:?}", e);
                    None
                }
            }
        });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
