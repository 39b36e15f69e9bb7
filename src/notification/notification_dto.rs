use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::notification_models::{Category, CategoryFilter, IconHint, NewNotification, Notification};
use super::notification_service::display_time_now;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, max = 100))]
    pub app: String,
    #[validate(length(min = 1, max = 200))]
    pub sender: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub message: String,
    /// Display time; defaults to the current clock time.
    pub time: Option<String>,
    pub category: Category,
    /// Defaults to the icon of the notification's category tab.
    pub icon: Option<IconHint>,
}

impl From<CreateNotificationRequest> for NewNotification {
    fn from(req: CreateNotificationRequest) -> Self {
        Self {
            app: req.app,
            sender: req.sender,
            title: req.title,
            message: req.message,
            time: req.time.unwrap_or_else(display_time_now),
            icon: req
                .icon
                .unwrap_or_else(|| CategoryFilter::from(req.category).icon()),
            category: req.category,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetCategoryRequest {
    pub category: CategoryFilter,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSearchQueryRequest {
    pub query: String,
}

/// The visible inbox together with the filters that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationListResponse {
    pub category: CategoryFilter,
    pub search_query: String,
    pub unread_count: usize,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkReadResponse {
    /// `None` when no notification has the requested id.
    pub notification: Option<Notification>,
    /// Position in the current visible list, if shown.
    pub visible_index: Option<usize>,
}
