use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};
use utoipa::ToSchema;

use super::notification_dto::{MarkReadResponse, NotificationListResponse};
use super::notification_models::{
    Category, CategoryFilter, IconHint, NewNotification, Notification, NotificationId,
};
use super::notification_store::NotificationStore;
use crate::error::{AppError, Result};

/// Change pushed to stream subscribers after every mutation, carrying the
/// re-derived visible list.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    Created {
        notification: Notification,
        visible: Vec<Notification>,
    },
    Read {
        id: NotificationId,
        visible: Vec<Notification>,
    },
    Deleted {
        id: NotificationId,
        visible: Vec<Notification>,
    },
    FilterChanged {
        category: CategoryFilter,
        search_query: String,
        visible: Vec<Notification>,
    },
}

/// Business layer over the shared store. Every mutation re-derives the
/// visible list and publishes it to stream subscribers.
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<Mutex<NotificationStore>>,
    tx: broadcast::Sender<NotificationEvent>,
}

impl NotificationService {
    pub fn new(store: NotificationStore, tx: broadcast::Sender<NotificationEvent>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            tx,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.tx.subscribe()
    }

    pub async fn inbox(&self) -> NotificationListResponse {
        let store = self.store.lock().await;
        inbox_view(&store)
    }

    pub async fn get(&self, id: &NotificationId) -> Result<Notification> {
        let store = self.store.lock().await;
        store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Notification not found".into()))
    }

    pub async fn create(&self, new: NewNotification) -> Notification {
        let mut store = self.store.lock().await;
        let notification = store.insert(new);
        self.publish(NotificationEvent::Created {
            notification: notification.clone(),
            visible: store.visible_notifications(),
        });
        info!("Created notification {} from {}", notification.id, notification.app);
        notification
    }

    pub async fn set_category(&self, category: CategoryFilter) -> NotificationListResponse {
        let mut store = self.store.lock().await;
        store.set_category(category);
        self.publish_filter_changed(&store)
    }

    pub async fn set_search_query(&self, query: String) -> NotificationListResponse {
        let mut store = self.store.lock().await;
        store.set_search_query(query);
        self.publish_filter_changed(&store)
    }

    pub async fn mark_as_read(&self, id: &NotificationId) -> MarkReadResponse {
        let mut store = self.store.lock().await;
        if store.mark_as_read(id) {
            self.publish(NotificationEvent::Read {
                id: id.clone(),
                visible: store.visible_notifications(),
            });
        }
        MarkReadResponse {
            notification: store.get(id).cloned(),
            visible_index: store.visible_position(id),
        }
    }

    pub async fn delete(&self, id: &NotificationId) -> Option<Notification> {
        let mut store = self.store.lock().await;
        let removed = store.delete(id);
        if removed.is_some() {
            self.publish(NotificationEvent::Deleted {
                id: id.clone(),
                visible: store.visible_notifications(),
            });
        }
        removed
    }

    fn publish_filter_changed(&self, store: &NotificationStore) -> NotificationListResponse {
        let view = inbox_view(store);
        self.publish(NotificationEvent::FilterChanged {
            category: view.category,
            search_query: view.search_query.clone(),
            visible: view.notifications.clone(),
        });
        view
    }

    /// Having no subscribers is not an error.
    fn publish(&self, event: NotificationEvent) {
        if self.tx.send(event).is_err() {
            debug!("No stream subscribers for notification event");
        }
    }
}

fn inbox_view(store: &NotificationStore) -> NotificationListResponse {
    NotificationListResponse {
        category: store.category(),
        search_query: store.search_query().to_string(),
        unread_count: store.unread_count(),
        notifications: store.visible_notifications(),
    }
}

/// Display time for notifications ingested without one.
pub fn display_time_now() -> String {
    Utc::now().format("%-I:%M %p").to_string()
}

/// Build the startup store, seeded with the mock dataset when enabled.
pub fn initial_store(seed_mock_data: bool) -> NotificationStore {
    if seed_mock_data {
        let store = NotificationStore::with_notifications(mock_notifications());
        info!("Seeded notification store with {} notifications", store.len());
        store
    } else {
        NotificationStore::new()
    }
}

/// The dashboard's fixed mock dataset.
pub fn mock_notifications() -> Vec<Notification> {
    vec![
        seed(
            "1",
            "Gmail",
            "John Doe",
            "Project Update",
            "Hey, I've finished the design mockups for the new feature.",
            "10:30 AM",
            Category::Work,
            false,
            IconHint::Mail,
        ),
        seed(
            "2",
            "WhatsApp",
            "Sarah",
            "Weekend Plans",
            "Are we still meeting up this Saturday for lunch?",
            "9:15 AM",
            Category::Social,
            false,
            IconHint::MessageSquare,
        ),
        seed(
            "3",
            "Calendar",
            "Team Meeting",
            "Weekly Standup",
            "Your meeting starts in 30 minutes.",
            "Yesterday",
            Category::Work,
            true,
            IconHint::Calendar,
        ),
        seed(
            "4",
            "Gmail",
            "Amazon",
            "Your Order Has Shipped",
            "Your recent order #12345 has shipped and will arrive tomorrow.",
            "Yesterday",
            Category::Promo,
            true,
            IconHint::Mail,
        ),
        seed(
            "5",
            "Slack",
            "Design Team",
            "New Comment",
            "Alex commented on your design: \"This looks great!\"",
            "2 days ago",
            Category::Work,
            true,
            IconHint::MessageSquare,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    app: &str,
    sender: &str,
    title: &str,
    message: &str,
    time: &str,
    category: Category,
    is_read: bool,
    icon: IconHint,
) -> Notification {
    Notification {
        id: NotificationId::new(id),
        app: app.to_string(),
        sender: sender.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        category,
        is_read,
        icon,
    }
}
