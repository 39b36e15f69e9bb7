use std::collections::HashSet;

use super::notification_models::{
    CategoryFilter, NewNotification, Notification, NotificationId,
};

/// In-memory inbox plus the active category and search filters.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
    category: CategoryFilter,
    search_query: String,
    next_id: u64,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::with_notifications(Vec::new())
    }

    /// Seed ids are kept; duplicates are dropped, first one wins.
    pub fn with_notifications(seed: Vec<Notification>) -> Self {
        let mut seen = HashSet::new();
        let mut notifications = Vec::with_capacity(seed.len());

        for notification in seed {
            if !seen.insert(notification.id.clone()) {
                tracing::warn!("Dropping seed notification with duplicate id {}", notification.id);
                continue;
            }
            notifications.push(notification);
        }

        let next_id = notifications
            .iter()
            .filter_map(|n| n.id.as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.wrapping_add(1));

        Self {
            notifications,
            category: CategoryFilter::All,
            search_query: String::new(),
            next_id,
        }
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!("Category filter set to {}", category);
        self.category = category;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        tracing::debug!("Search query set to {:?}", self.search_query);
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn visible_notifications(&self) -> Vec<Notification> {
        self.visible_iter().cloned().collect()
    }

    fn visible_iter(&self) -> impl Iterator<Item = &Notification> {
        let needle = self.search_query.to_lowercase();
        let category = self.category;

        self.notifications
            .iter()
            .filter(move |n| category.matches(n.category))
            .filter(move |n| needle.is_empty() || n.matches_query(&needle))
    }

    pub fn visible_position(&self, id: &NotificationId) -> Option<usize> {
        self.visible_iter().position(|n| &n.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.visible_iter().filter(|n| !n.is_read).count()
    }

    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| &n.id == id)
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn insert(&mut self, new: NewNotification) -> Notification {
        let id = self.allocate_id();
        let notification = Notification {
            id,
            app: new.app,
            sender: new.sender,
            title: new.title,
            message: new.message,
            time: new.time,
            category: new.category,
            is_read: false,
            icon: new.icon,
        };

        tracing::debug!("Inserted notification {}", notification.id);
        self.notifications.push(notification.clone());
        notification
    }

    fn allocate_id(&mut self) -> NotificationId {
        loop {
            let candidate = NotificationId(self.next_id.to_string());
            self.next_id = self.next_id.wrapping_add(1);
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Returns true only when the notification went from unread to read.
    pub fn mark_as_read(&mut self, id: &NotificationId) -> bool {
        match self.notifications.iter_mut().find(|n| &n.id == id) {
            Some(notification) if notification.is_read => false,
            Some(notification) => {
                notification.is_read = true;
                tracing::debug!("Marked notification {} as read", id);
                true
            }
            None => {
                tracing::debug!("mark_as_read: no notification with id {}", id);
                false
            }
        }
    }

    pub fn delete(&mut self, id: &NotificationId) -> Option<Notification> {
        match self.notifications.iter().position(|n| &n.id == id) {
            Some(index) => {
                tracing::debug!("Deleted notification {}", id);
                Some(self.notifications.remove(index))
            }
            None => {
                tracing::debug!("delete: no notification with id {}", id);
                None
            }
        }
    }
}
