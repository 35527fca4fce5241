use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories shown on the notification screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Inquiry,
    Favorite,
    Viewing,
    Property,
    System,
}

impl NotificationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inquiry => "New Inquiry",
            Self::Favorite => "Saved to Favorites",
            Self::Viewing => "Viewing Scheduled",
            Self::Property => "Property Update",
            Self::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Visibility toggle at the top of the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
}

/// In-memory notification list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping newest-first order; ties keep insertion order.
    pub fn push(&mut self, notification: Notification) {
        let position = self
            .items
            .iter()
            .position(|existing| existing.created_at < notification.created_at)
            .unwrap_or(self.items.len());
        self.items.insert(position, notification);
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read).count()
    }

    pub fn visible(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|item| match filter {
                NotificationFilter::All => true,
                NotificationFilter::Unread => !item.read,
            })
            .collect()
    }

    /// Returns false when the id is unknown.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn notification(id: &str, minutes_ago: i64, read: bool) -> Notification {
        let base = Utc.with_ymd_and_hms(2025, 6, 10, 15, 0, 0).unwrap();
        Notification {
            id: id.to_string(),
            kind: NotificationKind::Inquiry,
            title: "New inquiry".to_string(),
            body: "Someone asked about your listing.".to_string(),
            created_at: base - Duration::minutes(minutes_ago),
            read,
        }
    }

    #[test]
    fn feed_keeps_newest_first_regardless_of_push_order() {
        let mut feed = NotificationFeed::new();
        feed.push(notification("old", 60, false));
        feed.push(notification("new", 5, false));
        feed.push(notification("middle", 30, false));

        let visible = feed.visible(NotificationFilter::All);
        let ids: Vec<&str> = visible.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["new", "middle", "old"]);
    }

    #[test]
    fn unread_filter_hides_read_items() {
        let mut feed = NotificationFeed::new();
        feed.push(notification("a", 10, true));
        feed.push(notification("b", 5, false));

        assert_eq!(feed.unread_count(), 1);
        let unread = feed.visible(NotificationFilter::Unread);
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].id, "b");
    }

    #[test]
    fn mark_all_read_clears_the_badge() {
        let mut feed = NotificationFeed::new();
        feed.push(notification("a", 10, false));
        feed.push(notification("b", 5, false));
        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn dismiss_reports_whether_anything_was_removed() {
        let mut feed = NotificationFeed::new();
        feed.push(notification("a", 10, false));
        assert!(feed.dismiss("a"));
        assert!(!feed.dismiss("a"));
        assert!(feed.visible(NotificationFilter::All).is_empty());
    }

    #[test]
    fn mark_read_on_unknown_id_is_a_no_op() {
        let mut feed = NotificationFeed::new();
        feed.push(notification("a", 10, false));
        assert!(!feed.mark_read("missing"));
        assert_eq!(feed.unread_count(), 1);
    }
}
