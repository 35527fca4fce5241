//! Engagement surfaces: the notification feed and the realtor's inquiry book.

pub mod inquiries;
pub mod notifications;

pub use inquiries::{Inquiry, InquiryBook, InquiryStatus};
pub use notifications::{Notification, NotificationFeed, NotificationFilter, NotificationKind};
