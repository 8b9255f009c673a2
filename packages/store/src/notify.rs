//! Confirmation notifications raised after a successful mutation.

use chrono::{DateTime, Local, TimeZone};

/// Which mutation succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Created,
    Updated,
    Deleted,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Created => "Account has been created",
            NotificationKind::Updated => "Update successfully",
            NotificationKind::Deleted => "User deleted successfully",
        }
    }
}

/// A toast-ready confirmation: a title and the moment the action completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    /// Stamp a notification with the current local time.
    pub fn now(kind: NotificationKind) -> Self {
        Self::at(kind, &Local::now())
    }

    pub fn at<Tz: TimeZone>(kind: NotificationKind, when: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            kind,
            title: kind.title().to_string(),
            description: format_timestamp(when),
        }
    }
}

/// Long-form en-US timestamp: `Friday, October 16, 2026 at 3:04 PM`.
///
/// Weekday and month are spelled out, the day keeps two digits and the hour
/// is on a 12-hour clock without padding.
pub fn format_timestamp<Tz: TimeZone>(when: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    when.format("%A, %B %d, %Y at %-I:%M %p").to_string()
}
