pub mod controller;
pub mod models;
pub mod notify;
pub mod page;
pub mod table;

#[cfg(test)]
mod memory;

pub use controller::{PageHandle, UsersController};
pub use models::{FormField, UserForm, UserPatch, UserRecord};
pub use notify::{format_timestamp, Notification, NotificationKind};
pub use page::UsersPage;
pub use table::{RemoteTable, TableError};
