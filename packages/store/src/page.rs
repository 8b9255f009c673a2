//! # Users page state
//!
//! [`UsersPage`] is everything the user-management screen remembers between
//! renders: the create form, the edit dialog's form and target, the row waiting
//! for delete confirmation, and the last snapshot of the table. It performs no
//! I/O. Each mutation is split into a `begin_*` step that hands out the request
//! to send and a `finish_*` step that applies the outcome, so a UI can hold the
//! state in a signal without borrowing it across an `.await`.
//!
//! ## Flows
//!
//! | Flow | Begin | On success | On failure |
//! |------|-------|------------|------------|
//! | Create | [`begin_create`](UsersPage::begin_create) returns the form | form reset, [`NotificationKind::Created`] | form kept |
//! | Update | [`begin_update`](UsersPage::begin_update) returns `(key, patch)`, or `None` without a target | target cleared, create form reset, [`NotificationKind::Updated`] | target and update form kept |
//! | Delete | [`request_delete`](UsersPage::request_delete) then [`begin_delete`](UsersPage::begin_delete) | [`NotificationKind::Deleted`] | list kept |
//! | Refresh | caller fetches | list replaced wholesale | previous snapshot kept |
//!
//! A successful `finish_*` returns a [`Notification`]; the caller then
//! refreshes the list. Failures are logged with `tracing` and otherwise
//! swallowed.
//!
//! ## In-flight guard
//!
//! Only one mutation may be outstanding. While one is in flight every
//! `begin_*` returns `None` and no request is produced, which rules out
//! duplicate rows from a double-clicked submit.

use crate::models::{FormField, UserForm, UserPatch, UserRecord};
use crate::notify::{Notification, NotificationKind};
use crate::table::TableError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersPage {
    form: UserForm,
    update_form: UserForm,
    editing: Option<String>,
    pending_delete: Option<String>,
    users: Vec<UserRecord>,
    in_flight: bool,
}

impl UsersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn update_form(&self) -> &UserForm {
        &self.update_form
    }

    /// Key of the row the edit dialog is open for.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Key of the row awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Whether a mutation round trip is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// A keystroke in the create form.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// A keystroke in the edit dialog.
    pub fn set_update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.update_form.set(field, value);
    }

    // Create

    pub fn begin_create(&mut self) -> Option<UserForm> {
        if !self.try_begin() {
            return None;
        }
        Some(self.form.clone())
    }

    pub fn finish_create(&mut self, result: Result<(), TableError>) -> Option<Notification> {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.form = UserForm::default();
                Some(Notification::now(NotificationKind::Created))
            }
            Err(e) => {
                tracing::error!("Insert error: {}", e.message());
                None
            }
        }
    }

    // Update

    /// Open the edit dialog for `row`, copying its fields into the update form.
    pub fn open_edit(&mut self, row: &UserRecord) {
        self.editing = Some(row.user_id.clone());
        self.update_form = row.to_form();
    }

    /// Dismiss the edit dialog without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The update to send, or `None` when no edit target is set.
    pub fn begin_update(&mut self) -> Option<(String, UserPatch)> {
        let key = self.editing.clone()?;
        if !self.try_begin() {
            return None;
        }
        Some((key, UserPatch::from(self.update_form.clone())))
    }

    pub fn finish_update(&mut self, result: Result<(), TableError>) -> Option<Notification> {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.editing = None;
                self.form = UserForm::default();
                Some(Notification::now(NotificationKind::Updated))
            }
            Err(e) => {
                tracing::error!("Update error: {}", e.message());
                None
            }
        }
    }

    // Delete

    /// First step: open the confirmation prompt for `user_id`.
    pub fn request_delete(&mut self, user_id: impl Into<String>) {
        self.pending_delete = Some(user_id.into());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second step: the user confirmed. Closes the prompt and returns the key
    /// to delete, or `None` if nothing was awaiting confirmation.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.pending_delete.is_none() || !self.try_begin() {
            return None;
        }
        self.pending_delete.take()
    }

    pub fn finish_delete(&mut self, result: Result<(), TableError>) -> Option<Notification> {
        self.in_flight = false;
        match result {
            Ok(()) => Some(Notification::now(NotificationKind::Deleted)),
            Err(e) => {
                tracing::error!("Delete error: {}", e.message());
                None
            }
        }
    }

    // Refresh

    /// Replace the displayed list with a fresh snapshot of the table.
    pub fn finish_refresh(&mut self, result: Result<Vec<UserRecord>, TableError>) {
        match result {
            Ok(users) => self.users = users,
            Err(e) => tracing::error!("Fetch error: {}", e.message()),
        }
    }

    fn try_begin(&mut self) -> bool {
        if self.in_flight {
            tracing::debug!("mutation already in flight, ignoring submit");
            return false;
        }
        self.in_flight = true;
        true
    }
}
