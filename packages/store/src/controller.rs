//! Async driver that runs a [`UsersPage`] against a [`RemoteTable`].
//!
//! Every successful mutation is announced, then followed by a full re-fetch;
//! the list is never patched locally. The page lives behind a [`PageHandle`],
//! so the same flow drives an owned page in tests and a reactive signal in the
//! UI. Each access to the page is a short closure and none spans an `.await`.

use crate::models::{FormField, UserRecord};
use crate::notify::Notification;
use crate::page::UsersPage;
use crate::table::RemoteTable;

/// Where a [`UsersPage`] lives, and where success notifications go.
pub trait PageHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut UsersPage) -> R) -> R;

    /// Called after a successful mutation, before the list is re-fetched.
    fn announce(&mut self, _note: &Notification) {}
}

impl PageHandle for UsersPage {
    fn update<R>(&mut self, f: impl FnOnce(&mut UsersPage) -> R) -> R {
        f(self)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UsersController<T: RemoteTable, P: PageHandle = UsersPage> {
    table: T,
    page: P,
}

impl<T: RemoteTable> UsersController<T> {
    pub fn new(table: T) -> Self {
        Self::attach(table, UsersPage::new())
    }
}

impl<T: RemoteTable, P: PageHandle> UsersController<T, P> {
    /// Drive an existing page holder.
    pub fn attach(table: T, page: P) -> Self {
        Self { table, page }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Initial load when the page mounts.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let result = self.table.select_all().await;
        self.page.update(|page| page.finish_refresh(result));
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.page.update(|page| page.set_field(field, value));
    }

    pub fn set_update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.page.update(|page| page.set_update_field(field, value));
    }

    pub async fn submit_create(&mut self) -> Option<Notification> {
        let form = self.page.update(UsersPage::begin_create)?;
        let result = self.table.insert(&form).await;
        let note = self.page.update(|page| page.finish_create(result))?;
        self.succeeded(note).await
    }

    pub fn open_edit(&mut self, row: &UserRecord) {
        self.page.update(|page| page.open_edit(row));
    }

    pub fn cancel_edit(&mut self) {
        self.page.update(UsersPage::cancel_edit);
    }

    pub async fn submit_update(&mut self) -> Option<Notification> {
        let (key, patch) = self.page.update(UsersPage::begin_update)?;
        let result = self.table.update_by_key(&key, &patch).await;
        let note = self.page.update(|page| page.finish_update(result))?;
        self.succeeded(note).await
    }

    pub fn request_delete(&mut self, user_id: impl Into<String>) {
        self.page.update(|page| page.request_delete(user_id));
    }

    pub fn cancel_delete(&mut self) {
        self.page.update(UsersPage::cancel_delete);
    }

    pub async fn confirm_delete(&mut self) -> Option<Notification> {
        let key = self.page.update(UsersPage::begin_delete)?;
        let result = self.table.delete_by_key(&key).await;
        let note = self.page.update(|page| page.finish_delete(result))?;
        self.succeeded(note).await
    }

    async fn succeeded(&mut self, note: Notification) -> Option<Notification> {
        self.page.announce(&note);
        self.refresh().await;
        Some(note)
    }
}
