//! # Remote table contract
//!
//! [`RemoteTable`] is the only seam between the page and wherever user rows
//! actually live. It has four verbs and nothing else:
//!
//! | Method | Semantics |
//! |--------|-----------|
//! | [`insert`](RemoteTable::insert) | Adds one row; the store assigns its `user_id`. The new key is not returned. |
//! | [`select_all`](RemoteTable::select_all) | Every row, in whatever order the store yields them. |
//! | [`update_by_key`](RemoteTable::update_by_key) | Overwrites the present fields of the row whose `user_id` matches. A missing key is a successful no-op. |
//! | [`delete_by_key`](RemoteTable::delete_by_key) | Removes the row whose `user_id` matches. A missing key is a successful no-op. |
//!
//! Every call is a single independent round trip: no retries, no timeouts,
//! no transaction spanning calls. The page reaches the table through the
//! `api` crate's server functions; tests use an in-memory table.

use std::future::Future;

use crate::models::{UserForm, UserPatch, UserRecord};

/// The single failure kind surfaced by a remote table: the call failed,
/// and here is whatever the far side said about it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TableError {
    message: String,
}

impl TableError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Async CRUD access to the `users` table.
pub trait RemoteTable {
    fn insert(&self, record: &UserForm) -> impl Future<Output = Result<(), TableError>>;
    fn select_all(&self) -> impl Future<Output = Result<Vec<UserRecord>, TableError>>;
    fn update_by_key(
        &self,
        key: &str,
        patch: &UserPatch,
    ) -> impl Future<Output = Result<(), TableError>>;
    fn delete_by_key(&self, key: &str) -> impl Future<Output = Result<(), TableError>>;
}
