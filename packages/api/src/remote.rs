//! Client-side table that reaches the users backend through server functions.

use dioxus::prelude::ServerFnError;
use store::{RemoteTable, TableError, UserForm, UserPatch, UserRecord};

/// [`RemoteTable`] for pages: each verb is one server-function round trip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApiTable;

impl RemoteTable for ApiTable {
    async fn insert(&self, record: &UserForm) -> Result<(), TableError> {
        crate::create_user(record.clone()).await.map_err(remote_error)
    }

    async fn select_all(&self) -> Result<Vec<UserRecord>, TableError> {
        crate::list_users().await.map_err(remote_error)
    }

    async fn update_by_key(&self, key: &str, patch: &UserPatch) -> Result<(), TableError> {
        crate::update_user(key.to_string(), patch.clone())
            .await
            .map_err(remote_error)
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), TableError> {
        crate::delete_user(key.to_string()).await.map_err(remote_error)
    }
}

fn remote_error(e: ServerFnError) -> TableError {
    TableError::new(e.to_string())
}
