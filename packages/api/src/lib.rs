//! # API crate: fullstack server functions for the users page
//!
//! Defines the Dioxus server functions that the web and desktop frontends call
//! to reach the `users` table, and the client-side [`ApiTable`] that wraps them
//! behind [`store::RemoteTable`].
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`backend`] | `server` | Layered settings, the PostgREST client and its lazily-initialised singleton |
//! | [`remote`] | - | [`ApiTable`], a `RemoteTable` whose verbs are the server functions below |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - `list_users`: `GET /api/users`
//! - `create_user`: `POST /api/users`
//! - `update_user`: `POST /api/users/update`
//! - `delete_user`: `POST /api/users/delete`

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod backend;
pub mod remote;

pub use remote::ApiTable;
pub use store::{UserForm, UserPatch, UserRecord};

/// Fetch every row of the users table.
#[cfg(feature = "server")]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<UserRecord>, ServerFnError> {
    let table = backend::get_table()
        .await
        .map_err(|e| backend::server_error("Backend unavailable", e))?;

    table
        .select_rows()
        .await
        .map_err(|e| backend::server_error("Fetch error", e))
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<UserRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert one user. The table assigns its `user_id`.
#[cfg(feature = "server")]
#[post("/api/users")]
pub async fn create_user(form: UserForm) -> Result<(), ServerFnError> {
    let table = backend::get_table()
        .await
        .map_err(|e| backend::server_error("Backend unavailable", e))?;

    table
        .insert_row(&form)
        .await
        .map_err(|e| backend::server_error("Insert error", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/users")]
pub async fn create_user(form: UserForm) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Overwrite the fields present in `patch` on the row keyed by `user_id`.
#[cfg(feature = "server")]
#[post("/api/users/update")]
pub async fn update_user(user_id: String, patch: UserPatch) -> Result<(), ServerFnError> {
    let table = backend::get_table()
        .await
        .map_err(|e| backend::server_error("Backend unavailable", e))?;

    table
        .update_row(&user_id, &patch)
        .await
        .map_err(|e| backend::server_error("Update error", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/users/update")]
pub async fn update_user(user_id: String, patch: UserPatch) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove the row keyed by `user_id`. A missing key is not an error.
#[cfg(feature = "server")]
#[post("/api/users/delete")]
pub async fn delete_user(user_id: String) -> Result<(), ServerFnError> {
    let table = backend::get_table()
        .await
        .map_err(|e| backend::server_error("Backend unavailable", e))?;

    table
        .delete_row(&user_id)
        .await
        .map_err(|e| backend::server_error("Delete error", e))
}

#[cfg(not(feature = "server"))]
#[post("/api/users/delete")]
pub async fn delete_user(user_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
