//! # Backend module: access to the hosted `users` table
//!
//! Server-only. The page never holds store credentials; it calls the server
//! functions in the crate root, and they reach the table through the
//! [`RestTable`] kept here.
//!
//! ## Design
//!
//! The client is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_table`] loads
//! [`Settings`] (defaults, `config.toml`, environment), builds the HTTP client
//! and caches it for every later request. A configuration error is returned to
//! that caller and retried on the next call.
//!
//! ## Re-exports
//!
//! - [`get_table`]: returns `&'static RestTable`, initialising it on first use.
//! - [`BackendError`]: server-side failure detail, logged by the server
//!   function and returned to the page as a plain message.

mod error;
mod rest;
mod settings;

pub use error::BackendError;
pub use rest::RestTable;
pub use settings::{Backend, Settings};

use dioxus::prelude::ServerFnError;
use tokio::sync::OnceCell;

static TABLE: OnceCell<RestTable> = OnceCell::const_new();

/// Get or initialize the shared table client.
pub async fn get_table() -> Result<&'static RestTable, BackendError> {
    TABLE
        .get_or_try_init(|| async {
            let settings = Settings::new()?;
            tracing::info!(
                "users backend: {} (key column `{}`)",
                settings.backend.table_url(),
                settings.backend.key_column
            );
            RestTable::new(&settings.backend)
        })
        .await
}

/// Log a failed call and turn it into the error a server function returns.
pub(crate) fn server_error(context: &str, e: BackendError) -> ServerFnError {
    tracing::error!("{context}: {e}");
    ServerFnError::new(e.to_string())
}
