use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{UserForm, UserPatch, UserRecord};
use crate::table::{RemoteTable, TableError};

/// In-memory RemoteTable backing the page tests.
///
/// Clones share the same rows. Keys are random UUIDs, as a hosted table
/// would assign them. [`fail_next`](MemoryTable::fail_next) makes the next
/// call of any verb fail without touching the rows.
#[derive(Clone, Debug, Default)]
pub struct MemoryTable {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<UserRecord>,
    fail_next: Option<String>,
    calls: usize,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the table with existing rows.
    pub fn with_rows(rows: Vec<UserRecord>) -> Self {
        let table = Self::new();
        table.lock().rows = rows;
        table
    }

    /// Make the next call fail with `message`.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.lock().fail_next = Some(message.into());
    }

    /// Number of calls received so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    /// Snapshot of the stored rows.
    pub fn rows(&self) -> Vec<UserRecord> {
        self.lock().rows.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count the call and consume a pending failure, if any.
    fn begin_call(&self) -> Result<MutexGuard<'_, Inner>, TableError> {
        let mut inner = self.lock();
        inner.calls += 1;
        match inner.fail_next.take() {
            Some(message) => Err(TableError::new(message)),
            None => Ok(inner),
        }
    }
}

impl RemoteTable for MemoryTable {
    async fn insert(&self, record: &UserForm) -> Result<(), TableError> {
        let mut inner = self.begin_call()?;
        inner.rows.push(UserRecord {
            user_id: uuid::Uuid::new_v4().to_string(),
            name: record.name.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
        });
        Ok(())
    }

    async fn select_all(&self) -> Result<Vec<UserRecord>, TableError> {
        let inner = self.begin_call()?;
        Ok(inner.rows.clone())
    }

    async fn update_by_key(&self, key: &str, patch: &UserPatch) -> Result<(), TableError> {
        let mut inner = self.begin_call()?;
        if let Some(row) = inner.rows.iter_mut().find(|r| r.user_id == key) {
            patch.apply_to(row);
        }
        Ok(())
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), TableError> {
        let mut inner = self.begin_call()?;
        inner.rows.retain(|r| r.user_id != key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormField;

    fn form(name: &str, email: &str, password: &str) -> UserForm {
        UserForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_keys() {
        let table = MemoryTable::new();

        // Initially empty
        assert!(table.select_all().await.unwrap().is_empty());

        table.insert(&form("A", "a@x.com", "p")).await.unwrap();
        table.insert(&form("A", "a@x.com", "p")).await.unwrap();

        let rows = table.select_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].user_id, rows[1].user_id);
        assert!(!rows[0].user_id.is_empty());
    }

    #[tokio::test]
    async fn test_update_touches_only_present_fields() {
        let table = MemoryTable::new();
        table.insert(&form("A", "a@x.com", "p")).await.unwrap();
        let key = table.rows()[0].user_id.clone();

        let patch = UserPatch::default().with(FormField::Name, "B");
        table.update_by_key(&key, &patch).await.unwrap();

        let row = &table.rows()[0];
        assert_eq!(row.user_id, key);
        assert_eq!(row.name, "B");
        assert_eq!(row.email, "a@x.com");
        assert_eq!(row.password, "p");
    }

    #[tokio::test]
    async fn test_missing_key_is_a_silent_no_op() {
        let table = MemoryTable::new();
        table.insert(&form("A", "a@x.com", "p")).await.unwrap();
        let before = table.rows();

        table.delete_by_key("no-such-key").await.unwrap();
        table
            .update_by_key("no-such-key", &UserPatch::default().with(FormField::Name, "Z"))
            .await
            .unwrap();

        assert_eq!(table.rows(), before);
    }

    #[tokio::test]
    async fn test_injected_failure_hits_one_call_only() {
        let table = MemoryTable::new();
        table.fail_next("connection reset");

        let err = table.insert(&form("A", "a@x.com", "p")).await.unwrap_err();
        assert_eq!(err.message(), "connection reset");
        assert!(table.rows().is_empty());

        table.insert(&form("A", "a@x.com", "p")).await.unwrap();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.calls(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let table = MemoryTable::new();
        let other = table.clone();

        table.insert(&form("A", "a@x.com", "p")).await.unwrap();
        let key = other.rows()[0].user_id.clone();
        other.delete_by_key(&key).await.unwrap();

        assert!(table.rows().is_empty());
    }
}
