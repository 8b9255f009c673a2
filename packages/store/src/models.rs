//! # Domain models for user records and the forms that edit them
//!
//! Defines the data structures that flow between the page, the server functions
//! and the remote `users` table. Every type is `Serialize + Deserialize` so it
//! can cross the server/client boundary via Dioxus server functions and be sent
//! to the table as JSON.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | A row of the remote table. `user_id` is assigned by the store and is the only key used for lookups, updates and deletes. |
//! | [`UserForm`] | The three editable fields of a user, as typed into the create form or the edit dialog. Never carries a `user_id`. |
//! | [`UserPatch`] | A partial update. Absent fields are left out of the JSON body so the store keeps their current values. |
//! | [`FormField`] | Names one of the three editable fields; used to route keystrokes to the right slot of a [`UserForm`]. |
//!
//! ## Keys
//!
//! Tables differ in how they type their key column (`uuid`, `text`, `bigint`).
//! [`UserRecord::user_id`] accepts a JSON string or integer and keeps it as opaque
//! text; the client never interprets it beyond equality.

use serde::{Deserialize, Deserializer, Serialize};

/// A user row as stored in the remote table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned key, opaque to the client.
    #[serde(deserialize_with = "key_as_text")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Stored and displayed as typed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

impl UserRecord {
    /// The editable fields of this row, as a form.
    pub fn to_form(&self) -> UserForm {
        UserForm {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Editable fields of a user. This is also the insert payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserForm {
    /// Overwrite a single field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}

/// A partial update for one row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserPatch {
    /// Builder method to set a single field.
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
        }
        self
    }

    /// Apply the present fields to a record in place.
    pub fn apply_to(&self, record: &mut UserRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
        if let Some(password) = &self.password {
            record.password = password.clone();
        }
    }
}

/// The edit dialog always sends all three fields.
impl From<UserForm> for UserPatch {
    fn from(form: UserForm) -> Self {
        Self {
            name: Some(form.name),
            email: Some(form.email),
            password: Some(form.password),
        }
    }
}

/// One of the editable fields of a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Password];

    /// Column name in the table and `name` attribute of the matching input.
    pub fn column(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }

    /// Map an input's `name` attribute back to a field.
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.column() == column)
    }
}

fn key_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Key {
        Text(String),
        Int(i64),
    }

    Ok(match Key::deserialize(deserializer)? {
        Key::Text(s) => s,
        Key::Int(n) => n.to_string(),
    })
}

/// Nullable text columns render as empty cells rather than failing the whole listing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accepts_text_and_integer_keys() {
        let text: UserRecord = serde_json::from_str(
            r#"{"user_id":"6f1c","name":"Jane","email":"jane@ex.com","password":"pw123"}"#,
        )
        .unwrap();
        assert_eq!(text.user_id, "6f1c");

        let int: UserRecord = serde_json::from_str(
            r#"{"user_id":42,"name":"Jane","email":"jane@ex.com","password":"pw123","created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(int.user_id, "42");
        assert_eq!(int.name, "Jane");
    }

    #[test]
    fn test_null_columns_decode_as_empty() {
        let rows: Vec<UserRecord> = serde_json::from_str(
            r#"[
                {"user_id":1,"name":"Jane","email":"jane@ex.com","password":"pw123"},
                {"user_id":2,"name":"Ghost","email":null,"password":null}
            ]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Ghost");
        assert_eq!(rows[1].email, "");
        assert_eq!(rows[1].password, "");

        let sparse: UserRecord = serde_json::from_str(r#"{"user_id":"k"}"#).unwrap();
        assert!(sparse.to_form().is_empty());
    }

    #[test]
    fn test_form_never_serializes_a_key() {
        let form = UserForm {
            name: "A".into(),
            email: "a@x.com".into(),
            password: "p".into(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert!(json.get("user_id").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn test_partial_patch_only_carries_present_fields() {
        let patch = UserPatch::default().with(FormField::Name, "B");
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"name":"B"}"#);

        let mut record = UserRecord {
            user_id: "k".into(),
            name: "A".into(),
            email: "a@x.com".into(),
            password: "p".into(),
        };
        patch.apply_to(&mut record);
        assert_eq!(record.name, "B");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.password, "p");
    }

    #[test]
    fn test_form_field_by_column() {
        assert_eq!(FormField::from_column("email"), Some(FormField::Email));
        assert_eq!(FormField::from_column("user_id"), None);

        let mut form = UserForm::default();
        assert!(form.is_empty());
        form.set(FormField::Password, "secret");
        assert_eq!(form.get(FormField::Password), "secret");
        assert!(!form.is_empty());
    }
}
