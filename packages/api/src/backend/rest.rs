//! # REST client for a hosted `users` table
//!
//! [`RestTable`] speaks the PostgREST dialect exposed by hosted
//! backend-as-a-service tables. One request per verb, no retries:
//!
//! | Verb | Request |
//! |------|---------|
//! | insert | `POST {table_url}` with body `[record]` and `Prefer: return=minimal` |
//! | select all | `GET {table_url}?select=*` |
//! | update | `PATCH {table_url}?{key_column}=eq.{key}` with the patch as body |
//! | delete | `DELETE {table_url}?{key_column}=eq.{key}` |
//!
//! Every request carries the API key twice, as `apikey` and as a bearer token.
//! A non-2xx response becomes [`BackendError::Status`] with the `message` field
//! of the JSON error body when there is one.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use store::{UserForm, UserPatch, UserRecord};

use super::error::BackendError;
use super::settings::Backend;

#[derive(Clone, Debug)]
pub struct RestTable {
    http: Client,
    endpoint: String,
    key_column: String,
}

impl RestTable {
    pub fn new(backend: &Backend) -> Result<Self, BackendError> {
        if backend.url.trim().is_empty() {
            return Err(BackendError::Config("backend.url is empty".to_string()));
        }
        if backend.key.is_empty() {
            tracing::warn!("backend.key is empty, requests will be sent without credentials");
        }

        let http = Client::builder()
            .default_headers(auth_headers(&backend.key)?)
            .build()?;

        Ok(Self {
            http,
            endpoint: backend.table_url(),
            key_column: backend.key_column.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn insert_row(&self, record: &UserForm) -> Result<(), BackendError> {
        tracing::debug!("POST {}", self.endpoint);
        let response = self.insert_request(record).send().await?;
        check(response).await?;
        Ok(())
    }

    pub async fn select_rows(&self) -> Result<Vec<UserRecord>, BackendError> {
        tracing::debug!("GET {}", self.endpoint);
        let response = self.select_request().send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn update_row(&self, key: &str, patch: &UserPatch) -> Result<(), BackendError> {
        tracing::debug!("PATCH {} ({}={})", self.endpoint, self.key_column, key);
        let response = self.update_request(key, patch).send().await?;
        check(response).await?;
        Ok(())
    }

    pub async fn delete_row(&self, key: &str) -> Result<(), BackendError> {
        tracing::debug!("DELETE {} ({}={})", self.endpoint, self.key_column, key);
        let response = self.delete_request(key).send().await?;
        check(response).await?;
        Ok(())
    }

    fn insert_request(&self, record: &UserForm) -> RequestBuilder {
        self.http
            .post(&self.endpoint)
            .header("Prefer", "return=minimal")
            .json(&[record])
    }

    fn select_request(&self) -> RequestBuilder {
        self.http.get(&self.endpoint).query(&[("select", "*")])
    }

    fn update_request(&self, key: &str, patch: &UserPatch) -> RequestBuilder {
        self.http
            .patch(&self.endpoint)
            .query(&self.key_filter(key))
            .json(patch)
    }

    fn delete_request(&self, key: &str) -> RequestBuilder {
        self.http.delete(&self.endpoint).query(&self.key_filter(key))
    }

    fn key_filter(&self, key: &str) -> [(String, String); 1] {
        [(self.key_column.clone(), format!("eq.{key}"))]
    }
}

fn auth_headers(key: &str) -> Result<HeaderMap, BackendError> {
    let invalid = |_| BackendError::Config("backend.key is not a valid header value".to_string());

    let mut apikey = HeaderValue::from_str(key).map_err(invalid)?;
    apikey.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("apikey", apikey);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

async fn check(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

/// Pull a human-readable message out of an error response body.
fn error_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        msg: Option<String>,
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.msg).or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                body.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn backend() -> Backend {
        Backend {
            url: "https://abc.supabase.co/".to_string(),
            key: "anon-key".to_string(),
            table: "users".to_string(),
            key_column: "user_id".to_string(),
        }
    }

    #[test]
    fn test_endpoint() {
        let table = RestTable::new(&backend()).unwrap();
        assert_eq!(table.endpoint(), "https://abc.supabase.co/rest/v1/users");
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let mut b = backend();
        b.url = "  ".to_string();
        assert!(matches!(RestTable::new(&b), Err(BackendError::Config(_))));
    }

    #[test]
    fn test_auth_headers() {
        let headers = auth_headers("anon-key").unwrap();
        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers[AUTHORIZATION], "Bearer anon-key");
        assert!(headers[AUTHORIZATION].is_sensitive());

        assert!(auth_headers("bad\nkey").is_err());
    }

    #[test]
    fn test_select_request() {
        let table = RestTable::new(&backend()).unwrap();
        let request = table.select_request().build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().query(), Some("select=*"));
    }

    #[test]
    fn test_insert_request_wraps_record_in_array() {
        let table = RestTable::new(&backend()).unwrap();
        let form = UserForm {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        };
        let request = table.insert_request(&form).build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.headers()["prefer"], "return=minimal");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "name": "A", "email": "a@x.com", "password": "p" }])
        );
    }

    #[test]
    fn test_mutations_filter_by_key_column() {
        let mut b = backend();
        b.key_column = "id".to_string();
        let table = RestTable::new(&b).unwrap();

        let patch = UserPatch::default().with(store::FormField::Name, "B");
        let update = table.update_request("42", &patch).build().unwrap();
        assert_eq!(update.method(), Method::PATCH);
        assert_eq!(update.url().query(), Some("id=eq.42"));
        let body = update.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"name":"B"}"#);

        let delete = table.delete_request("42").build().unwrap();
        assert_eq!(delete.method(), Method::DELETE);
        assert_eq!(delete.url().query(), Some("id=eq.42"));
    }

    #[test]
    fn test_error_message() {
        let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value"}"#;
        assert_eq!(
            error_message(StatusCode::CONFLICT, body),
            "duplicate key value"
        );
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, r#"{"msg":"Invalid API key"}"#),
            "Invalid API key"
        );
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }
}
