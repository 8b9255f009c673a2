//! Layered settings for the users backend.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, `USERS_BACKEND__*` environment
//! variables, and finally the conventional `SUPABASE_URL` / `SUPABASE_ANON_KEY`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, Source};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Backend {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// API key sent as both `apikey` and bearer token.
    pub key: String,
    pub table: String,
    pub key_column: String,
}

impl Backend {
    /// REST endpoint of the table: `{url}/rest/v1/{table}`.
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub backend: Backend,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let file = File::with_name("config.toml")
            .format(FileFormat::Toml)
            .required(false);
        Self::layered(file, std::env::vars().collect())
    }

    /// Defaults overlaid with a TOML document only, no environment.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Self::layered(File::from_str(s, FileFormat::Toml), Map::new())
    }

    /// Defaults, then `file`, then the `USERS_*` and `SUPABASE_*` entries of `vars`.
    fn layered<S>(file: S, vars: Map<String, String>) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let url = vars.get("SUPABASE_URL").cloned();
        let key = vars.get("SUPABASE_ANON_KEY").cloned();

        defaults()?
            .add_source(file)
            .add_source(
                Environment::with_prefix("USERS")
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars)),
            )
            .set_override_option("backend.url", url)?
            .set_override_option("backend.key", key)?
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("backend.url", "http://localhost:54321")?
        .set_default("backend.key", "")?
        .set_default("backend.table", "users")?
        .set_default("backend.key_column", "user_id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.backend.table, "users");
        assert_eq!(settings.backend.key_column, "user_id");
        assert_eq!(
            settings.backend.table_url(),
            "http://localhost:54321/rest/v1/users"
        );
    }

    #[test]
    fn test_toml_overrides() {
        let settings = Settings::from_toml(
            r#"
            [backend]
            url = "https://abc.supabase.co/"
            key = "anon"
            table = "members"
            "#,
        )
        .unwrap();
        assert_eq!(settings.backend.key, "anon");
        assert_eq!(settings.backend.key_column, "user_id");
        assert_eq!(
            settings.backend.table_url(),
            "https://abc.supabase.co/rest/v1/members"
        );
    }

    #[test]
    fn test_environment() {
        let vars: Map<String, String> = [
            ("USERS_BACKEND__KEY_COLUMN", "id"),
            ("SUPABASE_URL", "https://env.supabase.co"),
            ("SUPABASE_ANON_KEY", "env-key"),
            ("HOME", "/root"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let file = File::from_str(
            r#"
            [backend]
            url = "https://file.supabase.co"
            "#,
            FileFormat::Toml,
        );
        let settings = Settings::layered(file, vars).unwrap();
        assert_eq!(settings.backend.key_column, "id");
        assert_eq!(settings.backend.url, "https://env.supabase.co");
        assert_eq!(settings.backend.key, "env-key");
        assert_eq!(settings.backend.table, "users");
    }
}
