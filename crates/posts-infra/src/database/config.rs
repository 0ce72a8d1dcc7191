use std::fmt;

/// Default table holding posts on the hosted service.
pub const DEFAULT_TABLE: &str = "posts";

/// Connection settings for the hosted database's REST endpoint.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Key sent as both `apikey` and bearer token.
    pub api_key: String,
    pub table: String,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Full REST URL of the posts table.
    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

// Keep the key out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("api_key", &"***")
            .field("table", &self.table)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = DatabaseConfig::new("https://abc.supabase.co/", "key");
        assert_eq!(config.endpoint(), "https://abc.supabase.co/rest/v1/posts");
    }

    #[test]
    fn test_custom_table() {
        let config = DatabaseConfig::new("http://localhost:54321", "key").with_table("articles");
        assert_eq!(config.endpoint(), "http://localhost:54321/rest/v1/articles");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = DatabaseConfig::new("http://localhost", "super-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
    }
}
