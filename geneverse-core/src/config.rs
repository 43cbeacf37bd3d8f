pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_SESSION_KEY: &str = "geneverse_session_id";

/// Page-level settings. The browser build overrides the defaults from
/// `GENEVERSE_*` globals set by the hosting page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub api_base: String,
    pub session_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl PageConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        if !api_base.trim().is_empty() {
            self.api_base = api_base;
        }
        self
    }

    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !key.trim().is_empty() {
            self.session_key = key;
        }
        self
    }

    /// Absolute or root-relative URL for an endpoint path such as `genes`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
