//! Configuration for GitHub API connections.
use secrecy::SecretString;

/// Default base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default page size for paginated queries (the GitHub maximum)
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote API connection configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the REST API (e.g. "https://api.github.com").
    pub api_url: String,
    /// Access token; requests are unauthenticated when absent.
    pub token: Option<SecretString>,
    /// Items requested per page.
    pub per_page: u8,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}
