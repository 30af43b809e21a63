use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub anthropic_api_key: String,
    pub claude_model: String,
    pub claude_max_tokens: u32,
    /// Override for the Anthropic API base URL (tests, proxies). `None` uses
    /// the production endpoint.
    pub claude_base_url: Option<String>,
    /// Override for the PullPush search API base URL. `None` uses production.
    pub pullpush_base_url: Option<String>,
    pub search_timeout_secs: u64,
    pub generate_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("anthropic_api_key", &"[redacted]")
            .field("claude_model", &self.claude_model)
            .field("claude_max_tokens", &self.claude_max_tokens)
            .field("claude_base_url", &self.claude_base_url)
            .field("pullpush_base_url", &self.pullpush_base_url)
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("generate_timeout_secs", &self.generate_timeout_secs)
            .finish()
    }
}
