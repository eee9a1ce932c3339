/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override
/// via environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend including the `/api` prefix
    /// (default: `http://localhost:5001/api`).
    pub api_base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                     |
    /// |----------------|-----------------------------|
    /// | `API_BASE_URL` | `http://localhost:5001/api` |
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5001/api".into());

        Self { api_base_url }
    }
}
