use std::env;

const BASE_URL_ENV: &str = "STOREFRONT_API_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Runtime configuration for the console shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
}

impl AppConfig {
    /// Reads the backend base URL from the environment, falling back to the
    /// conventional local development address.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}
