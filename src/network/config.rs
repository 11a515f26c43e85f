/// API route configuration
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Minimal default pointing at the local development backend. Unit tests
    /// and very early start-up phases use this; release builds resolve the
    /// real URL through `new()` / the window origin.
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self {
                base_url: url.trim_end_matches('/').to_string(),
            })
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a full API URL for a given path
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::from_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn rest_paths_are_rooted_under_api() {
        let config = ApiConfig::from_url("http://localhost:8080");
        assert_eq!(config.url("/models"), "http://localhost:8080/api/models");
        assert_eq!(
            config.url("/keys/DEEPSEEK_API_KEY"),
            "http://localhost:8080/api/keys/DEEPSEEK_API_KEY"
        );
    }
}
