// Re-export network modules
pub mod api_client;
pub mod config;

pub use api_client::ApiClient;

// Helper function to get API base URL
pub(crate) fn get_api_base_url() -> String {
    #[cfg(debug_assertions)]
    {
        config::ApiConfig::default().base_url().to_string()
    }
    #[cfg(not(debug_assertions))]
    {
        // Build-time override first, then the origin the page was served
        // from - the backend serves this frontend in production.
        if let Ok(cfg) = config::ApiConfig::new() {
            return cfg.base_url().to_string();
        }
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return config::ApiConfig::from_url(&origin).base_url().to_string();
            }
        }
        config::ApiConfig::default().base_url().to_string()
    }
}
