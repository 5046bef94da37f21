//! Backend endpoint configuration.
//!
//! The backend is chosen at compile time: the local json-server by default,
//! or whatever `WISHLIST_API_URL` pointed at when the crate was built.

/// Local json-server endpoint
pub const LOCAL_API_URL: &str = "http://localhost:3001";

/// Collection path for wishes
pub const WISHES_PATH: &str = "wishes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint baked in at build time
    pub fn from_build_env() -> Self {
        match option_env!("WISHLIST_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(LOCAL_API_URL),
        }
    }

    /// `{base}/wishes`
    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, WISHES_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
