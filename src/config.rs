use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a listing harvest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// URL of the category listing page
    pub listing_url: String,

    /// Container id prefix that marks a product card
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Number of scroll cycles used to trigger lazy loading
    #[serde(default = "default_scroll_cycles")]
    pub scroll_cycles: u32,

    /// Seconds each scroll cycle waits for the page to grow
    #[serde(default = "default_scroll_pause_secs")]
    pub scroll_pause_secs: u64,

    /// Seconds to wait for the initial render
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,

    /// Browser window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height in pixels
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

impl ListingConfig {
    /// Create a new configuration with default values
    pub fn new(listing_url: &str) -> Self {
        Self {
            listing_url: listing_url.to_string(),
            id_prefix: default_id_prefix(),
            scroll_cycles: default_scroll_cycles(),
            scroll_pause_secs: default_scroll_pause_secs(),
            load_timeout_secs: default_load_timeout_secs(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            webdriver_url: default_webdriver_url(),
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default container id prefix
fn default_id_prefix() -> String {
    "product-card".to_string()
}

/// Default number of scroll cycles
fn default_scroll_cycles() -> u32 {
    7
}

/// Default per-cycle scroll pause
fn default_scroll_pause_secs() -> u64 {
    2
}

/// Default initial load timeout
fn default_load_timeout_secs() -> u64 {
    10
}

/// Default browser window width
fn default_window_width() -> u32 {
    1920
}

/// Default browser window height
fn default_window_height() -> u32 {
    1080
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}
