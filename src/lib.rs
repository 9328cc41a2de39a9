// Re-export modules
pub mod config;
pub mod extract;
pub mod report;
pub mod session;

// Re-export commonly used types for convenience
pub use report::{HarvestReport, SkipReason, SkippedContainer};

use config::ListingConfig;
use thiserror::Error;
use url::Url;

/// Errors that end a harvest run
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("invalid listing URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("failed to connect to WebDriver at {url}: {source}")]
    Connect {
        url: String,
        source: fantoccini::error::NewSessionError,
    },

    #[error("failed to load {url}: {source}")]
    Navigation {
        url: String,
        source: fantoccini::error::CmdError,
    },

    #[error("page script failed: {0}")]
    Script(fantoccini::error::CmdError),

    #[error("failed to read page source: {0}")]
    PageSource(fantoccini::error::CmdError),

    #[error("container id prefix {prefix:?} does not form a valid selector")]
    Selector { prefix: String },
}

/// Main builder for harvesting product links from a listing page
pub struct Listing {
    config: ListingConfig,
}

impl Listing {
    /// Create a new Listing builder for the given page URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            config: ListingConfig::new(&url.into()),
        }
    }

    /// Set the container id prefix that marks a product card
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.id_prefix = prefix.into();
        self
    }

    /// Set the number of scroll cycles used to trigger lazy loading
    pub fn with_scroll_cycles(mut self, cycles: u32) -> Self {
        self.config.scroll_cycles = cycles;
        self
    }

    /// Set how long each scroll cycle waits for the page to grow
    pub fn with_scroll_pause(mut self, seconds: u64) -> Self {
        self.config.scroll_pause_secs = seconds;
        self
    }

    /// Set how long to wait for the initial render
    pub fn with_load_timeout(mut self, seconds: u64) -> Self {
        self.config.load_timeout_secs = seconds;
        self
    }

    /// Set the browser window size in pixels
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window_width = width;
        self.config.window_height = height;
        self
    }

    /// Set the WebDriver endpoint to connect to
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.webdriver_url = url.into();
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ListingConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ListingConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = serde_json::from_str(config_str)?;
        Ok(self.with_config(config))
    }

    /// Drive the browser through the listing page and collect product links.
    ///
    /// Connects to the WebDriver server, loads the page, runs the scroll
    /// cycles, captures the rendered source, and extracts the links. The
    /// session is closed before any capture error propagates.
    pub async fn harvest(self) -> Result<HarvestReport, HarvestError> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        Url::parse(&config.listing_url).map_err(|source| HarvestError::InvalidUrl {
            url: config.listing_url.clone(),
            source,
        })?;

        let session = session::Session::connect(&config).await?;
        let captured = session.capture_listing().await;

        // Release the browser on every path before looking at the capture result
        if let Err(e) = session.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
        let html = captured?;

        let extraction = extract::extract_links(&html, &config.id_prefix)?;

        Ok(HarvestReport {
            listing_url: config.listing_url,
            links: extraction.links,
            skipped: extraction.skipped,
        })
    }
}
