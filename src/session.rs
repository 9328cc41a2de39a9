use crate::HarvestError;
use crate::config::ListingConfig;
use crate::extract::container_selector;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::time::{Duration, Instant};

/// Interval between readiness probes
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A WebDriver session pointed at one listing page
pub struct Session {
    client: Client,
    config: ListingConfig,
}

impl Session {
    /// Connect to the WebDriver server with the browser options for harvesting
    pub async fn connect(config: &ListingConfig) -> Result<Self, HarvestError> {
        let capabilities = chrome_capabilities(config.window_width, config.window_height);

        let client = ClientBuilder::native()
            .capabilities(capabilities)
            .connect(&config.webdriver_url)
            .await
            .map_err(|source| HarvestError::Connect {
                url: config.webdriver_url.clone(),
                source,
            })?;

        ::log::debug!("Connected to WebDriver at {}", config.webdriver_url);

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Load the listing page, run the scroll cycles, and return the rendered source
    pub async fn capture_listing(&self) -> Result<String, HarvestError> {
        self.client
            .goto(&self.config.listing_url)
            .await
            .map_err(|source| HarvestError::Navigation {
                url: self.config.listing_url.clone(),
                source,
            })?;

        self.wait_for_initial_render().await?;
        self.scroll_to_end().await?;

        self.client.source().await.map_err(HarvestError::PageSource)
    }

    /// Close the session and release the browser
    pub async fn close(self) -> Result<(), fantoccini::error::CmdError> {
        self.client.close().await
    }

    /// Poll until the document is complete and at least one container is
    /// present, bounded by the load timeout. Expiry is not an error: the page
    /// may simply have no containers, and extraction will report that.
    async fn wait_for_initial_render(&self) -> Result<(), HarvestError> {
        let deadline = Instant::now() + Duration::from_secs(self.config.load_timeout_secs);
        let selector = container_selector(&self.config.id_prefix);

        loop {
            let ready = self
                .client
                .execute("return document.readyState;", vec![])
                .await
                .map_err(HarvestError::Script)?;

            if ready.as_str() == Some("complete") {
                let containers = self.container_count(&selector).await?;
                if containers > 0 {
                    ::log::debug!("Initial render complete with {} containers", containers);
                    return Ok(());
                }
            }

            if Instant::now() >= deadline {
                ::log::warn!(
                    "Page not ready after {}s, continuing with current DOM",
                    self.config.load_timeout_secs
                );
                return Ok(());
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Run the configured number of scroll cycles to pull lazy content into
    /// the DOM. The cycle count is fixed; each cycle's wait ends early once
    /// the page has grown.
    async fn scroll_to_end(&self) -> Result<(), HarvestError> {
        for cycle in 1..=self.config.scroll_cycles {
            let before = self.scroll_height().await?;

            self.client
                .execute("window.scrollTo(0, document.body.scrollHeight);", vec![])
                .await
                .map_err(HarvestError::Script)?;

            let grew = self.wait_for_growth(before).await?;
            ::log::debug!(
                "Scroll cycle {}/{}: height before {}, page grew: {}",
                cycle,
                self.config.scroll_cycles,
                before,
                grew
            );
        }
        Ok(())
    }

    /// Poll until the scroll height exceeds `previous`, bounded by the
    /// per-cycle pause. Returns whether the page grew before the bound.
    async fn wait_for_growth(&self, previous: u64) -> Result<bool, HarvestError> {
        let deadline = Instant::now() + Duration::from_secs(self.config.scroll_pause_secs);

        loop {
            let height = self.scroll_height().await?;
            if height > previous {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn scroll_height(&self) -> Result<u64, HarvestError> {
        let value = self
            .client
            .execute("return document.body.scrollHeight;", vec![])
            .await
            .map_err(HarvestError::Script)?;
        Ok(value.as_u64().unwrap_or(0))
    }

    async fn container_count(&self, selector: &str) -> Result<u64, HarvestError> {
        let value = self
            .client
            .execute(
                "return document.querySelectorAll(arguments[0]).length;",
                vec![json!(selector)],
            )
            .await
            .map_err(HarvestError::Script)?;
        Ok(value.as_u64().unwrap_or(0))
    }
}

/// Chrome capabilities for headless harvesting
fn chrome_capabilities(width: u32, height: u32) -> serde_json::map::Map<String, serde_json::Value> {
    let mut capabilities = serde_json::map::Map::new();
    capabilities.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "args": [
                "--headless=new",
                "--no-sandbox",
                "--disable-dev-shm-usage",
                format!("--window-size={},{}", width, height),
            ]
        }),
    );
    capabilities
}
