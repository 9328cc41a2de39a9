use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "linkharvest")]
#[command(about = "Collects product detail links from a lazily loaded listing page")]
#[command(version)]
pub struct Args {
    /// Listing page URL to harvest
    pub url: String,

    /// Container id prefix that marks a product card
    #[arg(long, default_value = "product-card")]
    pub id_prefix: String,

    /// Number of scroll cycles used to trigger lazy loading
    #[arg(short, long, default_value_t = 7)]
    pub scroll_cycles: u32,

    /// Seconds each scroll cycle waits for the page to grow
    #[arg(long, default_value_t = 2)]
    pub scroll_pause: u64,

    /// Seconds to wait for the initial render
    #[arg(long, default_value_t = 10)]
    pub load_timeout: u64,

    /// Browser window width in pixels
    #[arg(long, default_value_t = 1920)]
    pub window_width: u32,

    /// Browser window height in pixels
    #[arg(long, default_value_t = 1080)]
    pub window_height: u32,
}
