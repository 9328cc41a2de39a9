use clap::Parser;
use linkharvest::Listing;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Harvesting product links from: {}", args.url);

    // Print WebDriver info message
    println!("Note: Harvesting requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    // Create a Listing builder with the specified parameters
    let listing = Listing::new(&args.url)
        .with_id_prefix(&args.id_prefix)
        .with_scroll_cycles(args.scroll_cycles)
        .with_scroll_pause(args.scroll_pause)
        .with_load_timeout(args.load_timeout)
        .with_window_size(args.window_width, args.window_height);

    let start_time = std::time::Instant::now();

    // Run the harvest and report the collected links
    let report = match listing.harvest().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Harvest failed: {}", e);
            std::process::exit(1);
        }
    };

    report.print();

    let duration = start_time.elapsed();
    ::log::info!(
        "Harvest complete - {} links, {} containers skipped, in {:.2} seconds",
        report.links.len(),
        report.skipped.len(),
        duration.as_secs_f64()
    );
}
