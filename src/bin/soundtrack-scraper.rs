use clap::Parser;
use soundtrack_scraper::{
    session::prompt_show_name, ChromiumPage, ConsoleOperator, PairingStrategy, ScraperConfig,
    SoundtrackScraper,
};
use std::time::Duration;

/// Scrape a TV show season's soundtrack from its episode pages
#[derive(Parser)]
#[command(
    name = "soundtrack-scraper",
    about = "Scrape a TV show season's soundtrack from its episode pages",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long)]
    verbose: bool,

    /// Run the browser with a visible window
    #[arg(long)]
    show_browser: bool,

    /// Seconds to wait for each page element
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Pair songs with artists by shared track row instead of by position
    #[arg(long)]
    structural: bool,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let pairing = if args.structural {
        PairingStrategy::Structural
    } else {
        PairingStrategy::Positional
    };
    let config = ScraperConfig::new()
        .with_headless(!args.show_browser)
        .with_element_timeout(Duration::from_secs(args.timeout))
        .with_pairing(pairing);

    if let Err(e) = config.validate() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    let mut operator = ConsoleOperator::new();
    let show = match prompt_show_name(&mut operator) {
        Ok(show) => show,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let page = match ChromiumPage::launch(&config).await {
        Ok(page) => page,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let scraper = match SoundtrackScraper::new(page, config) {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    match scraper.run(&show, &mut operator).await {
        Ok(run) => {
            if let Err(e) = run.write_report(&mut std::io::stdout()) {
                eprintln!("❌ Failed to print playlist: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("❌ Scrape failed: {e}");
            std::process::exit(1);
        }
    }
}
