use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use flat_rate::listing::FeatureSet;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the reference listings by score, ascending (default if no subcommand)
    Rank,
    /// Estimate a fair price for a new or hypothetical listing
    Estimate {
        /// Room count
        #[arg(long)]
        rooms: Option<String>,
        /// Construction year
        #[arg(long)]
        built_year: Option<String>,
        /// Condition label, e.g. "Good condition"
        #[arg(long)]
        condition: Option<String>,
        /// Number of floors (assumed 1 when omitted)
        #[arg(long)]
        floors: Option<String>,
        /// Total area, e.g. "85 m²"
        #[arg(long)]
        area: Option<String>,
    },
    /// Show the cheapest and dearest listings of the reference set
    Range,
}

#[derive(Parser, Debug)]
#[command(name = "flat-rate")]
#[command(about = "Fair price estimates for real-estate listings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/flat-rate/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Rank);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match flat_rate::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Check that a comparison set is configured
    if config.listings.is_empty() {
        eprintln!("No listings configured in config file.");
        eprintln!("Add listing ids to ~/.config/flat-rate/config.yaml:");
        eprintln!("  provider:");
        eprintln!("    base_url: \"https://www2.kv.ee/en\"");
        eprintln!("  listings:");
        eprintln!("    - \"3435688\"");
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Loaded {} listing ids from config ({})",
            config.listings.len(),
            config.provider.base_url
        );
    }

    // Build HTTP client
    let client = match flat_rate::listing::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    // Fetch the comparison set. A listing that fails to fetch or extract is
    // skipped; only losing all of them is fatal.
    let records = flat_rate::listing::fetch_records(
        &client,
        &config.provider.base_url,
        &config.listings,
        config.provider.delay_ms,
        cli.verbose,
    )
    .await;

    if records.is_empty() {
        eprintln!("All listings failed. Check your network connection and listing ids.");
        std::process::exit(EXIT_NETWORK);
    }

    if cli.verbose {
        eprintln!(
            "Reference set: {} of {} listings in {:?}",
            records.len(),
            config.listings.len(),
            start_time.elapsed()
        );
    }

    let use_colors = flat_rate::output::should_use_colors();

    match command {
        Commands::Rank => match flat_rate::rank(&records) {
            Ok(curve) => {
                println!("{}", flat_rate::output::format_ranked_table(&curve, use_colors));
            }
            Err(e) => {
                eprintln!("Ranking failed: {}", e);
                std::process::exit(EXIT_DATA);
            }
        },
        Commands::Estimate {
            rooms,
            built_year,
            condition,
            floors,
            area,
        } => {
            let query = FeatureSet {
                rooms,
                built_in_year: built_year,
                condition,
                number_of_floors: floors,
                total_area: area,
            };

            if cli.verbose {
                if let Ok(point) = flat_rate::valuation::calculate_points(&records, &query) {
                    eprintln!(
                        "Query scored {} points",
                        flat_rate::output::format_point(point)
                    );
                }
            }

            match flat_rate::estimate_price(&records, &query) {
                Ok(estimate) => {
                    println!("{}", flat_rate::output::format_price(estimate));
                }
                Err(e) => {
                    eprintln!("Estimate failed: {}", e);
                    std::process::exit(EXIT_DATA);
                }
            }
        }
        Commands::Range => match flat_rate::price_range(&records) {
            Ok(range) => {
                println!("{}", flat_rate::output::format_range(&range, use_colors));
            }
            Err(e) => {
                eprintln!("Range scan failed: {}", e);
                std::process::exit(EXIT_DATA);
            }
        },
    }

    std::process::exit(EXIT_SUCCESS);
}
