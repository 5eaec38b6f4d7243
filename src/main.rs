use clap::Parser;
use sellerscope::utils::{logger, validation::Validate};
use sellerscope::{
    render, CliConfig, ConfigProvider, HttpListingStore, ListingStore, ProfileAggregator,
    SellerView, StaticListingStore, UiState,
};

async fn show_seller<S: ListingStore>(store: S, config: &CliConfig) -> bool {
    let aggregator = ProfileAggregator::with_limit(store, config.listing_limit());
    let mut view = SellerView::new(aggregator);

    let state = view.open(&config.seller_id).await;
    println!("{}", render(state));

    matches!(state, UiState::Loaded(_) | UiState::Empty)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sellerscope CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let ok = if config.use_sample_data() {
        tracing::info!("Using built-in sample data");
        show_seller(StaticListingStore::sample(), &config).await
    } else {
        tracing::info!("Fetching from backend at {}", config.backend_url());
        show_seller(HttpListingStore::new(config.backend_url()), &config).await
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
