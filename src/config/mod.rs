use crate::core::ConfigProvider;
use crate::domain::model::MAX_LISTINGS_PER_KIND;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sellerscope")]
#[command(about = "Seller profile viewer for the car and parts marketplace")]
pub struct CliConfig {
    /// Seller id to look up
    pub seller_id: String,

    #[arg(long, default_value = "http://localhost:3000")]
    pub backend_url: String,

    #[arg(long, default_value = "5")]
    pub listing_limit: usize,

    #[arg(long, help = "Use the built-in sample data instead of the backend")]
    pub sample: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn listing_limit(&self) -> usize {
        self.listing_limit
    }

    fn use_sample_data(&self) -> bool {
        self.sample
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("seller_id", &self.seller_id)?;
        if !self.sample {
            validation::validate_url("backend_url", &self.backend_url)?;
        }
        validation::validate_range("listing_limit", self.listing_limit, 1, MAX_LISTINGS_PER_KIND)?;
        Ok(())
    }
}
