use crate::core::{ListingKind, ListingStore, RawRow};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

const PROFILES_TABLE: &str = "profiles";

/// `ListingStore` over the managed backend's REST interface. Filtering is
/// pushed to the backend with PostgREST-style predicates (`user_id=eq.X`,
/// `is_active=eq.true`, `limit=n`); bodies come back as JSON arrays of rows.
#[derive(Debug, Clone)]
pub struct HttpListingStore {
    client: Client,
    base_url: String,
}

impl HttpListingStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn table_for(kind: ListingKind) -> &'static str {
        match kind {
            ListingKind::Vehicle => "cars",
            ListingKind::Part => "parts",
        }
    }

    async fn fetch_rows(&self, table: &str, query: &[(&str, String)]) -> Result<Vec<RawRow>> {
        let url = format!("{}/{}", self.base_url, table);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let rows: Vec<RawRow> = response.json().await?;
        tracing::debug!("{} returned {} rows", table, rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl ListingStore for HttpListingStore {
    async fn profile_rows(&self, seller_id: &str) -> Result<Vec<RawRow>> {
        self.fetch_rows(
            PROFILES_TABLE,
            &[
                ("user_id", format!("eq.{}", seller_id)),
                ("select", "*".to_string()),
            ],
        )
        .await
    }

    async fn active_listings(
        &self,
        kind: ListingKind,
        seller_id: &str,
        limit: usize,
    ) -> Result<Vec<RawRow>> {
        self.fetch_rows(
            Self::table_for(kind),
            &[
                ("seller_id", format!("eq.{}", seller_id)),
                ("is_active", "eq.true".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }
}
