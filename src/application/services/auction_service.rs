use crate::application::interfaces::auction::AuctionService;
use crate::application::models::auction::{Auction, CreateAuctionRequest, PlaceBidRequest};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

const AUCTIONS_BASE: &str = "/api/auctions";

/// Implementation of the auction service
pub struct AuctionServiceImpl<T: SwaplyHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: SwaplyHttpClient> AuctionServiceImpl<T> {
    /// Creates a new instance of the auction service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> AuctionService for AuctionServiceImpl<T> {
    async fn get_active_auctions(&self) -> Result<Vec<Auction>, AppError> {
        self.client
            .request::<(), Vec<Auction>>(Method::GET, &format!("{AUCTIONS_BASE}/active"), None)
            .await
    }

    async fn get_auction(&self, auction_id: i64) -> Result<Auction, AppError> {
        let path = format!("{AUCTIONS_BASE}/{auction_id}");
        self.client
            .request::<(), Auction>(Method::GET, &path, None)
            .await
    }

    async fn create_auction(
        &self,
        user_id: i64,
        request: &CreateAuctionRequest,
    ) -> Result<Auction, AppError> {
        let path = format!("{AUCTIONS_BASE}/user/{user_id}");
        info!(
            "Opening auction on listing {} for user {}",
            request.listing_id, user_id
        );
        self.client
            .request::<CreateAuctionRequest, Auction>(Method::POST, &path, Some(request))
            .await
    }

    async fn place_bid(
        &self,
        auction_id: i64,
        user_id: i64,
        amount: f64,
    ) -> Result<Auction, AppError> {
        let path = format!("{AUCTIONS_BASE}/{auction_id}/bid/user/{user_id}");
        let body = PlaceBidRequest { amount };
        info!(
            "Placing bid of {} on auction {} for user {}",
            amount, auction_id, user_id
        );
        self.client
            .request::<PlaceBidRequest, Auction>(Method::POST, &path, Some(&body))
            .await
    }
}
