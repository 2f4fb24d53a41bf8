use crate::application::models::auction::{Auction, CreateAuctionRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the auction service
#[async_trait]
pub trait AuctionService: Send + Sync {
    /// Gets every auction currently accepting bids
    async fn get_active_auctions(&self) -> Result<Vec<Auction>, AppError>;

    /// Gets a single auction by its identifier
    async fn get_auction(&self, auction_id: i64) -> Result<Auction, AppError>;

    /// Opens an auction on a listing owned by the given user
    async fn create_auction(
        &self,
        user_id: i64,
        request: &CreateAuctionRequest,
    ) -> Result<Auction, AppError>;

    /// Places a bid on behalf of the given user
    ///
    /// The backend rejects bids below the current price plus the minimum
    /// increment (400) and bids on ended auctions (409); both surface as
    /// their respective [`AppError`] variants.
    async fn place_bid(
        &self,
        auction_id: i64,
        user_id: i64,
        amount: f64,
    ) -> Result<Auction, AppError>;
}
