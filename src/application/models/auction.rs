use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an auction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStatus {
    /// Accepting bids
    Active,
    /// Past its end time
    Ended,
}

/// An auction as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Auction {
    /// Unique identifier of the auction
    #[serde(rename = "auctionId")]
    pub auction_id: i64,
    /// Listing being auctioned
    #[serde(rename = "listingId")]
    pub listing_id: i64,
    /// Title of the auctioned listing
    pub title: String,
    /// Cover image of the auctioned listing
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Opening price
    #[serde(rename = "startingPrice")]
    pub starting_price: f64,
    /// Highest bid so far, or the starting price when no bids exist
    #[serde(rename = "currentPrice")]
    pub current_price: f64,
    /// Minimum amount a new bid must exceed the current price by
    #[serde(rename = "minIncrement")]
    pub min_increment: f64,
    /// Current lifecycle state
    pub status: AuctionStatus,
    /// Identifier of the seller
    #[serde(rename = "sellerId")]
    pub seller_id: i64,
    /// Username of the seller
    #[serde(rename = "sellerUsername")]
    pub seller_username: Option<String>,
    /// Avatar of the seller
    #[serde(rename = "sellerProfileImageUrl")]
    pub seller_profile_image_url: Option<String>,
    /// Identifier of the current highest bidder, when any bid exists
    #[serde(rename = "highestBidderId")]
    pub highest_bidder_id: Option<i64>,
    /// Username of the current highest bidder
    #[serde(rename = "highestBidderUsername")]
    pub highest_bidder_username: Option<String>,
    /// Time at which the auction closes
    #[serde(rename = "endTime")]
    pub end_time: NaiveDateTime,
}

/// Payload for opening a new auction on a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAuctionRequest {
    /// Listing to auction
    #[serde(rename = "listingId")]
    pub listing_id: i64,
    /// Opening price
    #[serde(rename = "startingPrice")]
    pub starting_price: f64,
    /// Minimum bid increment
    #[serde(rename = "minIncrement")]
    pub min_increment: f64,
    /// Closing time
    #[serde(rename = "endTime")]
    pub end_time: NaiveDateTime,
}

/// Payload for placing a bid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceBidRequest {
    /// Bid amount
    pub amount: f64,
}
