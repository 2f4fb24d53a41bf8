use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;

/// Merchandise category a listing is filed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Consumer electronics
    Electronics,
    /// Books and textbooks
    Books,
    /// Furniture
    Furniture,
    /// Clothing and apparel
    Clothing,
    /// Sports equipment
    Sports,
    /// Daily necessities
    Necessities,
    /// Toys and games
    ToysGames,
    /// Anything else
    Other,
}

impl Category {
    /// Wire name of the category, as it appears in URLs and JSON
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Category::Electronics => "ELECTRONICS",
            Category::Books => "BOOKS",
            Category::Furniture => "FURNITURE",
            Category::Clothing => "CLOTHING",
            Category::Sports => "SPORTS",
            Category::Necessities => "NECESSITIES",
            Category::ToysGames => "TOYS_GAMES",
            Category::Other => "OTHER",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::Furniture => "Furniture",
            Category::Clothing => "Clothing",
            Category::Sports => "Sports",
            Category::Necessities => "Necessities",
            Category::ToysGames => "Toys & Games",
            Category::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// Physical condition declared by the seller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingCondition {
    /// Unused
    New,
    /// Barely used
    LikeNew,
    /// Used, fully functional
    Good,
    /// Visible wear
    Fair,
    /// Heavy wear
    Poor,
}

impl Display for ListingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListingCondition::New => "New",
            ListingCondition::LikeNew => "Like New",
            ListingCondition::Good => "Good",
            ListingCondition::Fair => "Fair",
            ListingCondition::Poor => "Poor",
        };
        write!(f, "{name}")
    }
}

/// Lifecycle state of a listing, owned by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    /// Visible and purchasable
    Active,
    /// Hidden by the seller
    Inactive,
    /// Awaiting moderation
    Pending,
    /// Past its expiry date
    Expired,
    /// Sold
    Sold,
    /// Soft-deleted
    Deleted,
}

/// A marketplace listing as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// Unique identifier of the listing
    #[serde(rename = "listingId")]
    pub listing_id: i64,
    /// Listing title
    pub title: String,
    /// Free-form description
    pub description: Option<String>,
    /// Asking price
    pub price: f64,
    /// Merchandise category
    pub category: Category,
    /// Declared condition
    pub condition: ListingCondition,
    /// URL of the cover image, when one was uploaded
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Current lifecycle state
    pub status: ListingStatus,
    /// Identifier of the seller
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Username of the seller
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    /// Creation timestamp
    #[serde(rename = "createdDate")]
    pub created_date: Option<NaiveDateTime>,
    /// Last-update timestamp
    #[serde(rename = "updatedDate")]
    pub updated_date: Option<NaiveDateTime>,
}

/// Payload for creating a new listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateListingRequest {
    /// Listing title
    pub title: String,
    /// Free-form description
    pub description: Option<String>,
    /// Asking price
    pub price: f64,
    /// Merchandise category
    pub category: Category,
    /// Declared condition
    pub condition: ListingCondition,
    /// URL of an already-uploaded cover image
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Payload for updating an existing listing; omitted fields are left
/// untouched by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateListingRequest {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New asking price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// New condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ListingCondition>,
    /// New cover image URL
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
