use crate::application::models::file::FileUploadResponse;
use crate::application::models::listing::{
    Category, CreateListingRequest, Listing, UpdateListingRequest,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the listing service
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Gets every listing currently in ACTIVE state
    async fn get_active_listings(&self) -> Result<Vec<Listing>, AppError>;

    /// Gets the most recently created listings
    ///
    /// # Arguments
    /// * `limit` - Maximum number of listings to return
    async fn get_latest_listings(&self, limit: u32) -> Result<Vec<Listing>, AppError>;

    /// Gets the most viewed listings
    async fn get_popular_listings(&self, limit: u32) -> Result<Vec<Listing>, AppError>;

    /// Gets listings whose price falls within the given inclusive range
    async fn get_listings_by_price_range(
        &self,
        min: f64,
        max: f64,
        limit: u32,
    ) -> Result<Vec<Listing>, AppError>;

    /// Gets a single listing by its identifier
    async fn get_listing(&self, listing_id: i64) -> Result<Listing, AppError>;

    /// Gets every listing created by the given user
    async fn get_listings_by_user(&self, user_id: i64) -> Result<Vec<Listing>, AppError>;

    /// Gets every listing filed under the given category
    async fn get_listings_by_category(&self, category: Category)
    -> Result<Vec<Listing>, AppError>;

    /// Searches listings by keyword over title and description
    async fn search_listings(&self, keyword: &str) -> Result<Vec<Listing>, AppError>;

    /// Creates a listing owned by the given user
    async fn create_listing(
        &self,
        user_id: i64,
        request: &CreateListingRequest,
    ) -> Result<Listing, AppError>;

    /// Updates an existing listing
    async fn update_listing(
        &self,
        listing_id: i64,
        request: &UpdateListingRequest,
    ) -> Result<Listing, AppError>;

    /// Deletes a listing on behalf of its owner
    async fn delete_listing(&self, listing_id: i64, user_id: i64) -> Result<(), AppError>;

    /// Marks a listing as sold on behalf of its owner
    async fn mark_as_sold(&self, listing_id: i64, user_id: i64) -> Result<(), AppError>;

    /// Uploads an image and returns where the backend stored it
    ///
    /// The bytes are sent as a multipart form under the field name `file`;
    /// the multipart boundary is assigned by the HTTP client.
    async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<FileUploadResponse, AppError>;
}
