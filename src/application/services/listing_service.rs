use crate::application::interfaces::listing::ListingService;
use crate::application::models::file::FileUploadResponse;
use crate::application::models::listing::{
    Category, CreateListingRequest, Listing, UpdateListingRequest,
};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use tracing::{debug, info};

const LISTINGS_BASE: &str = "/api/listings";
const FILES_BASE: &str = "/api/files";

/// Implementation of the listing service
pub struct ListingServiceImpl<T: SwaplyHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: SwaplyHttpClient> ListingServiceImpl<T> {
    /// Creates a new instance of the listing service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> ListingService for ListingServiceImpl<T> {
    async fn get_active_listings(&self) -> Result<Vec<Listing>, AppError> {
        self.client
            .request::<(), Vec<Listing>>(Method::GET, &format!("{LISTINGS_BASE}/active"), None)
            .await
    }

    async fn get_latest_listings(&self, limit: u32) -> Result<Vec<Listing>, AppError> {
        let path = format!("{LISTINGS_BASE}/latest?limit={limit}");
        self.client
            .request::<(), Vec<Listing>>(Method::GET, &path, None)
            .await
    }

    async fn get_popular_listings(&self, limit: u32) -> Result<Vec<Listing>, AppError> {
        let path = format!("{LISTINGS_BASE}/popular?limit={limit}");
        self.client
            .request::<(), Vec<Listing>>(Method::GET, &path, None)
            .await
    }

    async fn get_listings_by_price_range(
        &self,
        min: f64,
        max: f64,
        limit: u32,
    ) -> Result<Vec<Listing>, AppError> {
        let path = format!("{LISTINGS_BASE}/price-range?min={min}&max={max}&limit={limit}");
        debug!("Fetching listings in price range [{}, {}]", min, max);
        self.client
            .request::<(), Vec<Listing>>(Method::GET, &path, None)
            .await
    }

    async fn get_listing(&self, listing_id: i64) -> Result<Listing, AppError> {
        let path = format!("{LISTINGS_BASE}/{listing_id}");
        self.client
            .request::<(), Listing>(Method::GET, &path, None)
            .await
    }

    async fn get_listings_by_user(&self, user_id: i64) -> Result<Vec<Listing>, AppError> {
        let path = format!("{LISTINGS_BASE}/user/{user_id}");
        self.client
            .request::<(), Vec<Listing>>(Method::GET, &path, None)
            .await
    }

    async fn get_listings_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Listing>, AppError> {
        let path = format!("{LISTINGS_BASE}/category/{}", category.wire_name());
        self.client
            .request::<(), Vec<Listing>>(Method::GET, &path, None)
            .await
    }

    async fn search_listings(&self, keyword: &str) -> Result<Vec<Listing>, AppError> {
        let path = format!(
            "{LISTINGS_BASE}/search?keyword={}",
            urlencoding::encode(keyword)
        );
        info!("Searching listings with keyword: {}", keyword);
        self.client
            .request::<(), Vec<Listing>>(Method::GET, &path, None)
            .await
    }

    async fn create_listing(
        &self,
        user_id: i64,
        request: &CreateListingRequest,
    ) -> Result<Listing, AppError> {
        let path = format!("{LISTINGS_BASE}/user/{user_id}");
        info!("Creating listing '{}' for user {}", request.title, user_id);
        self.client
            .request::<CreateListingRequest, Listing>(Method::POST, &path, Some(request))
            .await
    }

    async fn update_listing(
        &self,
        listing_id: i64,
        request: &UpdateListingRequest,
    ) -> Result<Listing, AppError> {
        let path = format!("{LISTINGS_BASE}/{listing_id}");
        self.client
            .request::<UpdateListingRequest, Listing>(Method::PUT, &path, Some(request))
            .await
    }

    async fn delete_listing(&self, listing_id: i64, user_id: i64) -> Result<(), AppError> {
        let path = format!("{LISTINGS_BASE}/{listing_id}/user/{user_id}");
        info!("Deleting listing {} for user {}", listing_id, user_id);
        self.client
            .request_no_content::<()>(Method::DELETE, &path, None)
            .await
    }

    async fn mark_as_sold(&self, listing_id: i64, user_id: i64) -> Result<(), AppError> {
        let path = format!("{LISTINGS_BASE}/{listing_id}/sold/user/{user_id}");
        self.client
            .request_no_content::<()>(Method::PATCH, &path, None)
            .await
    }

    async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<FileUploadResponse, AppError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        info!("Uploading image '{}'", file_name);
        self.client.upload(&format!("{FILES_BASE}/upload"), form).await
    }
}
