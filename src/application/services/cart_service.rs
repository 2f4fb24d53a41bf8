use crate::application::interfaces::cart::CartService;
use crate::application::models::cart::{AddCartItemRequest, CartItem, CheckoutResponse};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

const CART_BASE: &str = "/api/cart";

/// Implementation of the cart service
pub struct CartServiceImpl<T: SwaplyHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: SwaplyHttpClient> CartServiceImpl<T> {
    /// Creates a new instance of the cart service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> CartService for CartServiceImpl<T> {
    async fn get_cart(&self) -> Result<Vec<CartItem>, AppError> {
        self.client
            .request::<(), Vec<CartItem>>(Method::GET, CART_BASE, None)
            .await
    }

    async fn add_to_cart(&self, request: &AddCartItemRequest) -> Result<CartItem, AppError> {
        self.client
            .request::<AddCartItemRequest, CartItem>(Method::POST, CART_BASE, Some(request))
            .await
    }

    async fn remove_item(&self, cart_item_id: i64) -> Result<(), AppError> {
        let path = format!("{CART_BASE}/{cart_item_id}");
        self.client
            .request_no_content::<()>(Method::DELETE, &path, None)
            .await
    }

    async fn remove_by_listing(&self, listing_id: i64) -> Result<(), AppError> {
        let path = format!("{CART_BASE}/listing/{listing_id}");
        self.client
            .request_no_content::<()>(Method::DELETE, &path, None)
            .await
    }

    async fn clear_cart(&self) -> Result<(), AppError> {
        self.client
            .request_no_content::<()>(Method::POST, &format!("{CART_BASE}/clear"), None)
            .await
    }

    async fn checkout(&self) -> Result<CheckoutResponse, AppError> {
        info!("Checking out cart");
        self.client
            .request::<(), CheckoutResponse>(Method::POST, &format!("{CART_BASE}/checkout"), None)
            .await
    }
}
