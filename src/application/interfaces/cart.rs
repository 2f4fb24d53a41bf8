use crate::application::models::cart::{AddCartItemRequest, CartItem, CheckoutResponse};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the cart service
///
/// The cart belongs to the authenticated user; every operation requires a
/// stored token.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Gets the current cart contents
    async fn get_cart(&self) -> Result<Vec<CartItem>, AppError>;

    /// Adds a listing to the cart
    async fn add_to_cart(&self, request: &AddCartItemRequest) -> Result<CartItem, AppError>;

    /// Removes one cart line by its identifier
    async fn remove_item(&self, cart_item_id: i64) -> Result<(), AppError>;

    /// Removes every cart line referring to the given listing
    async fn remove_by_listing(&self, listing_id: i64) -> Result<(), AppError>;

    /// Empties the cart
    async fn clear_cart(&self) -> Result<(), AppError>;

    /// Converts the cart into orders, one per seller
    async fn checkout(&self) -> Result<CheckoutResponse, AppError>;
}
