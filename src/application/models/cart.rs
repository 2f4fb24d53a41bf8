use crate::constants::DEFAULT_CART_QUANTITY;
use serde::{Deserialize, Serialize};

/// A line in the authenticated user's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unique identifier of the cart line
    #[serde(rename = "cartItemId")]
    pub cart_item_id: i64,
    /// Listing the line refers to
    #[serde(rename = "listingId")]
    pub listing_id: i64,
    /// Title of the listing
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Quantity in the cart
    pub quantity: u32,
    /// Price times quantity, computed by the backend
    #[serde(rename = "lineTotal")]
    pub line_total: f64,
    /// Cover image of the listing
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

fn default_quantity() -> u32 {
    DEFAULT_CART_QUANTITY
}

/// Payload for adding a listing to the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddCartItemRequest {
    /// Listing to add
    #[serde(rename = "listingId")]
    pub listing_id: i64,
    /// Quantity to add, defaulting to one
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl AddCartItemRequest {
    /// Creates a request for a single unit of the listing
    #[must_use]
    pub fn new(listing_id: i64) -> Self {
        Self {
            listing_id,
            quantity: DEFAULT_CART_QUANTITY,
        }
    }

    /// Sets the quantity
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Result of checking out the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutResponse {
    /// Identifiers of the orders created, one per seller
    #[serde(rename = "orderIds")]
    pub order_ids: Vec<i64>,
    /// Number of orders created
    #[serde(rename = "ordersCreated")]
    pub orders_created: u32,
    /// Total charged across all created orders
    #[serde(rename = "grandTotal")]
    pub grand_total: f64,
    /// Number of cart lines converted
    #[serde(rename = "itemsCount")]
    pub items_count: u32,
}
