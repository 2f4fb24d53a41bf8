use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created, awaiting fulfilment
    Pending,
    /// Fulfilled
    Completed,
    /// Cancelled by either party
    Cancelled,
}

/// An order as returned by the backend
///
/// The caller sees the order either as buyer or as seller; the backend
/// enforces that nobody else can fetch it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique identifier of the order
    #[serde(rename = "orderId")]
    pub order_id: i64,
    /// Identifier of the buyer
    #[serde(rename = "buyerId")]
    pub buyer_id: i64,
    /// Username of the buyer
    #[serde(rename = "buyerName")]
    pub buyer_name: Option<String>,
    /// Identifier of the seller
    #[serde(rename = "sellerId")]
    pub seller_id: Option<i64>,
    /// Username of the seller
    #[serde(rename = "sellerName")]
    pub seller_name: Option<String>,
    /// Listing the order was placed for
    #[serde(rename = "listingId")]
    pub listing_id: i64,
    /// Title of the listing at order time
    #[serde(rename = "listingTitle")]
    pub listing_title: Option<String>,
    /// Total amount charged
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    /// Quantity ordered
    pub quantity: u32,
    /// Current lifecycle state
    pub status: OrderStatus,
    /// Free-form note attached by the seller
    pub notes: Option<String>,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: Option<NaiveDateTime>,
    /// Last-update timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload for updating an order's state or note
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateOrderRequest {
    /// New lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// New note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
