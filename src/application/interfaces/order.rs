use crate::application::models::order::{Order, UpdateOrderRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the order service
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Gets the authenticated user's orders as buyer
    async fn buyer_orders(&self) -> Result<Vec<Order>, AppError>;

    /// Gets the authenticated user's orders as seller
    async fn seller_orders(&self) -> Result<Vec<Order>, AppError>;

    /// Gets a single order; the backend only serves it to its buyer or seller
    async fn get_order(&self, order_id: i64) -> Result<Order, AppError>;

    /// Updates an order's status or note
    ///
    /// Issues PATCH first. When the PATCH-to-PUT compatibility fallback is
    /// enabled and the PATCH is rejected with 405 or 501, the update is
    /// retried once as PUT with the same payload and path. Every other
    /// failure surfaces unchanged so validation and permission errors are
    /// never masked.
    async fn update_order(
        &self,
        order_id: i64,
        request: &UpdateOrderRequest,
    ) -> Result<Order, AppError>;

    /// Deletes a completed or cancelled order
    async fn delete_order(&self, order_id: i64) -> Result<(), AppError>;
}
