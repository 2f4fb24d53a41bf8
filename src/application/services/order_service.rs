use crate::application::interfaces::order::OrderService;
use crate::application::models::order::{Order, UpdateOrderRequest};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{info, warn};

const ORDERS_BASE: &str = "/api/orders";

/// Implementation of the order service
pub struct OrderServiceImpl<T: SwaplyHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: SwaplyHttpClient> OrderServiceImpl<T> {
    /// Creates a new instance of the order service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> OrderService for OrderServiceImpl<T> {
    async fn buyer_orders(&self) -> Result<Vec<Order>, AppError> {
        self.client
            .request::<(), Vec<Order>>(Method::GET, &format!("{ORDERS_BASE}/buyer"), None)
            .await
    }

    async fn seller_orders(&self) -> Result<Vec<Order>, AppError> {
        self.client
            .request::<(), Vec<Order>>(Method::GET, &format!("{ORDERS_BASE}/seller"), None)
            .await
    }

    async fn get_order(&self, order_id: i64) -> Result<Order, AppError> {
        let path = format!("{ORDERS_BASE}/{order_id}");
        self.client
            .request::<(), Order>(Method::GET, &path, None)
            .await
    }

    /// Updates an order, preferring PATCH
    ///
    /// Some deployments sit behind proxies that reject PATCH outright. When
    /// `patch_put_fallback` is enabled and the PATCH comes back 405/501, the
    /// same payload is re-sent once as PUT to the same path. Validation,
    /// permission and not-found failures are never retried.
    async fn update_order(
        &self,
        order_id: i64,
        request: &UpdateOrderRequest,
    ) -> Result<Order, AppError> {
        let path = format!("{ORDERS_BASE}/{order_id}");

        match self
            .client
            .request::<UpdateOrderRequest, Order>(Method::PATCH, &path, Some(request))
            .await
        {
            Ok(order) => Ok(order),
            Err(e) if self.config.patch_put_fallback && e.is_method_rejected() => {
                warn!("PATCH rejected for order {}, retrying as PUT", order_id);
                self.client
                    .request::<UpdateOrderRequest, Order>(Method::PUT, &path, Some(request))
                    .await
            }
            Err(e) => Err(e),
        }
    }

    async fn delete_order(&self, order_id: i64) -> Result<(), AppError> {
        let path = format!("{ORDERS_BASE}/{order_id}");
        info!("Deleting order {}", order_id);
        self.client
            .request_no_content::<()>(Method::DELETE, &path, None)
            .await
    }
}
