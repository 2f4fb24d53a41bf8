// Common utilities for service tests

use std::sync::Arc;
use swaply_client::prelude::*;

/// Creates a config, token store and transport pointed at a mock server
pub fn test_transport(server_url: &str) -> (Arc<Config>, TokenStore, Arc<SwaplyHttpClientImpl>) {
    let config = Arc::new(Config::with_base_url(server_url));
    let tokens = TokenStore::new();
    let client = Arc::new(
        SwaplyHttpClientImpl::new(config.clone(), tokens.clone())
            .expect("Failed to create HTTP client"),
    );
    (config, tokens, client)
}

/// Minimal listing payload the way the backend serializes it
pub fn listing_json(listing_id: i64, title: &str) -> String {
    format!(
        r#"{{"listingId":{listing_id},"title":"{title}","description":"desc","price":25.5,"category":"BOOKS","condition":"GOOD","imageUrl":null,"status":"ACTIVE","userId":9,"userName":"sam","createdDate":"2025-10-19T10:30:00","updatedDate":null}}"#
    )
}

/// Minimal auction payload the way the backend serializes it
pub fn auction_json(auction_id: i64, current_price: f64) -> String {
    format!(
        r#"{{"auctionId":{auction_id},"listingId":3,"title":"Road bike","imageUrl":null,"startingPrice":50.0,"currentPrice":{current_price},"minIncrement":5.0,"status":"ACTIVE","sellerId":2,"sellerUsername":"kai","sellerProfileImageUrl":null,"highestBidderId":null,"highestBidderUsername":null,"endTime":"2025-11-01T18:00:00"}}"#
    )
}

/// Minimal order payload the way the backend serializes it
pub fn order_json(order_id: i64, status: &str) -> String {
    format!(
        r#"{{"orderId":{order_id},"buyerId":4,"buyerName":"ana","sellerId":9,"sellerName":"sam","listingId":7,"listingTitle":"Desk lamp","totalAmount":40.0,"quantity":2,"status":"{status}","notes":null,"createdAt":"2025-10-20T09:00:00","updatedAt":null}}"#
    )
}

/// Minimal user payload the way the backend serializes it
pub fn user_json(user_id: i64, user_name: &str) -> String {
    format!(
        r#"{{"userId":{user_id},"userName":"{user_name}","email":"{user_name}@example.com","profileImageUrl":null,"createdAt":null,"updatedAt":null,"isActive":true,"role":"USER"}}"#
    )
}
