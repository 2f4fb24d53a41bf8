use crate::services::common::{auction_json, test_transport};
use mockito::{Matcher, Server};
use serde_json::json;
use swaply_client::error::AppError;
use swaply_client::prelude::*;
use tokio_test::block_on;

#[test]
fn place_bid_posts_amount_under_bidder_path() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/auctions/7/bid/user/3")
        .match_body(Matcher::Json(json!({"amount": 100.0})))
        .with_status(200)
        .with_body(auction_json(7, 100.0))
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = AuctionServiceImpl::new(config, client);

    let auction = block_on(service.place_bid(7, 3, 100.0)).expect("bid should succeed");
    assert_eq!(auction.auction_id, 7);
    assert_eq!(auction.current_price, 100.0);
    mock.assert();
}

#[test]
fn bid_on_ended_auction_surfaces_conflict() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/auctions/7/bid/user/3")
        .with_status(409)
        .with_body("Auction already ended")
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = AuctionServiceImpl::new(config, client);

    let err = block_on(service.place_bid(7, 3, 100.0)).err().expect("should be Err");
    match err {
        AppError::Conflict(msg) => assert!(msg.contains("already ended")),
        other => panic!("Unexpected error: {other:?}"),
    }
    mock.assert();
}

#[test]
fn active_auctions_and_single_fetch_use_auction_paths() {
    let mut server = Server::new();
    let active = server
        .mock("GET", "/api/auctions/active")
        .with_status(200)
        .with_body(format!("[{}]", auction_json(1, 55.0)))
        .create();
    let single = server
        .mock("GET", "/api/auctions/1")
        .with_status(200)
        .with_body(auction_json(1, 55.0))
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = AuctionServiceImpl::new(config, client);

    let auctions = block_on(service.get_active_auctions()).expect("active should succeed");
    assert_eq!(auctions.len(), 1);
    assert_eq!(auctions[0].status, AuctionStatus::Active);

    let auction = block_on(service.get_auction(1)).expect("get should succeed");
    assert!(auction.highest_bidder_id.is_none());
    active.assert();
    single.assert();
}

#[test]
fn create_auction_posts_listing_and_schedule() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/auctions/user/2")
        .match_body(Matcher::Json(json!({
            "listingId": 3,
            "startingPrice": 50.0,
            "minIncrement": 5.0,
            "endTime": "2025-11-01T18:00:00"
        })))
        .with_status(201)
        .with_body(auction_json(10, 50.0))
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = AuctionServiceImpl::new(config, client);

    let request = CreateAuctionRequest {
        listing_id: 3,
        starting_price: 50.0,
        min_increment: 5.0,
        end_time: "2025-11-01T18:00:00".parse().expect("valid timestamp"),
    };
    let auction = block_on(service.create_auction(2, &request)).expect("create should succeed");
    assert_eq!(auction.auction_id, 10);
    mock.assert();
}
