use crate::services::common::{listing_json, test_transport};
use mockito::{Matcher, Server};
use serde_json::json;
use swaply_client::prelude::*;
use tokio_test::block_on;

#[test]
fn get_listing_issues_get_on_listing_path_with_no_body() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/listings/42")
        .match_body(Matcher::Missing)
        .with_status(200)
        .with_body(listing_json(42, "Calculus textbook"))
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = ListingServiceImpl::new(config, client);

    let listing = block_on(service.get_listing(42)).expect("should fetch listing");
    assert_eq!(listing.listing_id, 42);
    assert_eq!(listing.title, "Calculus textbook");
    assert_eq!(listing.category, Category::Books);
    assert_eq!(listing.status, ListingStatus::Active);
    mock.assert();
}

#[test]
fn feeds_pass_their_limits_as_query_params() {
    let mut server = Server::new();
    let latest = server
        .mock("GET", "/api/listings/latest?limit=20")
        .with_status(200)
        .with_body(format!("[{}]", listing_json(1, "One")))
        .create();
    let popular = server
        .mock("GET", "/api/listings/popular?limit=5")
        .with_status(200)
        .with_body("[]")
        .create();
    let range = server
        .mock("GET", "/api/listings/price-range?min=10&max=99.5&limit=50")
        .with_status(200)
        .with_body("[]")
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = ListingServiceImpl::new(config, client);

    let result = block_on(service.get_latest_listings(20)).expect("latest should succeed");
    assert_eq!(result.len(), 1);
    block_on(service.get_popular_listings(5)).expect("popular should succeed");
    block_on(service.get_listings_by_price_range(10.0, 99.5, 50))
        .expect("price range should succeed");

    latest.assert();
    popular.assert();
    range.assert();
}

#[test]
fn create_listing_posts_payload_under_owner_path() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/listings/user/9")
        .match_body(Matcher::Json(json!({
            "title": "Calculus textbook",
            "description": "Barely opened",
            "price": 25.5,
            "category": "BOOKS",
            "condition": "LIKE_NEW"
        })))
        .with_status(201)
        .with_body(listing_json(77, "Calculus textbook"))
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = ListingServiceImpl::new(config, client);

    let request = CreateListingRequest {
        title: "Calculus textbook".to_string(),
        description: Some("Barely opened".to_string()),
        price: 25.5,
        category: Category::Books,
        condition: ListingCondition::LikeNew,
        image_url: None,
    };
    let created = block_on(service.create_listing(9, &request)).expect("create should succeed");
    assert_eq!(created.listing_id, 77);
    mock.assert();
}

#[test]
fn update_listing_puts_to_listing_path() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/api/listings/42")
        .match_body(Matcher::Json(json!({"price": 19.0})))
        .with_status(200)
        .with_body(listing_json(42, "Calculus textbook"))
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = ListingServiceImpl::new(config, client);

    let request = UpdateListingRequest {
        price: Some(19.0),
        ..Default::default()
    };
    block_on(service.update_listing(42, &request)).expect("update should succeed");
    mock.assert();
}

#[test]
fn delete_and_mark_sold_target_owner_scoped_paths() {
    let mut server = Server::new();
    let delete = server
        .mock("DELETE", "/api/listings/42/user/9")
        .with_status(204)
        .create();
    let sold = server
        .mock("PATCH", "/api/listings/42/sold/user/9")
        .with_status(200)
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = ListingServiceImpl::new(config, client);

    block_on(service.delete_listing(42, 9)).expect("delete should succeed");
    block_on(service.mark_as_sold(42, 9)).expect("mark sold should succeed");
    delete.assert();
    sold.assert();
}

#[test]
fn category_and_search_paths_use_wire_names() {
    let mut server = Server::new();
    let category = server
        .mock("GET", "/api/listings/category/TOYS_GAMES")
        .with_status(200)
        .with_body("[]")
        .create();
    let search = server
        .mock("GET", "/api/listings/search?keyword=road%20bike")
        .with_status(200)
        .with_body("[]")
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = ListingServiceImpl::new(config, client);

    block_on(service.get_listings_by_category(Category::ToysGames))
        .expect("category should succeed");
    block_on(service.search_listings("road bike")).expect("search should succeed");
    category.assert();
    search.assert();
}

#[test]
fn upload_image_sends_multipart_without_json_content_type() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/files/upload")
        .match_header(
            "Content-Type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .with_status(200)
        .with_body(
            r#"{"fileName":"bike.jpg","url":"/files/bike.jpg","contentType":"image/jpeg","size":4}"#,
        )
        .create();

    let (config, _tokens, client) = test_transport(&server.url());
    let service = ListingServiceImpl::new(config, client);

    let stored = block_on(service.upload_image("bike.jpg", vec![0xff, 0xd8, 0xff, 0xe0]))
        .expect("upload should succeed");
    assert_eq!(stored.url, "/files/bike.jpg");
    mock.assert();
}
