use crate::services::common::{test_transport, user_json};
use mockito::{Matcher, Server};
use serde_json::json;
use swaply_client::error::AppError;
use swaply_client::prelude::*;
use tokio_test::block_on;

fn login_body(token: &str) -> String {
    format!(r#"{{"token":"{token}","user":{}}}"#, user_json(4, "ana"))
}

#[test]
fn login_stores_token_and_authenticates_later_requests() {
    let mut server = Server::new();
    let login = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({"userName": "ana", "password": "pw"})))
        .match_header("Authorization", Matcher::Missing)
        .with_status(200)
        .with_body(login_body("tok-1"))
        .create();
    let cart = server
        .mock("GET", "/api/cart")
        .match_header("Authorization", "Bearer tok-1")
        .with_status(200)
        .with_body("[]")
        .create();

    let (config, tokens, client) = test_transport(&server.url());
    let auth = AuthServiceImpl::new(config.clone(), client.clone(), tokens.clone());
    let cart_service = CartServiceImpl::new(config, client);

    let request = LoginRequest {
        user_name: "ana".to_string(),
        password: "pw".to_string(),
    };
    let response = block_on(auth.login(&request)).expect("login should succeed");
    assert_eq!(response.token, "tok-1");
    assert_eq!(response.user.user_name, "ana");
    assert!(block_on(tokens.is_authenticated()));

    block_on(cart_service.get_cart()).expect("authenticated request should succeed");

    login.assert();
    cart.assert();
}

#[test]
fn failed_login_leaves_store_empty() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .create();

    let (config, tokens, client) = test_transport(&server.url());
    let auth = AuthServiceImpl::new(config, client, tokens.clone());

    let request = LoginRequest {
        user_name: "ana".to_string(),
        password: "wrong".to_string(),
    };
    let err = block_on(auth.login(&request)).err().expect("should be Err");
    assert!(matches!(err, AppError::Unauthorized));
    assert!(!block_on(tokens.is_authenticated()));
    mock.assert();
}

#[test]
fn login_from_config_uses_configured_credentials() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({"userName": "cfg-user", "password": "cfg-pass"})))
        .with_status(200)
        .with_body(login_body("tok-cfg"))
        .create();

    let mut config = Config::with_base_url(server.url());
    config.credentials.username = "cfg-user".to_string();
    config.credentials.password = "cfg-pass".to_string();
    let config = std::sync::Arc::new(config);
    let tokens = TokenStore::new();
    let client = std::sync::Arc::new(
        SwaplyHttpClientImpl::new(config.clone(), tokens.clone())
            .expect("Failed to create HTTP client"),
    );
    let auth = AuthServiceImpl::new(config, client, tokens);

    let response = block_on(auth.login_from_config()).expect("login should succeed");
    assert_eq!(response.token, "tok-cfg");
    mock.assert();
}

#[test]
fn register_posts_new_account_without_touching_tokens() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(json!({
            "userName": "leo",
            "email": "leo@example.com",
            "password": "pw"
        })))
        .with_status(201)
        .with_body(user_json(6, "leo"))
        .create();

    let (config, tokens, client) = test_transport(&server.url());
    let auth = AuthServiceImpl::new(config, client, tokens.clone());

    let request = RegisterRequest {
        user_name: "leo".to_string(),
        email: "leo@example.com".to_string(),
        password: "pw".to_string(),
    };
    let user = block_on(auth.register(&request)).expect("register should succeed");
    assert_eq!(user.user_id, Some(6));
    assert!(!block_on(tokens.is_authenticated()));
    mock.assert();
}

#[test]
fn logout_clears_the_stored_token() {
    let server = Server::new();
    let (config, tokens, client) = test_transport(&server.url());
    let auth = AuthServiceImpl::new(config, client, tokens.clone());

    block_on(tokens.set("tok-1"));
    block_on(auth.logout()).expect("logout should succeed");
    assert!(!block_on(tokens.is_authenticated()));
}
