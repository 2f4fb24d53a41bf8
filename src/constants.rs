/// User agent string used in HTTP requests to identify this client to the Swaply backend
pub const USER_AGENT: &str = "swaply-client/0.1.0";
/// Default base URL for the Swaply backend (local dev deployment)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Default number of listings returned by the latest/popular feeds
pub const DEFAULT_FEED_LIMIT: u32 = 20;
/// Default number of listings returned by a price-range query
pub const DEFAULT_PRICE_RANGE_LIMIT: u32 = 50;
/// Default page size for community thread listings
pub const DEFAULT_THREAD_PAGE_SIZE: u32 = 10;
/// Default page size for thread reply listings
pub const DEFAULT_REPLY_PAGE_SIZE: u32 = 20;
/// Default quantity when adding a listing to the cart
pub const DEFAULT_CART_QUANTITY: u32 = 1;
