/// Module containing the announcement service
pub mod announcement_service;
/// Module containing the auction service
pub mod auction_service;
/// Module containing the authentication service
pub mod auth_service;
/// Module containing the cart service
pub mod cart_service;
/// Module containing the direct-message service
pub mod chat_service;
/// Module containing the listing service
pub mod listing_service;
/// Module containing the order service
pub mod order_service;
/// Module containing the community thread service
pub mod thread_service;
/// Module containing the user profile service
pub mod user_service;

pub use crate::application::interfaces::announcement::AnnouncementService;
pub use crate::application::interfaces::auction::AuctionService;
pub use crate::application::interfaces::auth::AuthService;
pub use crate::application::interfaces::cart::CartService;
pub use crate::application::interfaces::chat::ChatService;
pub use crate::application::interfaces::listing::ListingService;
pub use crate::application::interfaces::order::OrderService;
pub use crate::application::interfaces::thread::ThreadService;
pub use crate::application::interfaces::user::UserService;

pub use announcement_service::AnnouncementServiceImpl;
pub use auction_service::AuctionServiceImpl;
pub use auth_service::AuthServiceImpl;
pub use cart_service::CartServiceImpl;
pub use chat_service::ChatServiceImpl;
pub use listing_service::ListingServiceImpl;
pub use order_service::OrderServiceImpl;
pub use thread_service::ThreadServiceImpl;
pub use user_service::UserServiceImpl;
