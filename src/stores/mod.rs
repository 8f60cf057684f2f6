pub mod activity_feed;
pub mod session_store;
pub mod storage;
pub mod user_store;
pub mod wallet_cache;
