pub mod auth;
pub mod dashboard;
pub mod session;
pub mod site;
pub mod upload;
pub mod verify;
pub mod wallet;
