pub mod auth;
pub mod dashboard;
pub mod fallback;
pub mod form;
pub mod health;
pub mod site;
pub mod upload;
pub mod verify;
pub mod wallet;
