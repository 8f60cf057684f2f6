pub mod anchor;
pub mod network;
pub mod session;
pub mod user;
pub mod views;
