pub mod core;
pub mod models;
pub mod stores;
pub mod api;
pub mod chain;
pub mod pages;
pub mod validation;
pub mod utils;
pub mod handlers;

#[cfg(test)]
mod test_support;
