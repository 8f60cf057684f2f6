pub mod blocks;
pub mod contract;
pub mod provider;
