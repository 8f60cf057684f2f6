pub mod pinning;
pub mod rpc;
