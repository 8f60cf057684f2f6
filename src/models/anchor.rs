use crate::utils::hex::{decode_fixed, encode_prefixed};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use web3::types::{H160, H256};

/// SHA-256 digest of a file's bytes, written as `0x` + 64 lowercase hex digits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    pub fn of(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        Self(out)
    }

}

impl From<ContentHash> for H256 {
    fn from(hash: ContentHash) -> Self {
        H256(hash.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_prefixed(&self.0))
    }
}

impl FromStr for ContentHash {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        anyhow::ensure!(
            s.starts_with("0x") && s.len() == 66,
            "content hash must be 0x followed by 64 hex digits"
        );
        Ok(Self(decode_fixed(s).context("Invalid content hash")?))
    }
}

impl Serialize for ContentHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// 20-byte account or contract address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_prefixed(&self.0))
    }
}

impl From<H160> for Address {
    fn from(address: H160) -> Self {
        Self(address.0)
    }
}

impl From<Address> for H160 {
    fn from(address: Address) -> Self {
        H160(address.0)
    }
}

impl FromStr for Address {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        anyhow::ensure!(
            s.starts_with("0x") && s.len() == 42,
            "address must be 0x followed by 40 hex digits"
        );
        Ok(Self(decode_fixed(s).context("Invalid address")?))
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// What `verifyHash` reports for a content hash
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorRecord {
    pub exists: bool,
    pub researcher: Address,
    /// Block timestamp of the submission, seconds
    pub timestamp: u64,
    pub cid: String,
    pub node_id: String,
}
