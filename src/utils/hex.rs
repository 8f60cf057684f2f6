use anyhow::{bail, Context, Result};

/// Strip an optional `0x`/`0X` prefix from a hex string
pub fn strip_0x(hex_str: &str) -> &str {
    hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str)
}

/// Decode a `0x`-prefixed (or bare) hex string into bytes
pub fn decode_prefixed(hex_str: &str) -> Result<Vec<u8>> {
    let digits = strip_0x(hex_str);

    if digits.len() % 2 != 0 {
        bail!("Hex string must have even length");
    }

    hex::decode(digits).context("Invalid hex character")
}

/// Decode into a fixed-size array, failing on any other length
pub fn decode_fixed<const N: usize>(hex_str: &str) -> Result<[u8; N]> {
    let bytes = decode_prefixed(hex_str)?;

    if bytes.len() != N {
        bail!("Expected {} bytes, got {}", N, bytes.len());
    }

    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Encode bytes as a lowercase `0x`-prefixed hex string
pub fn encode_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
