//! # Order Salt
//!
//! Random 32-byte salt for signed orders whose quote carried none.

use ethers::utils::hex;

/// Generates a fresh `0x`-prefixed 32-byte hex salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 32] = rand::random();
    format!("0x{}", hex::encode(bytes))
}
