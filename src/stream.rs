// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Salsa20 stream transform: XOR a byte buffer against the keystream
//! produced by consecutive blocks starting at `initial_block`.
//!
//! ```
//! use salsa20_core::stream_xor;
//!
//! let key = [0u8; 32];
//! let nonce = [1, 2, 3, 4, 5, 6, 7, 8];
//! let plaintext = b"The Salsa20 stream cipher!";
//!
//! let ciphertext = stream_xor(&key, &nonce, plaintext, 0).unwrap();
//! let decrypted = stream_xor(&key, &nonce, &ciphertext, 0).unwrap();
//! assert_eq!(decrypted, plaintext);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::block::block;
use crate::error::Error;

const BLOCK_SIZE: usize = 64;

/// XOR `data` against the Salsa20 keystream for `(key, nonce)`, starting at
/// block index `initial_block`.
///
/// Returns a freshly allocated buffer the same length as `data`; the same
/// function both encrypts and decrypts since XOR is its own inverse.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyLength`] / [`Error::InvalidNonceLength`] under
/// the same conditions as [`crate::block`]. Returns
/// [`Error::CounterOverflow`] if `initial_block + ceil(data.len() / 64)`
/// would exceed `u64::MAX`; this is checked before any block is produced.
pub fn stream_xor(
    key: &[u8],
    nonce: &[u8],
    data: &[u8],
    initial_block: u64,
) -> Result<Vec<u8>, Error> {
    if key.len() != 32 {
        return Err(Error::InvalidKeyLength);
    }
    if nonce.len() != 8 {
        return Err(Error::InvalidNonceLength);
    }

    if data.is_empty() {
        return Ok(Vec::new());
    }

    let blocks_needed = ((data.len() - 1) / BLOCK_SIZE) as u64 + 1;
    if initial_block.checked_add(blocks_needed).is_none() {
        return Err(Error::CounterOverflow);
    }

    let mut out = vec![0u8; data.len()];
    let mut b = initial_block;
    let mut i = 0;
    while i < data.len() {
        let ks = block(key, nonce, b)?;
        let take = core::cmp::min(BLOCK_SIZE, data.len() - i);
        for j in 0..take {
            out[i + j] = data[i + j] ^ ks[j];
        }
        i += take;
        b += 1;
    }
    Ok(out)
}
