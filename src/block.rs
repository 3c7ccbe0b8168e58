// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Salsa20 block function: builds the initial 16-word state from a
//! key/nonce/counter triple, runs the 20-round core hash, and serializes
//! the result to a 64-byte keystream block.
//!
//! ```
//! use salsa20_core::block;
//!
//! let key = [0u8; 32];
//! let nonce = [0u8; 8];
//! let ks = block(&key, &nonce, 0).unwrap();
//! assert_eq!(ks.len(), 64);
//! ```

use crate::error::Error;
use crate::rounds::doubleround;
use crate::word::{load_le32, store_le32};

/// `"expand 32-byte k"`, split into four little-endian 32-bit words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// The 16-word Salsa20 state, laid out as a fixed-size array so the "always
/// exactly 16 words" invariant is enforced at the type level rather than by
/// a runtime length check.
#[derive(Clone)]
struct State([u32; 16]);

impl State {
    /// Build the initial state for a 32-byte key, 8-byte nonce and 64-bit
    /// counter, per the layout in spec §4.3.
    fn init(key: &[u8; 32], nonce: &[u8; 8], counter: u64) -> Self {
        let k0 = &key[0..16];
        let k1 = &key[16..32];
        State([
            SIGMA[0],
            load_le32(&k0[0..4]),
            load_le32(&k0[4..8]),
            load_le32(&k0[8..12]),
            load_le32(&k0[12..16]),
            SIGMA[1],
            load_le32(&nonce[0..4]),
            load_le32(&nonce[4..8]),
            (counter & 0xffff_ffff) as u32,
            (counter >> 32) as u32,
            SIGMA[2],
            load_le32(&k1[0..4]),
            load_le32(&k1[4..8]),
            load_le32(&k1[8..12]),
            load_le32(&k1[12..16]),
            SIGMA[3],
        ])
    }
}

#[cfg(feature = "zeroize")]
impl Drop for State {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.0.zeroize();
    }
}

/// The Salsa20/20 core hash: ten doublerounds over the initial state,
/// followed by the word-wise feed-forward addition of the original state.
fn core_hash(initial: &State) -> [u32; 16] {
    let mut w = initial.0;
    for _ in 0..10 {
        w = doubleround(&w);
    }
    let mut out = [0u32; 16];
    for i in 0..16 {
        out[i] = w[i].wrapping_add(initial.0[i]);
    }
    out
}

/// Produce one 64-byte Salsa20/20 keystream block for `(key, nonce,
/// counter)`.
///
/// Pure function: the same inputs always yield the same output, and the
/// function never mutates its inputs.
///
/// # Errors
///
/// Returns [`Error::InvalidKeyLength`] if `key` is not 32 bytes, or
/// [`Error::InvalidNonceLength`] if `nonce` is not 8 bytes. No
/// cryptographic work is performed before these checks.
pub fn block(key: &[u8], nonce: &[u8], counter: u64) -> Result<[u8; 64], Error> {
    if key.len() != 32 {
        return Err(Error::InvalidKeyLength);
    }
    if nonce.len() != 8 {
        return Err(Error::InvalidNonceLength);
    }

    let mut key_arr = [0u8; 32];
    key_arr.copy_from_slice(key);
    let mut nonce_arr = [0u8; 8];
    nonce_arr.copy_from_slice(nonce);

    let state = State::init(&key_arr, &nonce_arr, counter);
    let out_words = core_hash(&state);

    let mut out = [0u8; 64];
    for (i, w) in out_words.iter().enumerate() {
        store_le32(*w, &mut out[i * 4..i * 4 + 4]);
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn block_is_64_bytes() {
        let key = [7u8; 32];
        let nonce = [9u8; 8];
        assert_eq!(block(&key, &nonce, 0).unwrap().len(), 64);
    }

    #[test]
    fn block_is_deterministic() {
        let key = [3u8; 32];
        let nonce = [4u8; 8];
        assert_eq!(
            block(&key, &nonce, 42).unwrap(),
            block(&key, &nonce, 42).unwrap()
        );
    }

    #[test]
    fn block_is_counter_sensitive() {
        let key = [5u8; 32];
        let nonce = [6u8; 8];
        for c in 0..16u64 {
            assert_ne!(
                block(&key, &nonce, c).unwrap(),
                block(&key, &nonce, c + 1).unwrap()
            );
        }
    }

    #[test]
    fn rejects_invalid_key_length() {
        assert_eq!(block(&[0u8; 31], &[0u8; 8], 0), Err(Error::InvalidKeyLength));
        assert_eq!(block(&[0u8; 33], &[0u8; 8], 0), Err(Error::InvalidKeyLength));
    }

    #[test]
    fn rejects_invalid_nonce_length() {
        assert_eq!(
            block(&[0u8; 32], &[0u8; 7], 0),
            Err(Error::InvalidNonceLength)
        );
        assert_eq!(
            block(&[0u8; 32], &[0u8; 9], 0),
            Err(Error::InvalidNonceLength)
        );
    }

    #[test]
    fn initial_state_layout() {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let nonce: [u8; 8] = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
        let counter = 0x1122_3344_5566_7788u64;
        let state = State::init(&key, &nonce, counter);

        assert_eq!(state.0[0], SIGMA[0]);
        assert_eq!(state.0[5], SIGMA[1]);
        assert_eq!(state.0[10], SIGMA[2]);
        assert_eq!(state.0[15], SIGMA[3]);
        assert_eq!(state.0[6], 0x4433_2211);
        assert_eq!(state.0[7], 0x8877_6655);
        assert_eq!(state.0[8], 0x5566_7788);
        assert_eq!(state.0[9], 0x1122_3344);
    }

    #[test]
    fn ecrypt_set_1_vector_0_256bit() {
        let key = [
            128u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0,
        ];
        let nonce = [0u8; 8];
        let expected: [u8; 64] = [
            0xE3, 0xBE, 0x8F, 0xDD, 0x8B, 0xEC, 0xA2, 0xE3, 0xEA, 0x8E, 0xF9, 0x47, 0x5B, 0x29,
            0xA6, 0xE7, 0x00, 0x39, 0x51, 0xE1, 0x09, 0x7A, 0x5C, 0x38, 0xD2, 0x3B, 0x7A, 0x5F,
            0xAD, 0x9F, 0x68, 0x44, 0xB2, 0x2C, 0x97, 0x55, 0x9E, 0x27, 0x23, 0xC7, 0xCB, 0xBD,
            0x3F, 0xE4, 0xFC, 0x8D, 0x9A, 0x07, 0x44, 0x65, 0x2A, 0x83, 0xE7, 0x2A, 0x9C, 0x46,
            0x18, 0x76, 0xAF, 0x4D, 0x7E, 0xF1, 0xA1, 0x17,
        ];
        assert_eq!(block(&key, &nonce, 0).unwrap(), expected);
    }
}
