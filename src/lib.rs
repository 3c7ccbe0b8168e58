// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A pure-rust implementation of the Salsa20/20 stream cipher core, with
//! no dependencies and no foreign code (specially C or assembly).
//!
//! This crate covers exactly the cryptographic core: a deterministic
//! keystream generator keyed by a 256-bit secret and a 64-bit nonce, with
//! a 64-bit block counter, and the XOR transform that turns that
//! keystream into an encrypt/decrypt primitive.
//!
//! # Module overview
//!
//! - [`word`] — 32-bit modular add, left-rotate, and little-endian
//!   byte/word conversion.
//! - [`rounds`] — the quarterround/rowround/columnround/doubleround ARX
//!   mixing primitives.
//! - [`block`] — the block function: initial state construction, the
//!   20-round core hash, and serialization to a 64-byte keystream block.
//! - [`stream`] — the stream transform: XOR arbitrary-length data against
//!   consecutive keystream blocks, seekable by block index.
//! - [`error`] — the error conditions surfaced at the crate's boundary.
//!
//! # Design goals
//!
//! - No heap allocation beyond the one output buffer `stream_xor` returns.
//! - No data-dependent branches on key, nonce, or counter material.
//! - No authentication: combine with a MAC if integrity matters to you.
//! - No key derivation, nonce management policy, or XSalsa20/HSalsa20
//!   extension — those are left to layers built on top of this crate.
//!
//! As with everything cryptographic, please make sure this suits your
//! security requirements, and review and audit before using.
//!
//! # Example
//!
//! ```
//! use salsa20_core::stream_xor;
//!
//! let key = [0x42; 32];
//! let nonce = [0x24; 8];
//! let plaintext = b"hello world!";
//!
//! let ciphertext = stream_xor(&key, &nonce, plaintext, 0).unwrap();
//! let recovered = stream_xor(&key, &nonce, &ciphertext, 0).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```

#![allow(unknown_lints)]
#![warn(clippy::all)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod block;
pub mod error;
pub mod rounds;
pub mod stream;
pub mod word;

pub use block::block;
pub use error::Error;
pub use stream::stream_xor;
