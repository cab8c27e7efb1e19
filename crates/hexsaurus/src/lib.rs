//! Turn hex identifiers into pronounceable words and back.
//!
//! hexsaurus maps each hex digit to a consonant or vowel sound so IDs like
//! `0a1b2c3d4f` can be dictated as `bocoad-taiwayz`.
//!
//! # Crate Structure
//!
//! - [`codec`]: digit table, encoder and decoder
//!
//! The `hexsaurus` binary (behind the `cli` feature) wraps the codec.

/// Re-export codec types.
pub mod codec {
    pub use hexsaurus_codec::*;
}

pub use hexsaurus_codec::{decode, encode, Codec, CodecConfig, CodecError};
