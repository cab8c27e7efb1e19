//! Pronounceable words for hexadecimal strings.
//!
//! Every hex digit maps to one consonant sound and one vowel sound. Input is
//! cut into chunks of five digits and each chunk becomes one word shaped
//! consonant-vowel-consonant-vowel-consonant, so identifiers can be read out
//! over the phone or written down by hand:
//!
//! ```
//! use hexsaurus_codec::{decode, encode};
//!
//! let words = encode("0a1b2c3d4f", "-");
//! assert_eq!(words, "bocoad-taiwayz");
//! assert_eq!(decode(&words), "0a1b2c3d4f");
//! ```
//!
//! The table is fixed. Changing it breaks decoding of every word produced
//! before the change.

pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod table;

pub use codec::{Codec, CodecConfig};
pub use decode::{decode, decode_lossy};
pub use encode::{encode, resolve_separator, try_encode, CHUNK_LEN, DEFAULT_SEPARATOR};
pub use error::{CodecError, Result};
pub use table::{DigitTable, Sound, SoundKind, HEX_DIGITS, REFERENCE_TABLE, TABLE_VERSION};
