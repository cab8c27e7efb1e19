use crate::decode::{decode_lossy_with_table, decode_with_table};
use crate::encode::{encode_with_table, resolve_with_table, words_or_empty, DEFAULT_SEPARATOR};
use crate::error::Result;
use crate::table::{DigitTable, REFERENCE_TABLE};

/// Configuration for a [`Codec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Separator placed between words. Default: `-`.
    pub separator: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Encoder/decoder bound to the reference table and a separator.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Create a codec using `separator` between words.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self::with_config(CodecConfig {
            separator: separator.into(),
        })
    }

    /// Encode hex into words; empty string for non-hex input.
    pub fn encode(&self, hex: &str) -> String {
        words_or_empty(self.try_encode(hex))
    }

    /// Encode hex into words, reporting invalid input.
    pub fn try_encode(&self, hex: &str) -> Result<String> {
        encode_with_table(self.table(), hex, &self.config.separator)
    }

    /// Decode words into hex. Never fails.
    pub fn decode(&self, words: &str) -> String {
        decode_with_table(self.table(), words)
    }

    /// Decode with the position-blind tokenizer.
    pub fn decode_lossy(&self, words: &str) -> String {
        decode_lossy_with_table(self.table(), words)
    }

    /// Separator this codec will actually emit.
    pub fn effective_separator(&self) -> &str {
        resolve_with_table(self.table(), &self.config.separator)
    }

    /// The digit table in use.
    pub fn table(&self) -> &'static DigitTable {
        &REFERENCE_TABLE
    }

    /// Current configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}
