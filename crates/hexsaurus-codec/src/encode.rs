use tracing::debug;

use crate::error::{CodecError, Result};
use crate::table::{DigitTable, REFERENCE_TABLE};

/// Separator used between words when none is given, or when the requested one
/// collides with a table sound.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Hex digits per word.
pub const CHUNK_LEN: usize = 5;

/// Encode a hex string into pronounceable words.
///
/// Returns an empty string if `input` contains anything other than hex
/// digits. Use [`try_encode`] to tell invalid input apart from empty input.
///
/// ```
/// assert_eq!(hexsaurus_codec::encode("0a1b2c3d4f", "-"), "bocoad-taiwayz");
/// assert_eq!(hexsaurus_codec::encode("not a hex string", "-"), "");
/// ```
pub fn encode(input: &str, separator: &str) -> String {
    words_or_empty(try_encode(input, separator))
}

/// Collapses a rejected encode into the empty string, logging the reason.
pub(crate) fn words_or_empty(result: Result<String>) -> String {
    match result {
        Ok(words) => words,
        Err(err) => {
            debug!(error = %err, "rejecting non-hex input");
            String::new()
        }
    }
}

/// Encode a hex string, reporting the first non-hex character.
pub fn try_encode(input: &str, separator: &str) -> Result<String> {
    encode_with_table(&REFERENCE_TABLE, input, separator)
}

/// Separator actually used for `requested`: the request itself, or
/// [`DEFAULT_SEPARATOR`] when it equals a consonant or vowel sound.
pub fn resolve_separator(requested: &str) -> &str {
    resolve_with_table(&REFERENCE_TABLE, requested)
}

pub(crate) fn resolve_with_table<'a>(table: &DigitTable, requested: &'a str) -> &'a str {
    if table.contains_sound(requested) {
        debug!(requested, "separator collides with a sound, using default");
        DEFAULT_SEPARATOR
    } else {
        requested
    }
}

pub(crate) fn encode_with_table(
    table: &DigitTable,
    input: &str,
    separator: &str,
) -> Result<String> {
    let digits = validate(input)?;
    let separator = resolve_with_table(table, separator);

    let words: Vec<String> = digits
        .chunks(CHUNK_LEN)
        .map(|chunk| encode_chunk(table, chunk))
        .collect();

    Ok(words.join(separator))
}

/// Checks every character and returns the lowercase digits.
fn validate(input: &str) -> Result<Vec<char>> {
    input
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            if ch.is_ascii_hexdigit() {
                Ok(ch.to_ascii_lowercase())
            } else {
                Err(CodecError::InvalidHexDigit {
                    position,
                    found: ch,
                })
            }
        })
        .collect()
}

fn encode_chunk(table: &DigitTable, chunk: &[char]) -> String {
    let mut word = String::with_capacity(2 * CHUNK_LEN);
    for (position, &digit) in chunk.iter().enumerate() {
        let sound = if position % 2 == 0 {
            table.consonant_of(digit)
        } else {
            table.vowel_of(digit)
        };
        // validate() only lets hex digits through.
        if let Some(sound) = sound {
            word.push_str(sound);
        }
    }
    word
}
