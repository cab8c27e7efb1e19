use tracing::{debug, trace};

use crate::encode::CHUNK_LEN;
use crate::table::{DigitTable, REFERENCE_TABLE};

/// Decode words back into a lowercase hex string.
///
/// Never fails. Characters that are not part of any sound act as word
/// boundaries and are dropped. Each stretch of sound letters is parsed
/// against the consonant/vowel pattern of encoded words; if some stretch
/// cannot follow that pattern, the whole input is decoded with
/// [`decode_lossy`] instead.
///
/// ```
/// assert_eq!(hexsaurus_codec::decode("bocoad-taiwayz"), "0a1b2c3d4f");
/// assert_eq!(hexsaurus_codec::decode("something invalid"), "ba75c48882");
/// ```
pub fn decode(input: &str) -> String {
    decode_with_table(&REFERENCE_TABLE, input)
}

/// Decode by isolating every consonant letter and looking up whatever lies
/// between them, skipping tokens that are not sounds.
///
/// This tokenizer ignores word positions, so with the reference table it
/// reads `ay`, `ey` and `oy` as a vowel followed by the consonant `y`.
pub fn decode_lossy(input: &str) -> String {
    decode_lossy_with_table(&REFERENCE_TABLE, input)
}

pub(crate) fn decode_with_table(table: &DigitTable, input: &str) -> String {
    let runs: Vec<&str> = input
        .split(|ch: char| !table.is_sound_letter(ch))
        .filter(|run| !run.is_empty())
        .collect();

    let mut hex = String::new();
    for run in runs {
        match parse_run(table, run) {
            Some(digits) => {
                trace!(run, %digits, "parsed run");
                hex.push_str(&digits);
            }
            None => {
                debug!(run, "run breaks the word pattern, decoding lossily");
                return decode_lossy_with_table(table, input);
            }
        }
    }
    hex
}

pub(crate) fn decode_lossy_with_table(table: &DigitTable, input: &str) -> String {
    bracket_tokens(table, input)
        .into_iter()
        .map(|token| token.trim_matches(is_padding))
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            table
                .digit_for_vowel(token)
                .or_else(|| table.digit_for_consonant(token))
        })
        .collect()
}

fn is_padding(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Splits `input` around every consonant letter (each becomes its own token)
/// and at every comma.
fn bracket_tokens<'a>(table: &DigitTable, input: &'a str) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (at, ch) in input.char_indices() {
        if ch == ',' {
            tokens.push(&input[start..at]);
            start = at + 1;
        } else if table.is_consonant_letter(ch) {
            let end = at + ch.len_utf8();
            tokens.push(&input[start..at]);
            tokens.push(&input[at..end]);
            start = end;
        }
    }
    tokens.push(&input[start..]);
    tokens
}

/// Parses one run of sound letters into digits.
///
/// The run may end at any word position. At each step the longest sound that
/// still leads to a complete parse is taken, so `ay`, `ey` and `oy` stay
/// vowels unless splitting off the consonant `y` is the only way through.
fn parse_run(table: &DigitTable, run: &str) -> Option<String> {
    let len = run.len();
    if len == 0 {
        return None;
    }
    let cell = |offset: usize, slot: usize| offset * CHUNK_LEN + slot;

    // viable[cell(offset, slot)]: run[offset..] parses when its first sound
    // sits at word position `slot`.
    let mut viable = vec![false; (len + 1) * CHUNK_LEN];
    for slot in 0..CHUNK_LEN {
        viable[cell(len, slot)] = true;
    }
    for offset in (0..len).rev() {
        for slot in 0..CHUNK_LEN {
            let next = (slot + 1) % CHUNK_LEN;
            let parses = candidates(table, &run[offset..], slot)
                .iter()
                .any(|&(taken, _)| viable[cell(offset + taken, next)]);
            viable[cell(offset, slot)] = parses;
        }
    }

    if !viable[cell(0, 0)] {
        return None;
    }

    let mut digits = String::with_capacity(len);
    let (mut offset, mut slot) = (0, 0);
    while offset < len {
        let next = (slot + 1) % CHUNK_LEN;
        let (taken, digit) = candidates(table, &run[offset..], slot)
            .into_iter()
            .find(|&(taken, _)| viable[cell(offset + taken, next)])?;
        digits.push(digit);
        offset += taken;
        slot = next;
    }
    Some(digits)
}

/// Sounds allowed at word position `slot` that prefix `rest`, as
/// `(byte length, digit)`, longest first.
fn candidates(table: &DigitTable, rest: &str, slot: usize) -> Vec<(usize, char)> {
    let (sounds, is_vowel) = if slot % 2 == 0 {
        (&table.consonants, false)
    } else {
        (&table.vowels, true)
    };

    let mut found: Vec<(usize, char)> = sounds
        .iter()
        .filter(|sound| rest.starts_with(**sound))
        .filter_map(|sound| {
            let digit = if is_vowel {
                table.digit_for_vowel(sound)
            } else {
                table.digit_for_consonant(sound)
            };
            digit.map(|digit| (sound.len(), digit))
        })
        .collect();
    found.sort_by(|a, b| b.0.cmp(&a.0));
    found
}
