//! The digit table.
//!
//! Every hex digit owns one consonant sound and one vowel sound. The table is
//! a frozen contract: words produced with one table can only be decoded with
//! the same table.

/// Version of [`REFERENCE_TABLE`]. Bumped whenever a sound changes.
pub const TABLE_VERSION: u32 = 1;

/// Number of hex digits covered by the table.
pub const DIGIT_COUNT: usize = 16;

/// Lowercase hex digits in table order.
pub const HEX_DIGITS: [char; DIGIT_COUNT] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// The reference table.
///
/// Consonants avoid easily confused letters (`g`, `l`, `q`), vowel sounds are
/// one or two letters long.
pub const REFERENCE_TABLE: DigitTable = DigitTable {
    consonants: [
        "b", "c", "d", "f", "h", "j", "k", "m", "n", "p", "r", "s", "t", "w", "y", "z",
    ],
    vowels: [
        "a", "aa", "ae", "ai", "ay", "e", "ey", "ee", "i", "ie", "o", "oa", "oi", "oo", "oy", "u",
    ],
};

/// Whether a sound fills a consonant or a vowel position of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Consonant,
    Vowel,
}

impl SoundKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SoundKind::Consonant => "consonant",
            SoundKind::Vowel => "vowel",
        }
    }
}

/// One table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sound {
    pub digit: char,
    pub text: &'static str,
    pub kind: SoundKind,
}

/// Digit → sound mappings, indexed by digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitTable {
    pub consonants: [&'static str; DIGIT_COUNT],
    pub vowels: [&'static str; DIGIT_COUNT],
}

impl DigitTable {
    /// Consonant sound for a hex digit (either case).
    pub fn consonant_of(&self, digit: char) -> Option<&'static str> {
        digit_value(digit).map(|v| self.consonants[v])
    }

    /// Vowel sound for a hex digit (either case).
    pub fn vowel_of(&self, digit: char) -> Option<&'static str> {
        digit_value(digit).map(|v| self.vowels[v])
    }

    /// Lowercase digit whose consonant sound is exactly `sound`.
    pub fn digit_for_consonant(&self, sound: &str) -> Option<char> {
        self.consonants
            .iter()
            .position(|c| *c == sound)
            .map(|v| HEX_DIGITS[v])
    }

    /// Lowercase digit whose vowel sound is exactly `sound`.
    pub fn digit_for_vowel(&self, sound: &str) -> Option<char> {
        self.vowels
            .iter()
            .position(|v| *v == sound)
            .map(|v| HEX_DIGITS[v])
    }

    /// True if `text` equals any consonant or vowel sound.
    pub fn contains_sound(&self, text: &str) -> bool {
        self.consonants
            .iter()
            .chain(self.vowels.iter())
            .any(|s| *s == text)
    }

    /// True if `ch` is a consonant sound on its own.
    pub fn is_consonant_letter(&self, ch: char) -> bool {
        self.consonants
            .iter()
            .any(|c| c.len() == 1 && c.starts_with(ch))
    }

    /// True if `ch` occurs anywhere in a consonant or vowel sound.
    pub fn is_sound_letter(&self, ch: char) -> bool {
        self.consonants
            .iter()
            .chain(self.vowels.iter())
            .any(|s| s.contains(ch))
    }

    /// All sounds, consonants first, each group in digit order.
    pub fn sounds(&self) -> impl Iterator<Item = Sound> + '_ {
        let consonants = self.consonants.iter().zip(HEX_DIGITS).map(|(text, digit)| Sound {
            digit,
            text: *text,
            kind: SoundKind::Consonant,
        });
        let vowels = self.vowels.iter().zip(HEX_DIGITS).map(|(text, digit)| Sound {
            digit,
            text: *text,
            kind: SoundKind::Vowel,
        });
        consonants.chain(vowels)
    }

    /// FNV-1a hash over every sound in digit order, consonants first.
    ///
    /// Two tables with the same fingerprint produce the same words, so it can
    /// be stored next to encoded data to detect a table change.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = 0xcbf2_9ce4_8422_2325u64;
        for sound in self.consonants.iter().chain(self.vowels.iter()) {
            // NUL-terminate each sound so "a"+"ab" and "aa"+"b" differ.
            for byte in sound.bytes().chain(std::iter::once(0)) {
                hash ^= u64::from(byte);
                hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
            }
        }
        hash
    }
}

/// Numeric value of a hex digit character, accepting both cases.
pub fn digit_value(digit: char) -> Option<usize> {
    digit.to_digit(16).map(|v| v as usize)
}
