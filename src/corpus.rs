//! Static drill corpora.
//!
//! The character corpus is generated from phonological tables: vowels,
//! the aytham, pure consonants, and every consonant-vowel ligature. The
//! tables are ordered slices so the generation order is stable.
//!
//! Both corpora are built once per process and shared read-only.

use std::sync::LazyLock;

use crate::types::{Item, Mode};

// ============================================================================
// TABLES
// ============================================================================

/// Independent vowels (uyir) and their romanization.
pub const VOWELS: &[(&str, &str)] = &[
    ("அ", "a"),
    ("ஆ", "aa"),
    ("இ", "i"),
    ("ஈ", "ii"),
    ("உ", "u"),
    ("ஊ", "uu"),
    ("எ", "e"),
    ("ஏ", "ee"),
    ("ஐ", "ai"),
    ("ஒ", "o"),
    ("ஓ", "oo"),
    ("ஔ", "au"),
];

/// The aytham, a standalone special letter.
pub const AYTHAM: (&str, &str) = ("ஃ", "ak");

/// Core consonants, written without the pulli, with their base sound.
pub const BASE_CONSONANTS: &[(&str, &str)] = &[
    ("க", "k"),
    ("ங", "ng"),
    ("ச", "s"),
    ("ஞ", "ny"),
    ("ட", "ṭ"),
    ("ண", "ṇ"),
    ("த", "th"),
    ("ந", "n"),
    ("ப", "p"),
    ("ம", "m"),
    ("ய", "y"),
    ("ர", "r"),
    ("ல", "l"),
    ("வ", "v"),
    ("ழ", "ḻ"),
    ("ள", "ḷ"),
    ("ற", "ṟ"),
    ("ன", "ṉ"),
];

/// Grantha consonants used for loanwords.
pub const EXTENDED_CONSONANTS: &[(&str, &str)] = &[
    ("ஜ", "j"),
    ("ஷ", "ṣ"),
    ("ஸ", "s"),
    ("ஹ", "h"),
];

/// Vowel signs keyed by the vowel sound they add. The inherent "a"
/// has no sign and is not listed.
pub const VOWEL_DIACRITICS: &[(&str, char)] = &[
    ("aa", '\u{0BBE}'),
    ("i", '\u{0BBF}'),
    ("ii", '\u{0BC0}'),
    ("u", '\u{0BC1}'),
    ("uu", '\u{0BC2}'),
    ("e", '\u{0BC6}'),
    ("ee", '\u{0BC7}'),
    ("ai", '\u{0BC8}'),
    ("o", '\u{0BCA}'),
    ("oo", '\u{0BCB}'),
    ("au", '\u{0BCC}'),
];

/// Pulli: suppresses a consonant's inherent vowel.
pub const PULLI: char = '\u{0BCD}';

/// Romanization of the vowel every bare consonant carries.
pub const INHERENT_VOWEL: &str = "a";

/// The compound honorific glyph appended after the ligatures.
pub const SRI: (&str, &str) = ("ஸ்ரீ", "sri");

/// Everyday words.
pub const WORDS: &[(&str, &str)] = &[
    ("வணக்கம்", "vaṇakkam"),
    ("நன்றி", "naṉṟi"),
    ("தமிழ்", "tamiḻ"),
    ("அம்மா", "ammā"),
    ("அப்பா", "appā"),
    ("வீடு", "vīṭu"),
    ("தண்ணீர்", "taṇṇīr"),
    ("புத்தகம்", "puttakam"),
    ("பள்ளி", "paḷḷi"),
    ("நண்பன்", "naṇpaṉ"),
];

// ============================================================================
// CORPORA
// ============================================================================

/// Generated character corpus (300 items).
pub static CHARACTER_ITEMS: LazyLock<Vec<Item>> = LazyLock::new(generate_character_items);

/// Word corpus (10 items).
pub static WORD_ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
    WORDS
        .iter()
        .map(|&(text, pron)| Item::new(text, pron))
        .collect()
});

/// The shared corpus for a mode.
pub fn corpus_for(mode: Mode) -> &'static [Item] {
    match mode {
        Mode::Characters => CHARACTER_ITEMS.as_slice(),
        Mode::Words => WORD_ITEMS.as_slice(),
    }
}

/// Base consonants followed by the extended ones.
fn all_consonants() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    BASE_CONSONANTS.iter().chain(EXTENDED_CONSONANTS)
}

/// Build the character corpus in table order.
///
/// Pure and deterministic: vowels, aytham, pulli consonants, then per
/// consonant the inherent-vowel form followed by each diacritic form,
/// and finally "sri".
pub fn generate_character_items() -> Vec<Item> {
    let consonant_count = BASE_CONSONANTS.len() + EXTENDED_CONSONANTS.len();
    let capacity =
        VOWELS.len() + 1 + consonant_count * (2 + VOWEL_DIACRITICS.len()) + 1;
    let mut items = Vec::with_capacity(capacity);

    for &(vowel, pron) in VOWELS {
        items.push(Item::new(vowel, pron));
    }

    items.push(Item::new(AYTHAM.0, AYTHAM.1));

    for &(consonant, base) in all_consonants() {
        items.push(Item::new(format!("{consonant}{PULLI}"), base));
    }

    for &(consonant, base) in all_consonants() {
        items.push(Item::new(consonant, format!("{base}{INHERENT_VOWEL}")));
        for &(sound, mark) in VOWEL_DIACRITICS {
            items.push(Item::new(format!("{consonant}{mark}"), format!("{base}{sound}")));
        }
    }

    items.push(Item::new(SRI.0, SRI.1));

    items
}

// ============================================================================
// TESTS
// ============================================================================
