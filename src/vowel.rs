//! Base and modified vowels, the quality modifiers (circumflex, breve, horn)
//! and the d-stroke.

use crate::tone::strip_tone;

/// The six vowels without a quality mark.
pub const BASE_VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// The six vowels carrying a permanent quality mark.
pub const MODIFIED_VOWELS: [char; 6] = ['ă', 'â', 'ê', 'ô', 'ơ', 'ư'];

/// A quality mark. `Stroke` only applies to `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Circumflex,
    Breve,
    Horn,
    Stroke,
}

// (bare, modifier, marked)
const MODIFIER_TABLE: [(char, Modifier, char); 7] = [
    ('a', Modifier::Breve, 'ă'),
    ('a', Modifier::Circumflex, 'â'),
    ('e', Modifier::Circumflex, 'ê'),
    ('o', Modifier::Circumflex, 'ô'),
    ('o', Modifier::Horn, 'ơ'),
    ('u', Modifier::Horn, 'ư'),
    ('d', Modifier::Stroke, 'đ'),
];

#[inline(always)]
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Converts `c` to the requested case when the conversion is a single char.
#[inline]
pub fn with_case(c: char, upper: bool) -> char {
    let mut mapped: [char; 3] = ['\0'; 3];
    let mut n = 0usize;
    if upper {
        for m in c.to_uppercase() {
            if n < 3 {
                mapped[n] = m;
            }
            n += 1;
        }
    } else {
        for m in c.to_lowercase() {
            if n < 3 {
                mapped[n] = m;
            }
            n += 1;
        }
    }
    if n == 1 { mapped[0] } else { c }
}

/// Lower-case, untoned form of `c`. Quality marks are kept.
#[inline]
pub fn untoned_lower(c: char) -> char {
    with_case(strip_tone(c), false)
}

/// Lower-case, untoned form of `c` with its quality mark removed as well.
#[inline]
pub fn fold(c: char) -> char {
    strip_modifier(untoned_lower(c))
}

/// True for any Vietnamese vowel in either case, toned or not.
pub fn is_vowel(c: char) -> bool {
    let b = untoned_lower(c);
    BASE_VOWELS.contains(&b) || MODIFIED_VOWELS.contains(&b)
}

/// True when `c` (toned or not) is one of the six modified vowels.
pub fn is_modified_vowel(c: char) -> bool {
    MODIFIED_VOWELS.contains(&untoned_lower(c))
}

/// The quality mark carried by an untoned char, if any (`đ` counts).
pub fn modifier_of(c: char) -> Option<Modifier> {
    let lower = with_case(c, false);
    MODIFIER_TABLE
        .iter()
        .find(|(_, _, marked)| *marked == lower)
        .map(|(_, m, _)| *m)
}

/// Removes the quality mark from an untoned char, preserving case.
pub fn strip_modifier(c: char) -> char {
    let upper = is_upper(c);
    let lower = with_case(c, false);
    match MODIFIER_TABLE.iter().find(|(_, _, marked)| *marked == lower) {
        Some((bare, _, _)) => with_case(*bare, upper),
        None => c,
    }
}

/// Applies `modifier` to an untoned char, replacing whatever quality mark it
/// had. Returns `None` when the letter cannot carry that mark.
pub fn apply_modifier(c: char, modifier: Modifier) -> Option<char> {
    let upper = is_upper(c);
    let bare = with_case(strip_modifier(c), false);
    MODIFIER_TABLE
        .iter()
        .find(|(b, m, _)| *b == bare && *m == modifier)
        .map(|(_, _, marked)| with_case(*marked, upper))
}
