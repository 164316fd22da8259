//! Tone placement: picks the vowel of a syllable that carries the tone mark.
//!
//! Both input methods go through [`tone_position`]; the rule is a property of
//! Vietnamese orthography, not of the keying convention.

use crate::vowel::{fold, is_modified_vowel, is_vowel, untoned_lower};

/// Three-vowel clusters (folded to bare letters) that take the tone on the
/// middle vowel.
pub const TRIPHTHONGS: [[char; 3]; 12] = [
    ['o', 'a', 'i'],
    ['o', 'a', 'y'],
    ['o', 'a', 'o'],
    ['o', 'e', 'o'],
    ['u', 'a', 'i'],
    ['u', 'a', 'y'],
    ['u', 'y', 'a'],
    ['u', 'y', 'u'],
    ['u', 'o', 'i'],
    ['u', 'o', 'u'],
    ['i', 'e', 'u'],
    ['y', 'e', 'u'],
];

/// Pairs (untoned, quality marks kept) that take the tone on the second vowel.
/// The bare `ie`, `ye`, `uo`, `ue` are half-typed `iê`, `yê`, `uô`/`ươ`, `uê`.
pub const TONE_ON_SECOND: [[char; 2]; 13] = [
    ['o', 'a'],
    ['o', 'ă'],
    ['o', 'e'],
    ['u', 'y'],
    ['u', 'ê'],
    ['u', 'e'],
    ['u', 'ơ'],
    ['u', 'ô'],
    ['u', 'o'],
    ['i', 'ê'],
    ['i', 'e'],
    ['y', 'ê'],
    ['y', 'e'],
];

/// Pairs that take the tone on the first vowel.
pub const TONE_ON_FIRST: [[char; 2]; 18] = [
    ['a', 'i'],
    ['a', 'o'],
    ['a', 'u'],
    ['a', 'y'],
    ['â', 'u'],
    ['â', 'y'],
    ['e', 'o'],
    ['ê', 'u'],
    ['i', 'a'],
    ['i', 'u'],
    ['o', 'i'],
    ['ô', 'i'],
    ['ơ', 'i'],
    ['u', 'a'],
    ['u', 'i'],
    ['ư', 'a'],
    ['ư', 'i'],
    ['ư', 'u'],
];

const MAX_VOWELS: usize = 16;

/// Index of the glide in a `qu` or `gi` initial, when another vowel follows
/// it. Such a `u`/`i` belongs to the consonant and never takes the tone.
fn glide_index(buffer: &[char]) -> Option<usize> {
    if buffer.len() < 3 || !is_vowel(buffer[2]) {
        return None;
    }
    let initial = untoned_lower(buffer[0]);
    let glide = untoned_lower(buffer[1]);
    match (initial, glide) {
        ('q', 'u') | ('g', 'i') => Some(1),
        _ => None,
    }
}

/// Returns the index in `buffer` of the vowel that should carry the tone, or
/// `None` when there is no vowel.
///
/// Priority: a lone vowel; then a modified vowel (`ươ` puts it on `ơ`); then
/// a known triphthong (middle vowel); then a known diphthong; then the last
/// vowel if a consonant closes the syllable, the second-to-last otherwise.
pub fn tone_position(buffer: &[char]) -> Option<usize> {
    let glide = glide_index(buffer);
    let mut vowels = [0usize; MAX_VOWELS];
    let mut n = 0usize;
    for (i, &c) in buffer.iter().enumerate() {
        if Some(i) == glide || !is_vowel(c) {
            continue;
        }
        if n < MAX_VOWELS {
            vowels[n] = i;
            n += 1;
        }
    }
    let vowels = &vowels[..n];

    match vowels {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    for (k, &i) in vowels.iter().enumerate() {
        if !is_modified_vowel(buffer[i]) {
            continue;
        }
        // ươ and a half-typed ưo carry the tone on the o.
        if untoned_lower(buffer[i]) == 'ư' {
            if let Some(&next) = vowels.get(k + 1) {
                if next == i + 1 && matches!(untoned_lower(buffer[next]), 'ơ' | 'o') {
                    return Some(next);
                }
            }
        }
        return Some(i);
    }

    let last = vowels[n - 1];
    let prev = vowels[n - 2];

    if n >= 3 {
        let first = vowels[n - 3];
        let key = [fold(buffer[first]), fold(buffer[prev]), fold(buffer[last])];
        if TRIPHTHONGS.contains(&key) {
            return Some(prev);
        }
    }

    let pair = [untoned_lower(buffer[prev]), untoned_lower(buffer[last])];
    if TONE_ON_SECOND.contains(&pair) {
        return Some(last);
    }
    if TONE_ON_FIRST.contains(&pair) {
        return Some(prev);
    }

    let has_coda = last + 1 < buffer.len();
    if has_coda { Some(last) } else { Some(prev) }
}
