//! Tone matrix: the twelve Vietnamese vowels and their five toned forms.

use crate::vowel::{is_upper, with_case};

/// One of the five marked Vietnamese tones. The level tone (ngang) is the
/// absence of a mark and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// sắc
    Acute,
    /// huyền
    Grave,
    /// hỏi
    HookAbove,
    /// ngã
    Tilde,
    /// nặng
    DotBelow,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Acute,
        Tone::Grave,
        Tone::HookAbove,
        Tone::Tilde,
        Tone::DotBelow,
    ];

    /// Maps a 1-based tone id (the value stored in the key tables) to a tone.
    #[inline(always)]
    pub const fn from_id(id: u8) -> Option<Tone> {
        match id {
            1 => Some(Tone::Acute),
            2 => Some(Tone::Grave),
            3 => Some(Tone::HookAbove),
            4 => Some(Tone::Tilde),
            5 => Some(Tone::DotBelow),
            _ => None,
        }
    }

    #[inline(always)]
    const fn column(self) -> usize {
        match self {
            Tone::Acute => 0,
            Tone::Grave => 1,
            Tone::HookAbove => 2,
            Tone::Tilde => 3,
            Tone::DotBelow => 4,
        }
    }
}

/// Untoned vowels, in the row order of [`TONE_MATRIX`].
pub const VOWEL_ROWS: [char; 12] = ['a', 'ă', 'â', 'e', 'ê', 'i', 'o', 'ô', 'ơ', 'u', 'ư', 'y'];

// Columns follow `Tone::column`: acute, grave, hook above, tilde, dot below.
pub const TONE_MATRIX: [[char; 5]; 12] = [
    ['á', 'à', 'ả', 'ã', 'ạ'],
    ['ắ', 'ằ', 'ẳ', 'ẵ', 'ặ'],
    ['ấ', 'ầ', 'ẩ', 'ẫ', 'ậ'],
    ['é', 'è', 'ẻ', 'ẽ', 'ẹ'],
    ['ế', 'ề', 'ể', 'ễ', 'ệ'],
    ['í', 'ì', 'ỉ', 'ĩ', 'ị'],
    ['ó', 'ò', 'ỏ', 'õ', 'ọ'],
    ['ố', 'ồ', 'ổ', 'ỗ', 'ộ'],
    ['ớ', 'ờ', 'ở', 'ỡ', 'ợ'],
    ['ú', 'ù', 'ủ', 'ũ', 'ụ'],
    ['ứ', 'ừ', 'ử', 'ữ', 'ự'],
    ['ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ'],
];

#[inline(always)]
fn row_of(lower: char) -> Option<usize> {
    VOWEL_ROWS.iter().position(|&v| v == lower)
}

/// Splits a character into its untoned form and the tone it carries.
/// Case is preserved; characters without a tone come back unchanged.
pub fn split_tone(c: char) -> (char, Option<Tone>) {
    let upper = is_upper(c);
    let lower = with_case(c, false);
    for (row, toned) in TONE_MATRIX.iter().enumerate() {
        if let Some(col) = toned.iter().position(|&t| t == lower) {
            return (with_case(VOWEL_ROWS[row], upper), Some(Tone::ALL[col]));
        }
    }
    (c, None)
}

/// Returns `c` without its tone mark.
#[inline]
pub fn strip_tone(c: char) -> char {
    split_tone(c).0
}

/// Returns the tone carried by `c`, if any.
#[inline]
pub fn tone_of(c: char) -> Option<Tone> {
    split_tone(c).1
}

/// Puts `tone` on a vowel, replacing any tone it already has. `None` clears
/// the tone. Non-vowels are returned unchanged.
pub fn with_tone(c: char, tone: Option<Tone>) -> char {
    let (base, _) = split_tone(c);
    let Some(tone) = tone else {
        return base;
    };
    let upper = is_upper(base);
    match row_of(with_case(base, false)) {
        Some(row) => with_case(TONE_MATRIX[row][tone.column()], upper),
        None => c,
    }
}
