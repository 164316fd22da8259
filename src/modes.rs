use core::fmt;
use core::str::FromStr;

use crate::error::ParseInputMethodError;
use crate::tone::Tone;
use crate::vowel::{Modifier, strip_modifier};

pub const IS_MODIFIER: u8 = 1 << 0;
pub const IS_TONE_KEY: u8 = 1 << 1;
pub const IS_UNDO_KEY: u8 = 1 << 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMethod {
    #[default]
    Telex,
    Vni,
}

impl InputMethod {
    pub const fn name(self) -> &'static str {
        match self {
            InputMethod::Telex => "telex",
            InputMethod::Vni => "vni",
        }
    }
}

impl fmt::Display for InputMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputMethod {
    type Err = ParseInputMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("telex") {
            Ok(InputMethod::Telex)
        } else if s.eq_ignore_ascii_case("vni") {
            Ok(InputMethod::Vni)
        } else {
            Err(ParseInputMethodError::Unknown(s.to_string()))
        }
    }
}

/// Resolves which quality mark `key` puts on `target` (lower-case, untoned;
/// an existing mark is ignored).
type ModifierFn = fn(char, u8) -> Option<Modifier>;

pub struct Mode {
    pub classify: &'static [u8; 256],
    pub tone: &'static [u8; 256],
    pub modifier: ModifierFn,
}

impl Mode {
    /// Key class bits for an input char. Anything outside ASCII is a plain
    /// literal.
    #[inline(always)]
    pub fn class_of(&self, key: char) -> u8 {
        match ascii_lower(key) {
            Some(b) => self.classify[b as usize],
            None => 0,
        }
    }

    #[inline(always)]
    pub fn tone_of(&self, key: char) -> Option<Tone> {
        ascii_lower(key).and_then(|b| Tone::from_id(self.tone[b as usize]))
    }

    #[inline(always)]
    pub fn modifier_for(&self, target: char, key: char) -> Option<Modifier> {
        ascii_lower(key).and_then(|b| (self.modifier)(target, b))
    }
}

#[inline(always)]
pub fn ascii_lower(key: char) -> Option<u8> {
    if key.is_ascii() {
        Some((key as u8).to_ascii_lowercase())
    } else {
        None
    }
}

pub fn mode_for(method: InputMethod) -> &'static Mode {
    match method {
        InputMethod::Telex => &TELEX_MODE,
        InputMethod::Vni => &VNI_MODE,
    }
}

static TELEX_MODE: Mode = Mode {
    classify: &CLASSIFY_TELEX,
    tone: &TONE_TELEX,
    modifier: resolve_telex,
};

static VNI_MODE: Mode = Mode {
    classify: &CLASSIFY_VNI,
    tone: &TONE_VNI,
    modifier: resolve_vni,
};

pub const CLASSIFY_TELEX: [u8; 256] = {
    let mut t = [0u8; 256];
    t[b'a' as usize] = IS_MODIFIER;
    t[b'e' as usize] = IS_MODIFIER;
    t[b'o' as usize] = IS_MODIFIER;
    t[b'w' as usize] = IS_MODIFIER;
    t[b'd' as usize] = IS_MODIFIER;

    t[b's' as usize] = IS_TONE_KEY;
    t[b'f' as usize] = IS_TONE_KEY;
    t[b'r' as usize] = IS_TONE_KEY;
    t[b'x' as usize] = IS_TONE_KEY;
    t[b'j' as usize] = IS_TONE_KEY;

    t[b'z' as usize] = IS_UNDO_KEY;
    t
};

pub const CLASSIFY_VNI: [u8; 256] = {
    let mut t = [0u8; 256];
    t[b'6' as usize] = IS_MODIFIER;
    t[b'7' as usize] = IS_MODIFIER;
    t[b'8' as usize] = IS_MODIFIER;
    t[b'9' as usize] = IS_MODIFIER;

    t[b'1' as usize] = IS_TONE_KEY;
    t[b'2' as usize] = IS_TONE_KEY;
    t[b'3' as usize] = IS_TONE_KEY;
    t[b'4' as usize] = IS_TONE_KEY;
    t[b'5' as usize] = IS_TONE_KEY;

    t[b'0' as usize] = IS_UNDO_KEY;
    t
};

pub const TONE_TELEX: [u8; 256] = {
    let mut t = [0u8; 256];
    t[b's' as usize] = 1;
    t[b'f' as usize] = 2;
    t[b'r' as usize] = 3;
    t[b'x' as usize] = 4;
    t[b'j' as usize] = 5;
    t
};

pub const TONE_VNI: [u8; 256] = {
    let mut t = [0u8; 256];
    t[b'1' as usize] = 1;
    t[b'2' as usize] = 2;
    t[b'3' as usize] = 3;
    t[b'4' as usize] = 4;
    t[b'5' as usize] = 5;
    t
};

#[inline(always)]
fn resolve_telex(target: char, key: u8) -> Option<Modifier> {
    match (strip_modifier(target), key) {
        ('a', b'a') | ('e', b'e') | ('o', b'o') => Some(Modifier::Circumflex),
        ('a', b'w') => Some(Modifier::Breve),
        ('o', b'w') | ('u', b'w') => Some(Modifier::Horn),
        ('d', b'd') => Some(Modifier::Stroke),
        _ => None,
    }
}

#[inline(always)]
fn resolve_vni(target: char, key: u8) -> Option<Modifier> {
    match (strip_modifier(target), key) {
        ('a' | 'e' | 'o', b'6') => Some(Modifier::Circumflex),
        ('o' | 'u', b'7') => Some(Modifier::Horn),
        ('a', b'7') | ('a', b'8') => Some(Modifier::Breve),
        ('d', b'9') => Some(Modifier::Stroke),
        _ => None,
    }
}
