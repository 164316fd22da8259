/// Longest Vietnamese syllable, in chars ("nghiêng", "khuyếch").
pub const MAX_SYLLABLE_LEN: usize = 7;

#[cfg(feature = "heapless")]
pub type SyllableBuffer = heapless::Vec<char, MAX_SYLLABLE_LEN>;

// Replacements are at most a syllable plus one literal key, three bytes a char.
#[cfg(feature = "heapless")]
pub type Replacement = heapless::String<32>;

/// Byte capacity of the session text under `heapless`.
pub const OUT_CAPACITY: usize = 128;

#[cfg(feature = "heapless")]
pub type OutBuffer = heapless::String<OUT_CAPACITY>;

#[cfg(not(feature = "heapless"))]
pub type SyllableBuffer = Vec<char>;

#[cfg(not(feature = "heapless"))]
pub type Replacement = String;

#[cfg(not(feature = "heapless"))]
pub type OutBuffer = String;

#[cfg(all(not(feature = "std"), not(feature = "heapless")))]
compile_error!(
    "no_std build requires `heapless` feature (use --no-default-features --features heapless)"
);

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_syllable_buffer() -> SyllableBuffer {
    SyllableBuffer::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_replacement() -> Replacement {
    Replacement::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_out_buffer() -> OutBuffer {
    OutBuffer::new()
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_syllable_buffer() -> SyllableBuffer {
    Vec::with_capacity(MAX_SYLLABLE_LEN)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_replacement() -> Replacement {
    String::with_capacity(32)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_out_buffer() -> OutBuffer {
    String::with_capacity(OUT_CAPACITY)
}

/// Appends `s` to the session text. `false` when a fixed-capacity buffer has
/// no room left, in which case nothing is appended.
#[cfg(feature = "heapless")]
#[inline]
pub fn push_out(text: &mut OutBuffer, s: &str) -> bool {
    text.push_str(s).is_ok()
}

#[cfg(not(feature = "heapless"))]
#[inline]
pub fn push_out(text: &mut OutBuffer, s: &str) -> bool {
    text.push_str(s);
    true
}
