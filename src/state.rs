use tracing::debug;

use crate::buffers::{MAX_SYLLABLE_LEN, SyllableBuffer, new_syllable_buffer};
use crate::edit::EditInstruction;
use crate::tone::Tone;

/// Per-syllable composition state, owned by exactly one composer.
///
/// The buffer holds the composed output chars of the current syllable and
/// never grows past [`MAX_SYLLABLE_LEN`]. When a tone is applied its slot is
/// tracked so that a repeat or a different tone key can find it again; the
/// tracking is dropped rather than left dangling when that slot is evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableState {
    buffer: SyllableBuffer,
    tone: Option<(Tone, usize)>,
    // lower-cased key that triggered the last escape
    escape: Option<char>,
}

impl Default for SyllableState {
    fn default() -> Self {
        Self::new()
    }
}

impl SyllableState {
    pub fn new() -> Self {
        Self {
            buffer: new_syllable_buffer(),
            tone: None,
            escape: None,
        }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.tone = None;
        self.escape = None;
    }

    #[inline]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn tone_applied(&self) -> Option<Tone> {
        self.tone.map(|(t, _)| t)
    }

    #[inline]
    pub fn tone_index(&self) -> Option<usize> {
        self.tone.map(|(_, i)| i)
    }

    #[inline]
    pub fn escape_mode(&self) -> bool {
        self.escape.is_some()
    }

    pub(crate) fn applied(&self) -> Option<(Tone, usize)> {
        self.tone
    }

    pub(crate) fn set_tone(&mut self, tone: Option<(Tone, usize)>) {
        self.tone = tone;
    }

    #[inline]
    pub(crate) fn escaped_by(&self, key: char) -> bool {
        self.escape == Some(key.to_ascii_lowercase())
    }

    #[inline]
    pub(crate) fn set_escape(&mut self, key: char) {
        self.escape = Some(key.to_ascii_lowercase());
    }

    #[inline]
    pub(crate) fn clear_escape(&mut self) {
        self.escape = None;
    }

    /// Overwrites the char at `idx`. Out-of-range writes are ignored.
    #[inline]
    pub(crate) fn set(&mut self, idx: usize, c: char) {
        if let Some(slot) = self.buffer.get_mut(idx) {
            *slot = c;
        }
    }

    /// Appends `c`, evicting the oldest char when the buffer is full.
    pub(crate) fn push(&mut self, c: char) {
        if self.buffer.len() >= MAX_SYLLABLE_LEN {
            self.evict_front();
        }
        let _ = self.buffer.push(c);
    }

    fn evict_front(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.buffer.remove(0);
        self.tone = match self.tone {
            Some((_, 0)) => {
                debug!("toned slot evicted, dropping tone tracking");
                None
            }
            Some((t, i)) => Some((t, i - 1)),
            None => None,
        };
        debug!(len = self.buffer.len(), "syllable buffer full, evicted oldest char");
    }

    /// Edit that rewrites everything from `from` to the end of the buffer,
    /// followed by `extra` when given. Call before pushing `extra`.
    pub(crate) fn tail_edit(&self, from: usize, extra: Option<char>) -> EditInstruction {
        let from = from.min(self.buffer.len());
        let tail = &self.buffer[from..];
        EditInstruction::replace(tail.len(), tail.iter().copied().chain(extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest_past_the_limit() {
        let mut s = SyllableState::new();
        for c in "abcdefghij".chars() {
            s.push(c);
            assert!(s.len() <= MAX_SYLLABLE_LEN);
        }
        assert_eq!(s.buffer(), &['d', 'e', 'f', 'g', 'h', 'i', 'j']);
    }

    #[test]
    fn evicting_the_toned_slot_drops_tracking() {
        let mut s = SyllableState::new();
        s.push('á');
        s.set_tone(Some((Tone::Acute, 0)));
        for c in "bcdefg".chars() {
            s.push(c);
        }
        assert_eq!(s.tone_index(), Some(0));
        s.push('h');
        assert_eq!(s.tone_applied(), None);
        assert_eq!(s.tone_index(), None);
    }

    #[test]
    fn eviction_shifts_the_tone_index() {
        let mut s = SyllableState::new();
        for c in "nghiêng".chars() {
            s.push(c);
        }
        s.set_tone(Some((Tone::Grave, 4)));
        s.push('x');
        assert_eq!(s.tone_index(), Some(3));
        assert_eq!(s.buffer()[3], 'ê');
    }

    #[test]
    fn reset_matches_a_fresh_state() {
        let mut s = SyllableState::new();
        s.push('a');
        s.set_tone(Some((Tone::Acute, 0)));
        s.set_escape('S');
        assert!(s.escaped_by('s'));
        s.reset();
        assert_eq!(s, SyllableState::new());
        assert!(!s.escape_mode());
    }

    #[test]
    fn tail_edit_covers_the_rewritten_suffix() {
        let mut s = SyllableState::new();
        for c in "chào".chars() {
            s.push(c);
        }
        let edit = s.tail_edit(2, None);
        assert_eq!(edit.backspaces, 2);
        assert_eq!(edit.replacement(), Some("ào"));

        let edit = s.tail_edit(3, Some('o'));
        assert_eq!(edit.backspaces, 1);
        assert_eq!(edit.replacement(), Some("oo"));
    }
}
