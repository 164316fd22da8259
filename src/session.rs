use tracing::debug;

use crate::buffers::{OutBuffer, new_out_buffer, push_out};
use crate::composer::{Composer, KeyComposer};
use crate::edit::EditInstruction;
use crate::modes::InputMethod;

/// A host-side typing session: one composer plus the text it edits.
///
/// This is what a keyboard hook does with the engine, minus the OS calls:
/// boundary keys reset the composer and go straight through, everything else
/// goes to the composer and its edit is applied to `text`.
///
/// Under the `heapless` feature the text holds at most
/// [`OUT_CAPACITY`](crate::buffers::OUT_CAPACITY) bytes; keys that no longer
/// fit are dropped and logged at `debug`.
#[derive(Debug, Clone)]
pub struct TypingSession {
    composer: Composer,
    text: OutBuffer,
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new(InputMethod::default())
    }
}

impl TypingSession {
    pub fn new(method: InputMethod) -> Self {
        Self {
            composer: Composer::new(method),
            text: new_out_buffer(),
        }
    }

    pub fn input_method(&self) -> InputMethod {
        self.composer.method()
    }

    /// Swaps the composer for the other method. The syllable in progress is
    /// dropped; the text is kept.
    pub fn set_input_method(&mut self, method: InputMethod) {
        if method != self.composer.method() {
            debug!(from = %self.composer.method(), to = %method, "switching input method");
            self.composer = Composer::new(method);
        }
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Clears the text and the syllable in progress.
    pub fn clear(&mut self) {
        self.composer.reset();
        self.text.clear();
    }

    /// Takes the text out of the session, leaving it empty.
    pub fn commit(&mut self) -> OutBuffer {
        self.composer.reset();
        core::mem::replace(&mut self.text, new_out_buffer())
    }

    /// Feeds one key. Returns the composer's edit, or `None` for a boundary
    /// key that was passed straight through.
    pub fn process(&mut self, key: char) -> Option<EditInstruction> {
        if is_word_boundary(key, self.composer.method()) {
            self.composer.reset();
            let mut utf8 = [0u8; 4];
            if !push_out(&mut self.text, key.encode_utf8(&mut utf8)) {
                debug!(%key, "text buffer full, key dropped");
            }
            return None;
        }
        let edit = self.composer.process_key(key);
        edit.apply_to(&mut self.text, key);
        Some(edit)
    }

    pub fn feed(&mut self, key: char) -> &str {
        self.process(key);
        &self.text
    }

    /// Deletes the last char of the text. The composer keeps no history to
    /// rewind, so the syllable starts over.
    pub fn backspace(&mut self) -> &str {
        self.text.pop();
        self.composer.reset();
        &self.text
    }
}

/// Keys that end a syllable. Digits are only boundaries under Telex, where
/// they carry no meaning.
pub fn is_word_boundary(key: char, method: InputMethod) -> bool {
    if key.is_whitespace() || key.is_control() {
        return true;
    }
    if key.is_ascii_punctuation() {
        return true;
    }
    method == InputMethod::Telex && key.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_seq(s: &mut TypingSession, seq: &str) -> String {
        for c in seq.chars() {
            s.feed(c);
        }
        s.text().to_string()
    }

    #[test]
    fn whitespace_resets_the_syllable() {
        let mut s = TypingSession::new(InputMethod::Telex);
        assert_eq!(type_seq(&mut s, "aas"), "ấ");
        assert_eq!(s.feed(' '), "ấ ");
        assert!(s.composer().peek_buffer().is_empty());
        assert_eq!(type_seq(&mut s, "as"), "ấ á");
    }

    #[test]
    fn punctuation_is_a_boundary() {
        let mut s = TypingSession::new(InputMethod::Telex);
        assert_eq!(type_seq(&mut s, "a,a"), "a,a");
        assert_eq!(s.process('.'), None);
    }

    #[test]
    fn digits_pass_through_under_telex() {
        let mut s = TypingSession::new(InputMethod::Telex);
        assert_eq!(type_seq(&mut s, "a1a"), "a1a");
    }

    #[test]
    fn switching_method_keeps_text() {
        let mut s = TypingSession::new(InputMethod::Telex);
        type_seq(&mut s, "dd");
        s.set_input_method(InputMethod::Vni);
        assert_eq!(s.input_method(), InputMethod::Vni);
        assert!(s.composer().peek_buffer().is_empty());
        assert_eq!(type_seq(&mut s, " d9"), "đ đ");
    }

    #[test]
    fn backspace_restarts_the_syllable() {
        let mut s = TypingSession::new(InputMethod::Telex);
        type_seq(&mut s, "ab");
        assert_eq!(s.backspace(), "a");
        // the composer no longer sees the 'a'
        assert_eq!(type_seq(&mut s, "a"), "aa");
    }

    #[test]
    fn commit_takes_the_text() {
        let mut s = TypingSession::new(InputMethod::Vni);
        type_seq(&mut s, "Vie65t");
        let out = s.commit();
        assert_eq!(&out[..], "Việt");
        assert_eq!(s.text(), "");
    }
}
