use tracing::debug;

use crate::buffers::{OutBuffer, Replacement, new_replacement, push_out};

/// What the caller must do to the real text after one keystroke: delete
/// `backspaces` chars before the cursor, then insert `replacement`.
///
/// `EditInstruction::PASS` (no deletions, no replacement) means the key was
/// not transformed and should reach the application unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditInstruction {
    pub backspaces: usize,
    pub replacement: Option<Replacement>,
}

impl EditInstruction {
    pub const PASS: EditInstruction = EditInstruction {
        backspaces: 0,
        replacement: None,
    };

    pub fn replace<I>(backspaces: usize, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut replacement = new_replacement();
        for c in chars {
            let _ = replacement.push(c);
        }
        Self {
            backspaces,
            replacement: Some(replacement),
        }
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.backspaces == 0 && self.replacement.is_none()
    }

    #[inline]
    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    /// Applies the edit to `text` the way a host would apply it to the text
    /// under the cursor. `key` is the keystroke that produced the edit and is
    /// inserted when the edit is a pass-through. A fixed-capacity `text` that
    /// is full drops the insertion.
    pub fn apply_to(&self, text: &mut OutBuffer, key: char) {
        if self.is_pass() {
            let mut utf8 = [0u8; 4];
            if !push_out(text, key.encode_utf8(&mut utf8)) {
                debug!(%key, "text buffer full, key dropped");
            }
            return;
        }
        for _ in 0..self.backspaces {
            text.pop();
        }
        if let Some(r) = &self.replacement {
            if !push_out(text, r) {
                debug!(replacement = %r, "text buffer full, replacement dropped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffers::new_out_buffer;

    #[test]
    fn pass_inserts_the_key() {
        let mut text = new_out_buffer();
        let _ = text.push_str("ch");
        EditInstruction::PASS.apply_to(&mut text, 'a');
        assert_eq!(&text[..], "cha");
    }

    #[test]
    fn replacement_rewrites_the_tail() {
        let mut text = new_out_buffer();
        let _ = text.push_str("chao");
        let edit = EditInstruction::replace(2, "ào".chars());
        assert!(!edit.is_pass());
        assert_eq!(edit.replacement(), Some("ào"));
        edit.apply_to(&mut text, 'f');
        assert_eq!(&text[..], "chào");
    }

    #[test]
    fn backspaces_past_the_start_are_harmless() {
        let mut text = new_out_buffer();
        let _ = text.push('a');
        EditInstruction::replace(3, "â".chars()).apply_to(&mut text, 'a');
        assert_eq!(&text[..], "â");
    }

    #[cfg(feature = "heapless")]
    #[test]
    fn full_text_drops_the_insertion() {
        use crate::buffers::OUT_CAPACITY;

        let mut text = new_out_buffer();
        for _ in 0..OUT_CAPACITY {
            let _ = text.push('a');
        }
        EditInstruction::PASS.apply_to(&mut text, 'b');
        assert_eq!(text.len(), OUT_CAPACITY);
        assert!(text.ends_with('a'));

        // the deletion still happens; the two-byte "â" does not fit in one byte
        EditInstruction::replace(1, "â".chars()).apply_to(&mut text, 'a');
        assert_eq!(text.len(), OUT_CAPACITY - 1);
    }
}
