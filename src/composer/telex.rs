use core::fmt;

use tracing::trace;

use super::{KeyComposer, after_q, horn_pair, literal, modify_at, tone_key, undo};
use crate::edit::EditInstruction;
use crate::modes::{IS_MODIFIER, IS_TONE_KEY, IS_UNDO_KEY, InputMethod, Mode, mode_for};
use crate::state::SyllableState;
use crate::vowel::{Modifier, untoned_lower};

/// Telex: letters drive everything. `s f r x j` are the tones, `z` undoes,
/// doubled vowels give the circumflex, `w` the breve or horn, `dd` the đ.
#[derive(Clone)]
pub struct TelexComposer {
    state: SyllableState,
    mode: &'static Mode,
}

impl fmt::Debug for TelexComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelexComposer")
            .field("state", &self.state)
            .finish()
    }
}

impl Default for TelexComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelexComposer {
    pub fn new() -> Self {
        Self {
            state: SyllableState::new(),
            mode: mode_for(InputMethod::Telex),
        }
    }

    fn modify(&mut self, key: char) -> Option<(EditInstruction, &'static str)> {
        let buffer = self.state.buffer();
        let n = buffer.len();
        let last = untoned_lower(*buffer.last()?);

        // uo + w -> ươ, but not in "quo"
        if key.eq_ignore_ascii_case(&'w') && n >= 2 {
            let pair = (untoned_lower(buffer[n - 2]), last);
            if matches!(pair, ('u', 'o') | ('ư', 'ơ')) && !after_q(buffer, n - 2) {
                return horn_pair(&mut self.state, n - 2, key).map(|e| (e, "uow"));
            }
        }

        let modifier = self.mode.modifier_for(last, key)?;
        let rule = if modifier == Modifier::Stroke {
            "d-stroke"
        } else {
            "modifier"
        };
        modify_at(&mut self.state, n - 1, modifier, key).map(|e| (e, rule))
    }
}

impl KeyComposer for TelexComposer {
    fn process_key(&mut self, key: char) -> EditInstruction {
        let class = self.mode.class_of(key);

        let matched = if class & IS_UNDO_KEY != 0 {
            undo(&mut self.state, key).map(|e| (e, "undo"))
        } else if class & IS_TONE_KEY != 0 {
            self.mode
                .tone_of(key)
                .and_then(|tone| tone_key(&mut self.state, tone, key))
                .map(|e| (e, "tone"))
        } else if class & IS_MODIFIER != 0 && !self.state.escaped_by(key) {
            self.modify(key)
        } else {
            None
        };

        match matched {
            Some((edit, rule)) => {
                trace!(method = "telex", %key, rule, backspaces = edit.backspaces, "transform");
                edit
            }
            None => literal(&mut self.state, key),
        }
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn peek_buffer(&self) -> &[char] {
        self.state.buffer()
    }

    fn state(&self) -> &SyllableState {
        &self.state
    }

    fn method(&self) -> InputMethod {
        InputMethod::Telex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(c: &mut TelexComposer, keys: &str) -> EditInstruction {
        let mut last = EditInstruction::PASS;
        for k in keys.chars() {
            last = c.process_key(k);
        }
        last
    }

    fn word(c: &TelexComposer) -> String {
        c.peek_buffer().iter().collect()
    }

    #[test]
    fn double_vowel() {
        let mut c = TelexComposer::new();
        assert!(c.process_key('a').is_pass());
        let edit = c.process_key('a');
        assert_eq!(edit.backspaces, 1);
        assert_eq!(edit.replacement(), Some("â"));
    }

    #[test]
    fn d_stroke() {
        let mut c = TelexComposer::new();
        let edit = feed(&mut c, "dd");
        assert_eq!(edit.backspaces, 1);
        assert_eq!(edit.replacement(), Some("đ"));
    }

    #[test]
    fn tone_escape_reverts_to_base() {
        let mut c = TelexComposer::new();
        let edit = feed(&mut c, "as");
        assert_eq!(edit.replacement(), Some("á"));
        let edit = c.process_key('s');
        assert_eq!(edit.backspaces, 1);
        assert_eq!(edit.replacement(), Some("a"));
        assert!(c.state().escape_mode());
        assert_eq!(c.state().tone_applied(), None);

        // a third press is typed as-is
        assert!(c.process_key('s').is_pass());
        assert_eq!(word(&c), "as");
        assert!(!c.state().escape_mode());
    }

    #[test]
    fn tone_change_stays_in_place() {
        let mut c = TelexComposer::new();
        feed(&mut c, "hoas");
        let edit = c.process_key('f');
        assert_eq!(edit.backspaces, 1);
        assert_eq!(edit.replacement(), Some("à"));
        assert_eq!(word(&c), "hoà");
    }

    #[test]
    fn uow_makes_both_horns() {
        let mut c = TelexComposer::new();
        let edit = feed(&mut c, "huow");
        assert_eq!(edit.backspaces, 2);
        assert_eq!(edit.replacement(), Some("ươ"));

        let mut c = TelexComposer::new();
        feed(&mut c, "quow");
        assert_eq!(word(&c), "quơ");
    }

    #[test]
    fn undo_key() {
        let mut c = TelexComposer::new();
        feed(&mut c, "aasz");
        assert_eq!(word(&c), "â");
        feed(&mut c, "z");
        assert_eq!(word(&c), "a");
        assert!(c.process_key('z').is_pass());
        assert_eq!(word(&c), "az");
    }

    #[test]
    fn undo_enters_escape_mode() {
        let mut c = TelexComposer::new();
        let edit = feed(&mut c, "asz");
        assert_eq!(edit.replacement(), Some("a"));
        assert!(c.state().escape_mode());

        assert!(c.process_key('n').is_pass());
        assert!(!c.state().escape_mode());
        assert_eq!(word(&c), "an");
    }

    #[test]
    fn triple_letters_escape() {
        let mut c = TelexComposer::new();
        let edit = feed(&mut c, "aaa");
        assert_eq!(edit.backspaces, 1);
        assert_eq!(edit.replacement(), Some("aa"));
        assert!(c.process_key('a').is_pass());
        assert_eq!(word(&c), "aaa");

        let mut c = TelexComposer::new();
        feed(&mut c, "ddd");
        assert_eq!(word(&c), "dd");
    }

    #[test]
    fn case_follows_key_or_target() {
        let mut c = TelexComposer::new();
        assert_eq!(feed(&mut c, "Aa").replacement(), Some("Â"));

        let mut c = TelexComposer::new();
        assert_eq!(feed(&mut c, "aA").replacement(), Some("Â"));

        let mut c = TelexComposer::new();
        assert_eq!(feed(&mut c, "DD").replacement(), Some("Đ"));

        let mut c = TelexComposer::new();
        assert_eq!(feed(&mut c, "AS").replacement(), Some("Á"));

        let mut c = TelexComposer::new();
        assert_eq!(feed(&mut c, "aS").replacement(), Some("Á"));

        let mut c = TelexComposer::new();
        assert_eq!(feed(&mut c, "asF").replacement(), Some("À"));

        let mut c = TelexComposer::new();
        assert_eq!(feed(&mut c, "tuoiS").replacement(), Some("Ói"));
    }

    #[test]
    fn tone_without_vowel_is_literal() {
        let mut c = TelexComposer::new();
        assert!(c.process_key('s').is_pass());
        assert!(c.process_key('r').is_pass());
        assert_eq!(word(&c), "sr");
    }
}
