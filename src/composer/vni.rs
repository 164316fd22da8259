use core::fmt;

use tracing::trace;

use super::{KeyComposer, after_q, horn_pair, literal, modify_at, tone_key, undo};
use crate::edit::EditInstruction;
use crate::modes::{IS_MODIFIER, IS_TONE_KEY, IS_UNDO_KEY, InputMethod, Mode, mode_for};
use crate::state::SyllableState;
use crate::vowel::{Modifier, fold, untoned_lower};

/// VNI: digits `1`–`5` are the tones, `0` undoes, `6` circumflex, `7` horn
/// (breve on `a`), `8` breve, `9` đ. A modifier digit may come after the
/// final consonants, so it searches back for the nearest letter it fits.
#[derive(Clone)]
pub struct VniComposer {
    state: SyllableState,
    mode: &'static Mode,
}

impl fmt::Debug for VniComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VniComposer")
            .field("state", &self.state)
            .finish()
    }
}

impl Default for VniComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl VniComposer {
    pub fn new() -> Self {
        Self {
            state: SyllableState::new(),
            mode: mode_for(InputMethod::Vni),
        }
    }

    fn modify(&mut self, key: char) -> Option<(EditInstruction, &'static str)> {
        let mode = self.mode;
        let buffer = self.state.buffer();
        let idx = buffer
            .iter()
            .rposition(|&c| mode.modifier_for(untoned_lower(c), key).is_some())?;
        let modifier = mode.modifier_for(untoned_lower(buffer[idx]), key)?;

        if modifier == Modifier::Horn
            && fold(buffer[idx]) == 'o'
            && idx > 0
            && fold(buffer[idx - 1]) == 'u'
            && !after_q(buffer, idx - 1)
        {
            return horn_pair(&mut self.state, idx - 1, key).map(|e| (e, "uo7"));
        }

        let rule = if modifier == Modifier::Stroke {
            "d-stroke"
        } else {
            "modifier"
        };
        modify_at(&mut self.state, idx, modifier, key).map(|e| (e, rule))
    }
}

impl KeyComposer for VniComposer {
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
                trace!(method = "vni", %key, rule, backspaces = edit.backspaces, "transform");
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
        InputMethod::Vni
    }
}
