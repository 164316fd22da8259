//! Per-keystroke composers, one per input method.
//!
//! A composer turns one keystroke into an [`EditInstruction`] against the
//! text already on screen. Both methods share the tone, undo and modifier
//! operations below and the tone placement in [`crate::placement`]; they only
//! differ in how keys are classified and where a modifier key looks for its
//! target.

mod telex;
mod vni;

pub use telex::TelexComposer;
pub use vni::VniComposer;

use crate::edit::EditInstruction;
use crate::modes::InputMethod;
use crate::placement::tone_position;
use crate::state::SyllableState;
use crate::tone::{Tone, split_tone, with_tone};
use crate::vowel::{Modifier, apply_modifier, is_upper, modifier_of, strip_modifier, with_case};

pub trait KeyComposer {
    /// Consumes one keystroke and returns what to do with the on-screen text.
    fn process_key(&mut self, key: char) -> EditInstruction;

    /// Forgets the current syllable. Called by the host on word boundaries.
    fn reset(&mut self);

    /// The composed chars of the current syllable.
    fn peek_buffer(&self) -> &[char];

    fn state(&self) -> &SyllableState;

    fn method(&self) -> InputMethod;
}

/// The closed set of composers; switching input method means building a new
/// one.
#[derive(Debug, Clone)]
pub enum Composer {
    Telex(TelexComposer),
    Vni(VniComposer),
}

impl Composer {
    pub fn new(method: InputMethod) -> Self {
        match method {
            InputMethod::Telex => Composer::Telex(TelexComposer::new()),
            InputMethod::Vni => Composer::Vni(VniComposer::new()),
        }
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(InputMethod::default())
    }
}

impl KeyComposer for Composer {
    #[inline]
    fn process_key(&mut self, key: char) -> EditInstruction {
        match self {
            Composer::Telex(c) => c.process_key(key),
            Composer::Vni(c) => c.process_key(key),
        }
    }

    #[inline]
    fn reset(&mut self) {
        match self {
            Composer::Telex(c) => c.reset(),
            Composer::Vni(c) => c.reset(),
        }
    }

    #[inline]
    fn peek_buffer(&self) -> &[char] {
        match self {
            Composer::Telex(c) => c.peek_buffer(),
            Composer::Vni(c) => c.peek_buffer(),
        }
    }

    #[inline]
    fn state(&self) -> &SyllableState {
        match self {
            Composer::Telex(c) => c.state(),
            Composer::Vni(c) => c.state(),
        }
    }

    #[inline]
    fn method(&self) -> InputMethod {
        match self {
            Composer::Telex(_) => InputMethod::Telex,
            Composer::Vni(_) => InputMethod::Vni,
        }
    }
}

/// Appends `key` unchanged.
fn literal(state: &mut SyllableState, key: char) -> EditInstruction {
    state.clear_escape();
    state.push(key);
    EditInstruction::PASS
}

/// Removes the applied tone, or failing that the quality mark of the most
/// recent modified letter. `None` when there is nothing to undo. A successful
/// undo leaves the state in escape mode, keyed by `key`.
fn undo(state: &mut SyllableState, key: char) -> Option<EditInstruction> {
    if let Some((_, idx)) = state.applied() {
        let c = state.buffer()[idx];
        state.set(idx, with_tone(c, None));
        state.set_tone(None);
        state.set_escape(key);
        return Some(state.tail_edit(idx, None));
    }

    let idx = state
        .buffer()
        .iter()
        .rposition(|&c| modifier_of(split_tone(c).0).is_some())?;
    let (base, tone) = split_tone(state.buffer()[idx]);
    state.set(idx, with_tone(strip_modifier(base), tone));
    state.set_escape(key);
    Some(state.tail_edit(idx, None))
}

/// The toned form of `c`, upper-cased when the tone key is.
fn toned(c: char, tone: Tone, key: char) -> char {
    let c = with_tone(c, Some(tone));
    if is_upper(key) { with_case(c, true) } else { c }
}

/// Tone key handling shared by both methods: escape on repeat, change in
/// place, or place a fresh tone. `None` means the key is a literal.
fn tone_key(state: &mut SyllableState, tone: Tone, key: char) -> Option<EditInstruction> {
    if state.escaped_by(key) {
        return None;
    }

    if let Some((applied, idx)) = state.applied() {
        let c = state.buffer()[idx];
        if applied == tone {
            state.set(idx, with_tone(c, None));
            state.set_tone(None);
            state.set_escape(key);
        } else {
            state.set(idx, toned(c, tone, key));
            state.set_tone(Some((tone, idx)));
            state.clear_escape();
        }
        return Some(state.tail_edit(idx, None));
    }

    let idx = tone_position(state.buffer())?;
    let c = state.buffer()[idx];
    state.set(idx, toned(c, tone, key));
    state.set_tone(Some((tone, idx)));
    state.clear_escape();
    Some(state.tail_edit(idx, None))
}

/// Puts `modifier` on the char at `idx`, keeping its tone. If the char
/// already carries that modifier the key escapes: the bare letter comes back
/// and the key is typed literally after the syllable.
fn modify_at(
    state: &mut SyllableState,
    idx: usize,
    modifier: Modifier,
    key: char,
) -> Option<EditInstruction> {
    let (base, tone) = split_tone(*state.buffer().get(idx)?);

    if modifier_of(base) == Some(modifier) {
        state.set(idx, with_tone(strip_modifier(base), tone));
        let edit = state.tail_edit(idx, Some(key));
        state.push(key);
        state.set_escape(key);
        return Some(edit);
    }

    let upper = is_upper(base) || is_upper(key);
    let marked = with_case(apply_modifier(base, modifier)?, upper);
    state.set(idx, with_tone(marked, tone));
    state.clear_escape();
    Some(state.tail_edit(idx, None))
}

/// Turns `uo` at `idx`, `idx + 1` into `ươ`, or back into `uo` plus the
/// literal key when both already carry the horn.
fn horn_pair(state: &mut SyllableState, idx: usize, key: char) -> Option<EditInstruction> {
    let buffer = state.buffer();
    let (u, u_tone) = split_tone(*buffer.get(idx)?);
    let (o, o_tone) = split_tone(*buffer.get(idx + 1)?);

    if modifier_of(u) == Some(Modifier::Horn) && modifier_of(o) == Some(Modifier::Horn) {
        state.set(idx, with_tone(strip_modifier(u), u_tone));
        state.set(idx + 1, with_tone(strip_modifier(o), o_tone));
        let edit = state.tail_edit(idx, Some(key));
        state.push(key);
        state.set_escape(key);
        return Some(edit);
    }

    let key_upper = is_upper(key);
    let u_marked = with_case(apply_modifier(u, Modifier::Horn)?, is_upper(u) || key_upper);
    let o_marked = with_case(apply_modifier(o, Modifier::Horn)?, is_upper(o) || key_upper);
    state.set(idx, with_tone(u_marked, u_tone));
    state.set(idx + 1, with_tone(o_marked, o_tone));
    state.clear_escape();
    Some(state.tail_edit(idx, None))
}

/// True when the `u` at `idx` is the glide of a `qu` initial.
fn after_q(buffer: &[char], idx: usize) -> bool {
    idx > 0 && matches!(buffer[idx - 1], 'q' | 'Q')
}
