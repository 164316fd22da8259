//! Keystroke-by-keystroke Vietnamese syllable composition for Telex and VNI.
//!
//! A [`Composer`] takes one key at a time and answers with an
//! [`EditInstruction`]: how many chars to delete before the cursor and what
//! to insert instead. The host decides where words end and calls
//! [`KeyComposer::reset`] there; [`TypingSession`] is a ready-made host that
//! does this for plain text.
//!
//! ```
//! use uvie_compose::{Composer, InputMethod, KeyComposer};
//!
//! let mut composer = Composer::new(InputMethod::Telex);
//! for key in "cha".chars() {
//!     assert!(composer.process_key(key).is_pass());
//! }
//! let edit = composer.process_key('o');
//! assert!(edit.is_pass());
//! let edit = composer.process_key('f');
//! assert_eq!(edit.backspaces, 2);
//! assert_eq!(edit.replacement(), Some("ào"));
//! ```

pub mod buffers;
pub mod composer;
pub mod edit;
pub mod error;
pub mod modes;
pub mod placement;
pub mod session;
pub mod state;
pub mod tone;
pub mod vowel;

pub use buffers::MAX_SYLLABLE_LEN;
pub use composer::{Composer, KeyComposer, TelexComposer, VniComposer};
pub use edit::EditInstruction;
pub use error::ParseInputMethodError;
pub use modes::InputMethod;
pub use placement::tone_position;
pub use session::TypingSession;
pub use state::SyllableState;
pub use tone::Tone;
