//! Typewriter animation state machine.
//!
//! Cycles through a list of phrases, typing each one character by
//! character, holding it briefly at full length, then deleting it and
//! moving to the next phrase, looping forever.
//!
//! The machine performs no timing itself. Each [`Typewriter::tick`]
//! applies exactly one step and returns the delay the driver should wait
//! before the next tick, so behavior is fully testable without real
//! timers: a test is just a sequence of `tick()` calls.
//!
//! # Invariants
//! - `cursor` only increases while `Typing` and only decreases while
//!   `Deleting`.
//! - `Holding` is entered exactly once per phrase cycle, when `cursor`
//!   reaches the phrase length.
//! - Leaving `Deleting` happens only at `cursor == 0` and advances the
//!   phrase index modulo the phrase count.

use std::time::Duration;
use thiserror::Error;

/// Delay after typing one character.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);

/// Delay after deleting one character.
pub const DELETE_DELAY: Duration = Duration::from_millis(50);

/// Hold time after a phrase is fully typed, before deletion starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Phase of the typewriter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Appending one character per tick.
    Typing,
    /// Phrase fully typed; waiting out the hold delay.
    Holding,
    /// Removing one character per tick.
    Deleting,
}

/// Error returned when constructing a typewriter with no phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Typewriter requires at least one phrase")]
pub struct EmptyPhrases;

/// Typewriter state machine over a non-empty phrase list.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    /// Number of characters (Unicode scalar values) currently shown.
    cursor: usize,
    mode: Mode,
}

impl Typewriter {
    /// Create a typewriter starting at the first phrase with nothing
    /// typed. Fails fast on an empty phrase list.
    pub fn new(phrases: Vec<String>) -> Result<Self, EmptyPhrases> {
        if phrases.is_empty() {
            return Err(EmptyPhrases);
        }
        Ok(Self {
            phrases,
            phrase_index: 0,
            cursor: 0,
            mode: Mode::Typing,
        })
    }

    /// Current phase of the cycle.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the phrase currently being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// The phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// The currently displayed prefix of the current phrase.
    ///
    /// Always a valid char-boundary slice; length in characters is
    /// within `[0, chars(current_phrase)]`.
    pub fn visible(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.cursor) {
            Some((byte_offset, _)) => &phrase[..byte_offset],
            None => phrase,
        }
    }

    /// Character count of the current phrase.
    fn current_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// Apply one step and return the delay until the next tick.
    ///
    /// Exactly one of three things happens: a character is appended
    /// (`Typing`), a character is removed (`Deleting`), or the mode
    /// transitions (`Holding` -> `Deleting`). Reaching full phrase
    /// length is detected on the appending tick itself, so the hold
    /// delay is scheduled exactly once per cycle.
    pub fn tick(&mut self) -> Duration {
        match self.mode {
            Mode::Typing => {
                let len = self.current_len();
                if self.cursor < len {
                    self.cursor += 1;
                }
                if self.cursor == len {
                    self.mode = Mode::Holding;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Mode::Holding => {
                self.mode = Mode::Deleting;
                DELETE_DELAY
            }
            Mode::Deleting => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                if self.cursor == 0 {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                    TYPE_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        }
    }
}
