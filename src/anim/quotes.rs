//! Rotating hero quote.
//!
//! A much smaller cousin of the typewriter: every tick advances to the
//! next quote, wrapping around, on a fixed cadence. Same driver
//! contract: `tick()` mutates and returns the delay until the next tick.

use std::time::Duration;

/// Time each quote stays on screen.
pub const ROTATE_DELAY: Duration = Duration::from_millis(5000);

/// Cycles through a (possibly empty) list of quotes.
#[derive(Debug, Clone)]
pub struct QuoteRotator {
    quotes: Vec<String>,
    index: usize,
}

impl QuoteRotator {
    /// Create a rotator starting at the first quote. An empty list is
    /// allowed; the rotator is then inert and `current()` is `None`.
    pub fn new(quotes: Vec<String>) -> Self {
        Self { quotes, index: 0 }
    }

    /// The quote currently on display, if any.
    pub fn current(&self) -> Option<&str> {
        self.quotes.get(self.index).map(String::as_str)
    }

    /// Whether there is anything to rotate.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Advance to the next quote and return the rotation delay.
    pub fn tick(&mut self) -> Duration {
        if !self.quotes.is_empty() {
            self.index = (self.index + 1) % self.quotes.len();
        }
        ROTATE_DELAY
    }
}
