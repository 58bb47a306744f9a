//! Animation state machines.
//!
//! Both machines here are pure state: each `tick()` applies one step and
//! returns the delay until the next tick. The event loop owns the
//! deadlines and the machines never touch a clock, which keeps every
//! timing rule testable as a plain call sequence.

pub mod quotes;
pub mod typewriter;

pub use quotes::QuoteRotator;
pub use typewriter::{EmptyPhrases, Mode, Typewriter};
