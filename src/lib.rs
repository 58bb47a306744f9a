//! folio
//!
//! Terminal portfolio viewer: a pinned navigation bar over a scrollable
//! column of content sections, with a typewriter-animated hero headline
//! and an active-section tracker driving the nav highlight.
//!
//! The animation components (`anim`, `track`) are pure state machines
//! with injected timing and layout, so every timing and matching rule
//! is unit-testable without a terminal or a clock. The `view` layer is
//! the impure shell that drives them.

pub mod anim;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod track;
pub mod view;
