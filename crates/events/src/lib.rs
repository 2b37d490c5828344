//! Domain events.
//!
//! Aggregates describe every accepted state change as an event; persistence
//! and presentation layers decide what to do with them.

pub mod event;

pub use event::Event;
