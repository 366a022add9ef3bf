//! Input mapping: window keys, mouse motion and scroll turned into [`Action`]s.
//!
//! # Invariants
//! - Movement keys are level-triggered (polled every frame while held).
//! - Toggle and quit keys are edge-triggered (once per physical press).

pub mod action;
pub mod bindings;

pub use action::Action;
pub use bindings::InputState;
