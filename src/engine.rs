//! Lesson transition engine.
//!
//! This module is the operational core behind the public [`crate::Engine`].
//! It is split into focused submodules under `src/engine/` while keeping
//! paths stable (for example `crate::engine::store::VarStore`).
//!
//! ## How the parts work together
//!
//! Handling one learner input is a short synchronous pipeline:
//!
//! ```text
//! rule set (per lesson)  ──┐
//!                          │  rules::rule_set(lesson)      (src/rules/)
//!                          └──────────────┬───────────────
//!                                         │
//! input event ── lookup ──────────────────┼─ (phase, source, target)
//!   drop / judgment / advance             │   or (phase, answer)
//!   (transition.rs)                       v
//!                              apply effects atomically
//!                                (read all, then write)
//!                                         │
//!                                         v
//!                              phase := rule.next
//!                              step  := step_for(phase)   (projection.rs)
//!                              feedback key               (feedback.rs)
//! ```
//!
//! A lookup miss is a no-op: the phase does not change, the store
//! is untouched, and the caller gets `Outcome::miss`. Ambiguous rule tables
//! (two rules matching one triple) are a defect, caught by a debug assertion.
//!
//! ## Responsibilities by module
//!
//! - `store.rs`: the variable store - integer slots with an explicit garbage
//!   marker for declared-but-uninitialized variables.
//! - `transition.rs`: rule lookup and atomic effect application.
//! - `projection.rs`: the pure phase -> step projection used for external
//!   code/pseudocode/flowchart highlighting.
//! - `feedback.rs`: the bilingual message-key table and `{var}` placeholder
//!   rendering.
//!
//! ## Debugging
//!
//! Set `GULU_DEBUG_RULES=1` to print lookup and application traces.

#[path = "engine/feedback.rs"]
pub mod feedback;
#[path = "engine/projection.rs"]
mod projection;
#[path = "engine/store.rs"]
pub mod store;
#[path = "engine/transition.rs"]
mod transition;

pub(crate) use projection::step_for;
pub(crate) use transition::{apply_effects, find_advance, find_drop, find_judgment};
