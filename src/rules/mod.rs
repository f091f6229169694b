//! Per-lesson transition tables.
//!
//! Each submodule defines one lesson's phases, its finite rule tables (drop /
//! judgment / advance), its step projection table, and its scenario tests.
//! The tables deliberately differ in shape per lesson: each one teaches a
//! distinct algorithmic idiom, and the legality of a drop or judgment encodes
//! that idiom's precondition.

pub(crate) mod assignment;
pub(crate) mod find_max;
pub(crate) mod sort3;
pub(crate) mod swap;

use once_cell::sync::Lazy;

use crate::{LessonId, RuleSet};

static ASSIGNMENT: Lazy<RuleSet> = Lazy::new(assignment::rules);
static SWAP: Lazy<RuleSet> = Lazy::new(swap::rules);
static FIND_MAX: Lazy<RuleSet> = Lazy::new(find_max::rules);
static SORT3: Lazy<RuleSet> = Lazy::new(sort3::rules);

/// The transition table for a lesson. Built once, shared thereafter.
pub(crate) fn rule_set(id: LessonId) -> &'static RuleSet {
    match id {
        LessonId::Assignment => &ASSIGNMENT,
        LessonId::Swap => &SWAP,
        LessonId::FindMax => &FIND_MAX,
        LessonId::Sort3 => &SORT3,
    }
}
