//! Rule lookup and atomic effect application.
//!
//! Lookups are linear scans over the lesson's finite tables; the tables hold
//! a handful of rules each, so no indexing is warranted. The invariant that
//! matters is *at most one* rule per (phase, source, target) triple - an
//! ambiguous table is a defect in the rule set, not a tie to break, and is
//! caught by a debug assertion.
//!
//! Effects are applied in two passes: stage every write by reading the
//! pre-transition store, then commit. A rule therefore sees a consistent
//! snapshot (swap effects work without a hidden temporary) and a rule that
//! does not match never writes at all.

use crate::{AdvanceRule, DropRule, Effect, Entity, JudgmentRule, Phase, RuleSet, SourcePat, Value, VarStore};

fn debug_rules() -> bool {
    std::env::var_os("GULU_DEBUG_RULES").is_some()
}

impl SourcePat {
    fn matches(&self, entity: Entity, initials: &[(&'static str, i64)]) -> bool {
        match (self, entity) {
            (SourcePat::Var(name), Entity::Var(got)) => *name == got,
            (SourcePat::PillOf(var), Entity::Pill(literal)) => {
                initials.iter().any(|(name, value)| name == var && *value == literal)
            }
            _ => false,
        }
    }
}

/// Look up the drop rule for `(phase, source, target)`, honoring guards.
///
/// Returns `None` for a lookup miss *or* a failed guard; both are silent
/// no-ops to the caller.
pub(crate) fn find_drop<'a>(
    rules: &'a RuleSet,
    phase: Phase,
    source: Entity,
    target: &str,
    initials: &[(&'static str, i64)],
    store: &VarStore,
) -> Option<&'a DropRule> {
    let mut matched = rules
        .drops
        .iter()
        .filter(|r| r.phase == phase && r.target == target && r.source.matches(source, initials));

    let hit = matched.next();
    debug_assert!(matched.next().is_none(), "ambiguous drop rules for ({phase}, {source}, {target})");

    match hit {
        Some(rule) if (rule.guard)(store) => {
            if debug_rules() {
                eprintln!("[drop] {} -> rule '{}' next={}", source, rule.name, rule.next);
            }
            Some(rule)
        }
        Some(rule) => {
            if debug_rules() {
                eprintln!("[drop] {} -> rule '{}' guard failed, discarded", source, rule.name);
            }
            None
        }
        None => {
            if debug_rules() {
                eprintln!("[drop] {source}>{target} in {phase}: no rule, discarded");
            }
            None
        }
    }
}

/// Look up the judgment rule posed in `phase`, if any.
pub(crate) fn find_judgment(rules: &RuleSet, phase: Phase) -> Option<&JudgmentRule> {
    let mut matched = rules.judgments.iter().filter(|r| r.phase == phase);
    let hit = matched.next();
    debug_assert!(matched.next().is_none(), "ambiguous judgment rules for {phase}");
    hit
}

/// Look up the advance-button rule for `phase`, if any.
pub(crate) fn find_advance(rules: &RuleSet, phase: Phase) -> Option<&AdvanceRule> {
    let mut matched = rules.advances.iter().filter(|r| r.phase == phase);
    let hit = matched.next();
    debug_assert!(matched.next().is_none(), "ambiguous advance rules for {phase}");
    hit
}

/// Apply `effects` atomically and return the names whose value changed.
///
/// `pill` carries the dragged literal for `SetFromPill` effects; drop rules
/// with a pill source are the only producers of such effects.
pub(crate) fn apply_effects(
    store: &mut VarStore,
    effects: &[Effect],
    pill: Option<i64>,
) -> Vec<&'static str> {
    // Stage every write against the pre-transition store.
    let mut staged: Vec<(&'static str, Value)> = Vec::with_capacity(effects.len());
    for effect in effects {
        match *effect {
            Effect::SetFromPill(dst) => {
                if let Some(literal) = pill {
                    staged.push((dst, Value::Int(literal)));
                }
            }
            Effect::Copy { dst, src } => staged.push((dst, store.get(src))),
            Effect::Swap(a, b) => {
                staged.push((a, store.get(b)));
                staged.push((b, store.get(a)));
            }
        }
    }

    let mut changed = Vec::new();
    for (name, value) in staged {
        if store.get(name) != value {
            store.set(name, value);
            changed.push(name);
        }
    }

    if debug_rules() && !changed.is_empty() {
        eprintln!("[apply] changed={changed:?}");
    }

    changed
}
