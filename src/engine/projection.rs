//! Phase -> step projection.
//!
//! Step is a pure projection of phase: a non-negative index into the lesson's
//! source/pseudocode/flowchart highlighting, derived from the lesson's step
//! table and never stored or advanced on its own. Renderers must take step
//! from here instead of re-deriving it from their own copy of the phase
//! logic.

use crate::{Phase, RuleSet};

/// Total and side-effect free: phases absent from the lesson's table (the
/// cover/intro screens, the summary) project to step 0.
pub(crate) fn step_for(rules: &RuleSet, phase: Phase) -> u32 {
    rules.steps.iter().find(|(p, _)| *p == phase).map(|(_, step)| *step).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule_set;
    use crate::{COMPLETE, COVER, INTRO, LessonId, SUMMARY};

    #[test]
    fn pre_game_and_summary_phases_project_to_zero() {
        for id in LessonId::ALL {
            let rules = rule_set(id);
            assert_eq!(step_for(rules, COVER), 0, "{id:?}");
            assert_eq!(step_for(rules, INTRO), 0, "{id:?}");
            assert_eq!(step_for(rules, SUMMARY), 0, "{id:?}");
        }
    }

    #[test]
    fn complete_projects_to_the_lesson_max_step() {
        let expected = [
            (LessonId::Assignment, 4),
            (LessonId::Swap, 4),
            (LessonId::FindMax, 5),
            (LessonId::Sort3, 3),
        ];
        for (id, max) in expected {
            assert_eq!(step_for(rule_set(id), COMPLETE), max, "{id:?}");
        }
    }

    #[test]
    fn every_rule_destination_has_a_defined_projection() {
        // Totality over reachable phases: every phase a rule can move to
        // (or pose a question in) yields a step without panicking.
        for id in LessonId::ALL {
            let rules = rule_set(id);
            for rule in &rules.drops {
                let _ = step_for(rules, rule.next);
            }
            for rule in &rules.judgments {
                let _ = step_for(rules, rule.yes.next);
                let _ = step_for(rules, rule.no.next);
            }
            for rule in &rules.advances {
                let _ = step_for(rules, rule.next);
            }
        }
    }
}
