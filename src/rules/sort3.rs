//! SORT3: sort `a`, `b`, `c` ascending with three compare-and-swap steps.
//!
//! Unlike the other lessons, a correct Yes here carries the swap effect
//! itself; there is no follow-up drag. The fixed comparison sequence
//! (a,b), (b,c), (a,b) sorts any permutation of three values.

use crate::{COMPLETE, COVER, Effect, INTRO, LessonId, Phase, RuleSet, SUMMARY};

pub const COMPARE_1: Phase = Phase("COMPARE_1");
pub const COMPARE_2: Phase = Phase("COMPARE_2");
pub const COMPARE_3: Phase = Phase("COMPARE_3");

pub(crate) fn rules() -> RuleSet {
    RuleSet {
        lesson: LessonId::Sort3,
        drops: vec![],
        judgments: vec![
            judgment! {
                name: "compare a and b",
                phase: COMPARE_1,
                truth: |s| s.get("a").exceeds(s.get("b")),
                yes: {
                    effects: [Effect::Swap("a", "b")],
                    next: COMPARE_2,
                    feedback: "sort3.swapped",
                },
                no: { next: COMPARE_2, feedback: "sort3.no_swap" },
                wrong_yes: "sort3.wrong_yes",
                wrong_no: "sort3.wrong_no",
            },
            judgment! {
                name: "compare b and c",
                phase: COMPARE_2,
                truth: |s| s.get("b").exceeds(s.get("c")),
                yes: {
                    effects: [Effect::Swap("b", "c")],
                    next: COMPARE_3,
                    feedback: "sort3.swapped",
                },
                no: { next: COMPARE_3, feedback: "sort3.no_swap" },
                wrong_yes: "sort3.wrong_yes",
                wrong_no: "sort3.wrong_no",
            },
            judgment! {
                name: "compare a and b again",
                phase: COMPARE_3,
                truth: |s| s.get("a").exceeds(s.get("b")),
                yes: {
                    effects: [Effect::Swap("a", "b")],
                    next: COMPLETE,
                    feedback: "sort3.sorted",
                },
                no: { next: COMPLETE, feedback: "sort3.sorted" },
                wrong_yes: "sort3.wrong_yes",
                wrong_no: "sort3.wrong_no",
            },
        ],
        advances: vec![
            advance! {
                name: "open cover",
                phase: COVER,
                next: INTRO,
                feedback: "sort3.intro",
            },
            advance! {
                name: "start",
                phase: INTRO,
                next: COMPARE_1,
                feedback: "sort3.check_ab",
            },
            advance! {
                name: "show summary",
                phase: COMPLETE,
                next: SUMMARY,
                feedback: "common.mastered",
            },
        ],
        steps: &[(COMPARE_1, 1), (COMPARE_2, 2), (COMPARE_3, 3), (COMPLETE, 3)],
        prompts: &[
            (INTRO, "sort3.intro"),
            (COMPARE_1, "sort3.check_ab"),
            (COMPARE_2, "sort3.check_bc"),
            (COMPARE_3, "sort3.check_ab_again"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, Engine, Value};

    /// Answer every posed question truthfully until the lesson completes.
    fn play_honestly(engine: &mut Engine) {
        engine.advance(); // COVER -> INTRO
        engine.advance(); // INTRO -> COMPARE_1
        for _ in 0..3 {
            let out = engine.attempt_judgment(Answer::Yes);
            if out.correct == Some(false) {
                let out = engine.attempt_judgment(Answer::No);
                assert_eq!(out.correct, Some(true));
            }
        }
    }

    #[test]
    fn every_permutation_sorts_ascending() {
        let permutations = [
            [10, 20, 30],
            [10, 30, 20],
            [20, 10, 30],
            [20, 30, 10],
            [30, 10, 20],
            [30, 20, 10],
        ];
        for [a, b, c] in permutations {
            let mut engine = Engine::load(LessonId::Sort3);
            engine.apply_inputs(&[("a", a), ("b", b), ("c", c)]).unwrap();
            play_honestly(&mut engine);
            assert_eq!(engine.current_phase(), COMPLETE, "inputs {a},{b},{c}");
            assert_eq!(engine.current_step(), 3);
            assert_eq!(engine.value("a"), Value::Int(10), "inputs {a},{b},{c}");
            assert_eq!(engine.value("b"), Value::Int(20), "inputs {a},{b},{c}");
            assert_eq!(engine.value("c"), Value::Int(30), "inputs {a},{b},{c}");
        }
    }

    #[test]
    fn default_scenario_swaps_on_first_and_second_compare() {
        // a=30, b=10, c=20.
        let mut engine = Engine::load(LessonId::Sort3);
        engine.advance();
        engine.advance();

        let out = engine.attempt_judgment(Answer::Yes); // 30 > 10
        assert_eq!(out.correct, Some(true));
        assert_eq!(out.changed, vec!["a", "b"]);
        assert_eq!(engine.value("a"), Value::Int(10));
        assert_eq!(engine.value("b"), Value::Int(30));

        let out = engine.attempt_judgment(Answer::Yes); // 30 > 20
        assert_eq!(out.correct, Some(true));
        assert_eq!(engine.value("b"), Value::Int(20));
        assert_eq!(engine.value("c"), Value::Int(30));

        let out = engine.attempt_judgment(Answer::No); // 10 > 20 is false
        assert_eq!(out.correct, Some(true));
        assert!(out.complete);
    }

    #[test]
    fn wrong_answer_leaves_phase_and_values_alone() {
        let mut engine = Engine::load(LessonId::Sort3);
        engine.advance();
        engine.advance();

        // a=30 > b=10, so No is wrong.
        let before = engine.current_values();
        let out = engine.attempt_judgment(Answer::No);
        assert_eq!(out.correct, Some(false));
        assert_eq!(out.feedback, Some("sort3.wrong_no"));
        assert_eq!(engine.current_phase(), COMPARE_1);
        assert_eq!(engine.current_values(), before);
    }

    #[test]
    fn equal_values_mean_no_swap_is_correct() {
        let mut engine = Engine::load(LessonId::Sort3);
        engine.apply_inputs(&[("a", 10), ("b", 10), ("c", 10)]).unwrap();
        engine.advance();
        engine.advance();

        for _ in 0..3 {
            let out = engine.attempt_judgment(Answer::No);
            assert_eq!(out.correct, Some(true));
        }
        assert_eq!(engine.current_phase(), COMPLETE);
    }
}
