//! FIND_MAX: find the biggest of `a`, `b`, `c` with a running maximum.
//!
//! The learner seeds `max` with `a`, then answers a comparison question for
//! each remaining variable; a Yes that matches the live store unlocks the
//! drag that updates `max`, a correct No skips straight to the next check.

use crate::{COMPLETE, COVER, Effect, INTRO, LessonId, Phase, RuleSet, SUMMARY, SourcePat};

pub const DECLARE_MAX: Phase = Phase("DECLARE_MAX");
pub const INIT_MAX: Phase = Phase("INIT_MAX");
pub const CHECK_B: Phase = Phase("CHECK_B");
pub const UPDATE_MAX_B: Phase = Phase("UPDATE_MAX_B");
pub const CHECK_C: Phase = Phase("CHECK_C");
pub const UPDATE_MAX_C: Phase = Phase("UPDATE_MAX_C");

pub(crate) fn rules() -> RuleSet {
    RuleSet {
        lesson: LessonId::FindMax,
        drops: vec![
            drop_rule! {
                name: "seed max with a",
                phase: INIT_MAX,
                source: SourcePat::Var("a"),
                target: "max",
                effects: [Effect::Copy { dst: "max", src: "a" }],
                next: CHECK_B,
                feedback: "find_max.check_b",
            },
            drop_rule! {
                name: "update max from b",
                phase: UPDATE_MAX_B,
                source: SourcePat::Var("b"),
                target: "max",
                effects: [Effect::Copy { dst: "max", src: "b" }],
                next: CHECK_C,
                feedback: "find_max.check_c",
            },
            drop_rule! {
                name: "update max from c",
                phase: UPDATE_MAX_C,
                source: SourcePat::Var("c"),
                target: "max",
                effects: [Effect::Copy { dst: "max", src: "c" }],
                next: COMPLETE,
                feedback: "find_max.found",
            },
        ],
        judgments: vec![
            judgment! {
                name: "is b greater than max",
                phase: CHECK_B,
                truth: |s| s.get("b").exceeds(s.get("max")),
                yes: { next: UPDATE_MAX_B, feedback: "find_max.b_bigger" },
                no: { next: CHECK_C, feedback: "find_max.b_not_bigger" },
                wrong_yes: "find_max.wrong_yes_b",
                wrong_no: "find_max.wrong_no_b",
            },
            judgment! {
                name: "is c greater than max",
                phase: CHECK_C,
                truth: |s| s.get("c").exceeds(s.get("max")),
                yes: { next: UPDATE_MAX_C, feedback: "find_max.c_bigger" },
                no: { next: COMPLETE, feedback: "find_max.found" },
                wrong_yes: "find_max.wrong_yes_c",
                wrong_no: "find_max.wrong_no_c",
            },
        ],
        advances: vec![
            advance! {
                name: "open cover",
                phase: COVER,
                next: INTRO,
                feedback: "find_max.intro",
            },
            advance! {
                name: "start",
                phase: INTRO,
                next: DECLARE_MAX,
                feedback: "find_max.start",
            },
            advance! {
                name: "declare max",
                phase: DECLARE_MAX,
                next: INIT_MAX,
                feedback: "find_max.max_declared",
            },
            advance! {
                name: "show summary",
                phase: COMPLETE,
                next: SUMMARY,
                feedback: "common.mastered",
            },
        ],
        steps: &[
            (DECLARE_MAX, 1),
            (INIT_MAX, 1),
            (CHECK_B, 2),
            (UPDATE_MAX_B, 3),
            (CHECK_C, 4),
            (UPDATE_MAX_C, 5),
            (COMPLETE, 5),
        ],
        prompts: &[
            (INTRO, "find_max.intro"),
            (INIT_MAX, "find_max.max_declared"),
            (CHECK_B, "find_max.check_b"),
            (CHECK_C, "find_max.check_c"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, Engine, Entity, Value};

    fn play_to_check_b(engine: &mut Engine) {
        engine.advance(); // COVER -> INTRO
        engine.advance(); // INTRO -> DECLARE_MAX
        engine.advance(); // DECLARE_MAX -> INIT_MAX
        engine.attempt_drop(Entity::Var("a"), "max");
    }

    #[test]
    fn default_scenario_finds_thirty() {
        // a=10, b=30, c=20: yes at CHECK_B, no at CHECK_C.
        let mut engine = Engine::load(LessonId::FindMax);
        assert_eq!(engine.value("max"), Value::Garbage);

        play_to_check_b(&mut engine);
        assert_eq!(engine.current_phase(), CHECK_B);
        assert_eq!(engine.value("max"), Value::Int(10));

        let out = engine.attempt_judgment(Answer::Yes);
        assert!(out.matched);
        assert_eq!(out.correct, Some(true));
        assert_eq!(engine.current_phase(), UPDATE_MAX_B);

        engine.attempt_drop(Entity::Var("b"), "max");
        assert_eq!(engine.value("max"), Value::Int(30));
        assert_eq!(engine.current_phase(), CHECK_C);

        let out = engine.attempt_judgment(Answer::No);
        assert!(out.matched);
        assert_eq!(out.correct, Some(true));
        assert!(out.complete);
        assert_eq!(engine.current_phase(), COMPLETE);
        assert_eq!(engine.current_step(), 5);
        assert_eq!(engine.value("max"), Value::Int(30));
    }

    #[test]
    fn wrong_answer_never_advances() {
        let mut engine = Engine::load(LessonId::FindMax);
        play_to_check_b(&mut engine);

        // b=30 > max=10, so No is wrong.
        let out = engine.attempt_judgment(Answer::No);
        assert!(out.matched);
        assert_eq!(out.correct, Some(false));
        assert_eq!(out.feedback, Some("find_max.wrong_no_b"));
        assert_eq!(engine.current_phase(), CHECK_B);
        assert_eq!(engine.value("max"), Value::Int(10));

        // The question can be retried until answered correctly.
        let out = engine.attempt_judgment(Answer::Yes);
        assert_eq!(out.correct, Some(true));
        assert_eq!(engine.current_phase(), UPDATE_MAX_B);
    }

    #[test]
    fn truth_is_evaluated_against_the_live_store() {
        // All-equal preset: strictly-greater is false at both checks, so the
        // honest path is No, No and max keeps a's value.
        let mut engine = Engine::load(LessonId::FindMax);
        engine.apply_inputs(&[("a", 15), ("b", 15), ("c", 15)]).unwrap();
        play_to_check_b(&mut engine);

        assert_eq!(engine.attempt_judgment(Answer::Yes).correct, Some(false));
        assert_eq!(engine.attempt_judgment(Answer::No).correct, Some(true));
        assert_eq!(engine.current_phase(), CHECK_C);
        assert_eq!(engine.attempt_judgment(Answer::No).correct, Some(true));
        assert_eq!(engine.value("max"), Value::Int(15));
        assert_eq!(engine.current_phase(), COMPLETE);
    }

    #[test]
    fn descending_inputs_take_the_no_no_path() {
        let mut engine = Engine::load(LessonId::FindMax);
        engine.apply_inputs(&[("a", 30), ("b", 20), ("c", 10)]).unwrap();
        play_to_check_b(&mut engine);

        engine.attempt_judgment(Answer::No);
        engine.attempt_judgment(Answer::No);
        assert_eq!(engine.current_phase(), COMPLETE);
        assert_eq!(engine.value("max"), Value::Int(30));
    }

    #[test]
    fn drops_are_rejected_while_a_question_is_posed() {
        let mut engine = Engine::load(LessonId::FindMax);
        play_to_check_b(&mut engine);

        let out = engine.attempt_drop(Entity::Var("b"), "max");
        assert!(!out.matched);
        assert_eq!(engine.current_phase(), CHECK_B);
        assert_eq!(engine.value("max"), Value::Int(10));
    }
}
