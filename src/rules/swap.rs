//! SWAP: exchange the contents of `a` and `b` through a helper box.
//!
//! The lesson forces the three-copy dance (`temp = a; a = b; b = temp`)
//! rather than a single swap effect: each drag is one copy, and the
//! intermediate states are visible in the store.

use crate::{COMPLETE, COVER, Effect, INTRO, LessonId, Phase, RuleSet, SUMMARY, SourcePat};

pub const DECLARE_TEMP: Phase = Phase("DECLARE_TEMP");
pub const COPY_A_TEMP: Phase = Phase("COPY_A_TEMP");
pub const COPY_B_A: Phase = Phase("COPY_B_A");
pub const COPY_TEMP_B: Phase = Phase("COPY_TEMP_B");

pub(crate) fn rules() -> RuleSet {
    RuleSet {
        lesson: LessonId::Swap,
        drops: vec![
            drop_rule! {
                name: "save a into temp",
                phase: COPY_A_TEMP,
                source: SourcePat::Var("a"),
                target: "temp",
                guard: |s| s.get("a").is_int(),
                effects: [Effect::Copy { dst: "temp", src: "a" }],
                next: COPY_B_A,
                feedback: "swap.saved",
            },
            drop_rule! {
                name: "move b into a",
                phase: COPY_B_A,
                source: SourcePat::Var("b"),
                target: "a",
                effects: [Effect::Copy { dst: "a", src: "b" }],
                next: COPY_TEMP_B,
                feedback: "swap.moved",
            },
            drop_rule! {
                name: "restore temp into b",
                phase: COPY_TEMP_B,
                source: SourcePat::Var("temp"),
                target: "b",
                effects: [Effect::Copy { dst: "b", src: "temp" }],
                next: COMPLETE,
                feedback: "common.complete",
            },
        ],
        judgments: vec![],
        advances: vec![
            advance! {
                name: "open cover",
                phase: COVER,
                next: INTRO,
                feedback: "swap.intro",
            },
            advance! {
                name: "start",
                phase: INTRO,
                next: DECLARE_TEMP,
                feedback: "swap.start",
            },
            advance! {
                name: "declare temp",
                phase: DECLARE_TEMP,
                next: COPY_A_TEMP,
                feedback: "swap.temp_declared",
            },
            advance! {
                name: "show summary",
                phase: COMPLETE,
                next: SUMMARY,
                feedback: "common.mastered",
            },
        ],
        steps: &[
            (DECLARE_TEMP, 1),
            (COPY_A_TEMP, 1),
            (COPY_B_A, 2),
            (COPY_TEMP_B, 3),
            (COMPLETE, 4),
        ],
        prompts: &[(INTRO, "swap.intro"), (COPY_A_TEMP, "swap.temp_declared")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, Entity, Value};

    fn play_to_interactive(engine: &mut Engine) {
        engine.advance(); // COVER -> INTRO
        engine.advance(); // INTRO -> DECLARE_TEMP
        engine.advance(); // DECLARE_TEMP -> COPY_A_TEMP
    }

    #[test]
    fn full_scenario_swaps_a_and_b() {
        let mut engine = Engine::load(LessonId::Swap);
        play_to_interactive(&mut engine);
        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.value("a"), Value::Int(10));
        assert_eq!(engine.value("b"), Value::Int(20));
        assert_eq!(engine.value("temp"), Value::Garbage);

        let out = engine.attempt_drop(Entity::Var("a"), "temp");
        assert!(out.matched);
        assert_eq!(engine.value("temp"), Value::Int(10));
        assert_eq!(engine.current_step(), 2);

        let out = engine.attempt_drop(Entity::Var("b"), "a");
        assert!(out.matched);
        assert_eq!(engine.value("a"), Value::Int(20));
        assert_eq!(engine.current_step(), 3);

        let out = engine.attempt_drop(Entity::Var("temp"), "b");
        assert!(out.matched);
        assert!(out.complete);
        assert_eq!(engine.current_phase(), COMPLETE);
        assert_eq!(engine.current_step(), 4);
        assert_eq!(engine.value("a"), Value::Int(20));
        assert_eq!(engine.value("b"), Value::Int(10));
        assert_eq!(engine.value("temp"), Value::Int(10));
    }

    #[test]
    fn skipping_the_helper_is_a_silent_noop() {
        let mut engine = Engine::load(LessonId::Swap);
        play_to_interactive(&mut engine);

        // Dragging b onto a before saving a would destroy a's value; no
        // rule exists for it in this phase.
        let out = engine.attempt_drop(Entity::Var("b"), "a");
        assert!(!out.matched);
        assert_eq!(engine.current_phase(), COPY_A_TEMP);
        assert_eq!(engine.value("a"), Value::Int(10));
    }

    #[test]
    fn negative_preset_values_swap_cleanly() {
        let mut engine = Engine::load(LessonId::Swap);
        engine.apply_inputs(&[("a", -5), ("b", 5)]).unwrap();
        play_to_interactive(&mut engine);
        engine.attempt_drop(Entity::Var("a"), "temp");
        engine.attempt_drop(Entity::Var("b"), "a");
        engine.attempt_drop(Entity::Var("temp"), "b");
        assert_eq!(engine.value("a"), Value::Int(5));
        assert_eq!(engine.value("b"), Value::Int(-5));
    }

    #[test]
    fn completed_lesson_rejects_further_drops() {
        let mut engine = Engine::load(LessonId::Swap);
        play_to_interactive(&mut engine);
        engine.attempt_drop(Entity::Var("a"), "temp");
        engine.attempt_drop(Entity::Var("b"), "a");
        engine.attempt_drop(Entity::Var("temp"), "b");
        assert_eq!(engine.current_phase(), COMPLETE);

        let before = engine.current_values();
        let out = engine.attempt_drop(Entity::Var("a"), "temp");
        assert!(!out.matched);
        assert_eq!(engine.current_values(), before);
        assert_eq!(engine.current_phase(), COMPLETE);
    }
}
