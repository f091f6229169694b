//! ASSIGNMENT: declare two boxes, initialize them from value pills, then
//! copy `a` into `b` (`b = a`).
//!
//! The initialization phases are the only place value pills appear: the
//! learner drags the raw literal into the box, in order (`a` first, then
//! `b`), before the assignment drag unlocks.

use crate::{
    COMPLETE, COVER, Effect, INTRO, LessonId, Phase, RuleSet, SUMMARY, SourcePat,
};

pub const DECLARE: Phase = Phase("DECLARE");
pub const INIT_A: Phase = Phase("INIT_A");
pub const INIT_B: Phase = Phase("INIT_B");
pub const ASSIGN_ACTION: Phase = Phase("ASSIGN_ACTION");

pub(crate) fn rules() -> RuleSet {
    RuleSet {
        lesson: LessonId::Assignment,
        drops: vec![
            drop_rule! {
                name: "init a from pill",
                phase: INIT_A,
                source: SourcePat::PillOf("a"),
                target: "a",
                effects: [Effect::SetFromPill("a")],
                next: INIT_B,
                feedback: "assignment.init_a",
            },
            drop_rule! {
                name: "init b from pill",
                phase: INIT_B,
                source: SourcePat::PillOf("b"),
                target: "b",
                effects: [Effect::SetFromPill("b")],
                next: ASSIGN_ACTION,
                feedback: "assignment.init_b",
            },
            drop_rule! {
                name: "assign b = a",
                phase: ASSIGN_ACTION,
                source: SourcePat::Var("a"),
                target: "b",
                guard: |s| s.get("a").is_int(),
                effects: [Effect::Copy { dst: "b", src: "a" }],
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
                feedback: "assignment.intro",
            },
            advance! {
                name: "start",
                phase: INTRO,
                next: DECLARE,
                feedback: "assignment.start",
            },
            advance! {
                name: "declare a and b",
                phase: DECLARE,
                next: INIT_A,
                feedback: "assignment.declared",
            },
            advance! {
                name: "show summary",
                phase: COMPLETE,
                next: SUMMARY,
                feedback: "common.mastered",
            },
        ],
        steps: &[(DECLARE, 1), (INIT_A, 1), (INIT_B, 2), (ASSIGN_ACTION, 3), (COMPLETE, 4)],
        prompts: &[(INTRO, "assignment.intro"), (INIT_A, "assignment.declared")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, Engine, Entity, Value};

    fn play_to_interactive(engine: &mut Engine) {
        engine.advance(); // COVER -> INTRO
        engine.advance(); // INTRO -> DECLARE
        engine.advance(); // DECLARE -> INIT_A
    }

    #[test]
    fn full_scenario_ends_with_b_equal_a() {
        let mut engine = Engine::load(LessonId::Assignment);
        assert_eq!(engine.current_phase(), COVER);
        assert_eq!(engine.current_step(), 0);

        play_to_interactive(&mut engine);
        assert_eq!(engine.current_phase(), INIT_A);
        assert_eq!(engine.current_step(), 1);

        let out = engine.attempt_drop(Entity::Pill(10), "a");
        assert!(out.matched);
        assert_eq!(out.changed, vec!["a"]);
        assert_eq!(engine.current_phase(), INIT_B);
        assert_eq!(engine.current_step(), 2);

        let out = engine.attempt_drop(Entity::Pill(20), "b");
        assert!(out.matched);
        assert_eq!(engine.current_phase(), ASSIGN_ACTION);
        assert_eq!(engine.current_step(), 3);

        let out = engine.attempt_drop(Entity::Var("a"), "b");
        assert!(out.matched);
        assert!(out.complete);
        assert_eq!(engine.current_phase(), COMPLETE);
        assert_eq!(engine.current_step(), 4);
        assert_eq!(engine.value("a"), Value::Int(10));
        assert_eq!(engine.value("b"), Value::Int(10));
    }

    #[test]
    fn boxes_hold_garbage_until_initialized() {
        let mut engine = Engine::load(LessonId::Assignment);
        assert_eq!(engine.value("a"), Value::Garbage);
        assert_eq!(engine.value("b"), Value::Garbage);

        play_to_interactive(&mut engine);
        engine.attempt_drop(Entity::Pill(10), "a");
        assert_eq!(engine.value("a"), Value::Int(10));
        assert_eq!(engine.value("b"), Value::Garbage);
    }

    #[test]
    fn wrong_pill_and_wrong_order_are_silent_noops() {
        let mut engine = Engine::load(LessonId::Assignment);
        play_to_interactive(&mut engine);

        // The b-pill is not accepted while a is being initialized.
        let out = engine.attempt_drop(Entity::Pill(20), "a");
        assert!(!out.matched);
        assert_eq!(engine.current_phase(), INIT_A);
        assert_eq!(engine.value("a"), Value::Garbage);

        // Repeating the miss changes nothing either time.
        let before = engine.current_values();
        let out = engine.attempt_drop(Entity::Pill(20), "a");
        assert!(!out.matched);
        assert_eq!(engine.current_values(), before);

        // Dragging a variable before the assign phase is also a miss.
        let out = engine.attempt_drop(Entity::Var("a"), "b");
        assert!(!out.matched);
        assert_eq!(engine.current_phase(), INIT_A);
    }

    #[test]
    fn custom_inputs_rebind_the_pills() {
        let mut engine = Engine::load(LessonId::Assignment);
        engine.apply_inputs(&[("a", 999), ("b", 0)]).unwrap();
        play_to_interactive(&mut engine);

        // The old default pill no longer matches.
        assert!(!engine.attempt_drop(Entity::Pill(10), "a").matched);
        assert!(engine.attempt_drop(Entity::Pill(999), "a").matched);
        assert!(engine.attempt_drop(Entity::Pill(0), "b").matched);
        assert!(engine.attempt_drop(Entity::Var("a"), "b").matched);
        assert_eq!(engine.value("b"), Value::Int(999));
    }

    #[test]
    fn judgments_do_not_apply_to_this_lesson() {
        let mut engine = Engine::load(LessonId::Assignment);
        play_to_interactive(&mut engine);
        let out = engine.attempt_judgment(Answer::Yes);
        assert!(!out.matched);
        assert_eq!(engine.current_phase(), INIT_A);
    }

    #[test]
    fn replay_returns_to_cover_with_garbage_boxes() {
        let mut engine = Engine::load(LessonId::Assignment);
        play_to_interactive(&mut engine);
        engine.attempt_drop(Entity::Pill(10), "a");
        engine.replay();
        assert_eq!(engine.current_phase(), COVER);
        assert_eq!(engine.current_step(), 0);
        assert_eq!(engine.value("a"), Value::Garbage);
    }
}
