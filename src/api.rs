//! The embedder-facing engine API.
//!
//! An [`Engine`] holds one lesson session: the loaded definition, the
//! variable store, and the current phase. Interaction happens through three
//! entrypoints (`attempt_drop`, `attempt_judgment`, `advance`), each of which
//! resolves against the lesson's rule tables and returns an [`Outcome`].
//! Inputs with no matching rule are silent no-ops: the outcome reports a miss
//! and nothing else moves.

use std::fmt;

use crate::content::{self, LessonDef};
use crate::engine::{self, feedback};
use crate::rules;
use crate::{COVER, Entity, Lang, LessonId, Phase, PhaseFlags, RuleSet, Value, VarStore};

/// The learner's answer to a posed yes/no judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    /// The scenario input names a variable the lesson does not declare.
    UnknownVariable(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnknownVariable(name) => write!(f, "unknown variable '{name}'"),
        }
    }
}

impl std::error::Error for InputError {}

/// The result of one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// A rule matched the input. False means the input was discarded.
    pub matched: bool,
    /// For judgments: whether the answer agreed with the live store.
    /// `None` for drops and advances.
    pub correct: Option<bool>,
    /// Feedback message key, renderable via [`Engine::render_feedback`].
    pub feedback: Option<&'static str>,
    /// Variable names whose value actually changed, in effect order.
    pub changed: Vec<&'static str>,
    /// Phase after the interaction.
    pub phase: Phase,
    /// Step after the interaction.
    pub step: u32,
    /// The lesson's interactive sequence has finished.
    pub complete: bool,
}

impl Outcome {
    fn miss(phase: Phase, step: u32) -> Outcome {
        Outcome {
            matched: false,
            correct: None,
            feedback: None,
            changed: Vec::new(),
            phase,
            step,
            complete: false,
        }
    }
}

/// One lesson session.
pub struct Engine {
    lesson: &'static LessonDef,
    rules: &'static RuleSet,
    /// Scenario inputs in force for this session; the source of value-pill
    /// literals and of seeded variables on (re)start.
    initial: Vec<(&'static str, i64)>,
    store: VarStore,
    phase: Phase,
}

impl Engine {
    /// Start a session with the lesson's default scenario inputs.
    pub fn load(id: LessonId) -> Engine {
        let lesson = content::lesson(id);
        let mut engine = Engine {
            lesson,
            rules: rules::rule_set(id),
            initial: lesson.initial_values.to_vec(),
            store: VarStore::new(),
            phase: COVER,
        };
        engine.reset();
        engine
    }

    /// Replace the scenario inputs and restart the session.
    ///
    /// Unlisted seeded variables keep their lesson defaults; a name the
    /// lesson does not declare rejects the whole call and the session is
    /// left untouched.
    pub fn apply_inputs(&mut self, inputs: &[(&str, i64)]) -> Result<(), InputError> {
        let mut next = self.lesson.initial_values.to_vec();
        for (name, value) in inputs {
            match next.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = *value,
                None => return Err(InputError::UnknownVariable((*name).to_string())),
            }
        }
        self.initial = next;
        self.reset();
        Ok(())
    }

    /// Restart the session, keeping the current scenario inputs.
    pub fn reset(&mut self) {
        let slots: Vec<(&'static str, Value)> = self
            .lesson
            .variables
            .iter()
            .map(|var| {
                let value = if var.seeded {
                    self.initial
                        .iter()
                        .find(|(n, _)| *n == var.name)
                        .map(|(_, v)| Value::Int(*v))
                        .unwrap_or(Value::Garbage)
                } else {
                    Value::Garbage
                };
                (var.name, value)
            })
            .collect();
        self.store.reset(&slots);
        self.phase = COVER;
    }

    /// Alias for [`Engine::reset`]; the replay button.
    pub fn replay(&mut self) {
        self.reset();
    }

    pub fn lesson(&self) -> &'static LessonDef {
        self.lesson
    }

    pub fn current_phase(&self) -> Phase {
        self.phase
    }

    pub fn current_step(&self) -> u32 {
        engine::step_for(self.rules, self.phase)
    }

    /// Snapshot of every declared variable, in declaration order.
    pub fn current_values(&self) -> Vec<(&'static str, Value)> {
        self.store.snapshot()
    }

    pub fn value(&self, name: &str) -> Value {
        self.store.get(name)
    }

    /// The scenario inputs in force for this session.
    pub fn initial_values(&self) -> &[(&'static str, i64)] {
        &self.initial
    }

    /// Input-gating flags for the current phase, derived from the rule
    /// tables.
    pub fn phase_flags(&self) -> PhaseFlags {
        self.rules.phase_flags(self.phase)
    }

    /// The standing prompt key for the current phase, if it has one.
    pub fn prompt_key(&self) -> Option<&'static str> {
        self.rules.prompt_for(self.phase)
    }

    /// The entities the current phase accepts as drag sources. Renderers use
    /// this to enable drag handles.
    pub fn draggable(&self) -> Vec<Entity> {
        self.rules
            .drops
            .iter()
            .filter(|rule| rule.phase == self.phase)
            .filter_map(|rule| match rule.source {
                crate::SourcePat::Var(name) => Some(Entity::Var(name)),
                crate::SourcePat::PillOf(var) => self
                    .initial
                    .iter()
                    .find(|(n, _)| *n == var)
                    .map(|(_, v)| Entity::Pill(*v)),
            })
            .collect()
    }

    /// Drop `source` onto the variable box `target`.
    pub fn attempt_drop(&mut self, source: Entity, target: &str) -> Outcome {
        let Some(rule) = engine::find_drop(self.rules, self.phase, source, target, &self.initial, &self.store)
        else {
            return Outcome::miss(self.phase, self.current_step());
        };

        let pill = match source {
            Entity::Pill(n) => Some(n),
            Entity::Var(_) => None,
        };
        let changed = engine::apply_effects(&mut self.store, rule.effects, pill);
        self.phase = rule.next;
        self.finish(None, Some(rule.feedback), changed)
    }

    /// Answer the judgment posed in the current phase.
    ///
    /// A wrong answer is a matched interaction that moves nothing: the phase
    /// stays put so the question can be retried.
    pub fn attempt_judgment(&mut self, answer: Answer) -> Outcome {
        let Some(rule) = engine::find_judgment(self.rules, self.phase) else {
            return Outcome::miss(self.phase, self.current_step());
        };

        let truth = (rule.truth)(&self.store);
        let said_yes = answer == Answer::Yes;
        if said_yes != truth {
            let key = if said_yes { rule.wrong_yes } else { rule.wrong_no };
            return self.finish(Some(false), Some(key), Vec::new());
        }

        let branch = if truth { &rule.yes } else { &rule.no };
        let changed = engine::apply_effects(&mut self.store, branch.effects, None);
        self.phase = branch.next;
        let feedback = branch.feedback;
        self.finish(Some(true), Some(feedback), changed)
    }

    /// Press the advance button (cover screens, declarations, the
    /// complete-to-summary transition). An external scheduler may call this
    /// on a timer for passive playback.
    pub fn advance(&mut self) -> Outcome {
        let Some(rule) = engine::find_advance(self.rules, self.phase) else {
            return Outcome::miss(self.phase, self.current_step());
        };

        let changed = engine::apply_effects(&mut self.store, rule.effects, None);
        self.phase = rule.next;
        self.finish(None, Some(rule.feedback), changed)
    }

    /// Render a feedback key against the live store and the session's
    /// scenario inputs.
    pub fn render_feedback(&self, key: &str, lang: Lang) -> String {
        feedback::render(key, lang, &self.store, &self.initial)
    }

    fn finish(&self, correct: Option<bool>, feedback: Option<&'static str>, changed: Vec<&'static str>) -> Outcome {
        Outcome {
            matched: true,
            correct,
            feedback,
            changed,
            phase: self.phase,
            step: self.current_step(),
            complete: self.phase_flags().contains(PhaseFlags::TERMINAL),
        }
    }
}

/// All lesson definitions in presentation order.
pub fn lessons() -> &'static [LessonDef] {
    content::all()
}

/// The step a phase projects to in the given lesson, without a session.
pub fn step_for(id: LessonId, phase: Phase) -> u32 {
    engine::step_for(rules::rule_set(id), phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_starts_on_the_cover_at_step_zero() {
        let engine = Engine::load(LessonId::Swap);
        assert_eq!(engine.current_phase(), COVER);
        assert_eq!(engine.current_step(), 0);
        assert!(engine.phase_flags().contains(PhaseFlags::PRE_GAME));
        assert!(engine.phase_flags().contains(PhaseFlags::ACCEPTS_ADVANCE));
        assert!(!engine.phase_flags().contains(PhaseFlags::ACCEPTS_DROP));
    }

    #[test]
    fn drops_are_rejected_before_the_game_starts() {
        let mut engine = Engine::load(LessonId::Swap);
        let out = engine.attempt_drop(Entity::Var("a"), "temp");
        assert!(!out.matched);
        assert_eq!(out.changed, Vec::<&str>::new());
        assert_eq!(engine.current_phase(), COVER);
    }

    #[test]
    fn apply_inputs_rejects_unknown_names_and_keeps_the_session() {
        let mut engine = Engine::load(LessonId::Swap);
        engine.advance();

        let err = engine.apply_inputs(&[("a", 1), ("zz", 2)]).unwrap_err();
        assert_eq!(err, InputError::UnknownVariable("zz".to_string()));
        // The failed call neither restarted nor rebound anything.
        assert_ne!(engine.current_phase(), COVER);
        assert_eq!(engine.initial_values(), &[("a", 10), ("b", 20)]);
    }

    #[test]
    fn apply_inputs_fills_unlisted_names_from_the_defaults() {
        let mut engine = Engine::load(LessonId::FindMax);
        engine.apply_inputs(&[("c", 90)]).unwrap();
        assert_eq!(engine.initial_values(), &[("a", 10), ("b", 30), ("c", 90)]);
        assert_eq!(engine.current_phase(), COVER);
    }

    #[test]
    fn draggable_lists_pills_for_the_session_inputs() {
        let mut engine = Engine::load(LessonId::Assignment);
        engine.apply_inputs(&[("a", 999), ("b", 0)]).unwrap();
        engine.advance();
        engine.advance();
        engine.advance();
        assert_eq!(engine.draggable(), vec![Entity::Pill(999)]);
    }

    #[test]
    fn draggable_lists_variables_in_interactive_phases() {
        let mut engine = Engine::load(LessonId::Swap);
        engine.advance();
        engine.advance();
        engine.advance();
        assert_eq!(engine.draggable(), vec![Entity::Var("a")]);
    }

    #[test]
    fn judgment_phases_gate_out_drops_and_advances() {
        let mut engine = Engine::load(LessonId::Sort3);
        engine.advance();
        engine.advance();
        let flags = engine.phase_flags();
        assert!(flags.contains(PhaseFlags::ACCEPTS_JUDGMENT));
        assert!(!flags.contains(PhaseFlags::ACCEPTS_DROP));
        assert!(!flags.contains(PhaseFlags::ACCEPTS_ADVANCE));

        assert!(!engine.advance().matched);
        assert_eq!(engine.prompt_key(), Some("sort3.check_ab"));
    }

    #[test]
    fn outcome_feedback_renders_with_live_values() {
        let mut engine = Engine::load(LessonId::Assignment);
        engine.advance();
        engine.advance();
        engine.advance();
        let out = engine.attempt_drop(Entity::Pill(10), "a");
        let key = out.feedback.unwrap();
        let text = engine.render_feedback(key, Lang::En);
        assert_eq!(text, "Great! A is now 10. Now clean box B and put 20 in it!");
    }

    #[test]
    fn step_for_projects_without_a_session() {
        assert_eq!(step_for(LessonId::Swap, COVER), 0);
        assert_eq!(step_for(LessonId::Swap, crate::COMPLETE), 4);
        assert_eq!(step_for(LessonId::FindMax, crate::COMPLETE), 5);
    }

    #[test]
    fn lessons_are_listed_in_presentation_order() {
        let ids: Vec<LessonId> = lessons().iter().map(|l| l.id).collect();
        assert_eq!(ids, LessonId::ALL.to_vec());
    }

    #[test]
    fn complete_advances_to_the_summary() {
        let mut engine = Engine::load(LessonId::Sort3);
        engine.advance();
        engine.advance();
        engine.attempt_judgment(Answer::Yes);
        engine.attempt_judgment(Answer::Yes);
        engine.attempt_judgment(Answer::No);
        assert_eq!(engine.current_phase(), crate::COMPLETE);

        let out = engine.advance();
        assert!(out.matched);
        assert!(out.complete);
        assert_eq!(out.feedback, Some("common.mastered"));
        assert_eq!(engine.current_phase(), crate::SUMMARY);
        assert_eq!(engine.current_step(), 0);

        // The summary is terminal: nothing matches anymore.
        assert!(!engine.advance().matched);
    }
}
