extern crate self as gulu;

#[macro_use]
mod macros;
mod api;
mod content;
mod drill;
mod engine;
mod explain;
mod rules;

pub use api::{Answer, Engine, InputError, Outcome, lessons, step_for};
pub use content::{LessonDef, Preset, Question, QuestionKind, VarSpec, Word};
pub use drill::{Drill, DrillEvent, DrillState, Quiz, Stage};
pub use engine::feedback;
pub use engine::store::VarStore;
pub use explain::{ExplainBackend, ExplainError, Snapshot, build_prompt, explain_with};

use bitflags::bitflags;

// --- Core vocabulary --------------------------------------------------------

/// Identifies one teaching scenario. Each lesson carries its own variable set
/// and transition table (see `src/rules/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonId {
    Assignment,
    Swap,
    FindMax,
    Sort3,
}

impl LessonId {
    pub const ALL: [LessonId; 4] = [LessonId::Assignment, LessonId::Swap, LessonId::FindMax, LessonId::Sort3];

    /// Stable machine name, used by the CLI and the explanation snapshot.
    pub fn name(self) -> &'static str {
        match self {
            LessonId::Assignment => "assignment",
            LessonId::Swap => "swap",
            LessonId::FindMax => "find-max",
            LessonId::Sort3 => "sort3",
        }
    }

    pub fn from_name(s: &str) -> Option<LessonId> {
        match s {
            "assignment" => Some(LessonId::Assignment),
            "swap" => Some(LessonId::Swap),
            "find-max" | "find_max" | "max" => Some(LessonId::FindMax),
            "sort3" | "sort-3" | "sort" => Some(LessonId::Sort3),
            _ => None,
        }
    }
}

/// Display language for learner-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Cn,
}

/// A bilingual string pair. All learner-facing content is authored in both
/// languages; there is no fallback between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub cn: &'static str,
}

impl Text {
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Cn => self.cn,
        }
    }
}

/// Contents of one variable slot.
///
/// `Garbage` marks a declared-but-uninitialized variable. It is distinct from
/// every integer and renders as "?"; the comparison helpers below treat it as
/// incomparable, so a garbage read can never pass for zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Garbage,
}

impl Value {
    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n),
            Value::Garbage => None,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Strict greater-than. False whenever either side is garbage.
    pub fn exceeds(self, other: Value) -> bool {
        matches!((self, other), (Value::Int(a), Value::Int(b)) if a > b)
    }

    pub fn display(self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Garbage => "?".to_string(),
        }
    }
}

/// A drag source or drop target on the game canvas: either a named variable
/// box or a "value pill" (a raw literal offered to the learner, not yet
/// stored anywhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Var(&'static str),
    Pill(i64),
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Var(name) => write!(f, "{name}"),
            Entity::Pill(n) => write!(f, "VAL:{n}"),
        }
    }
}

/// A named micro-state within a lesson's interactive sequence. Opaque and
/// scoped to one lesson type; compared by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phase(pub &'static str);

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

// Phases shared by every lesson. Lesson-specific phases live with their rule
// sets in `src/rules/`.
pub const COVER: Phase = Phase("COVER");
pub const INTRO: Phase = Phase("INTRO");
pub const COMPLETE: Phase = Phase("COMPLETE");
pub const SUMMARY: Phase = Phase("SUMMARY");

bitflags! {
    /// Which input kinds the current phase accepts, plus its coarse class.
    /// Derived from the lesson's rule tables; renderers use this to gate
    /// controls (drag handles, yes/no buttons, advance button, replay).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PhaseFlags: u8 {
        const ACCEPTS_DROP     = 1 << 0;
        const ACCEPTS_JUDGMENT = 1 << 1;
        const ACCEPTS_ADVANCE  = 1 << 2;
        const PRE_GAME         = 1 << 3;
        const TERMINAL         = 1 << 4;
    }
}

// --- Rule shapes ------------------------------------------------------------

/// Precondition over the variable store. Rules whose guard fails are treated
/// as lookup misses: the drop is discarded silently.
pub(crate) type Guard = fn(&VarStore) -> bool;

/// What a drop rule accepts as its drag source.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SourcePat {
    /// The variable box with this name.
    Var(&'static str),
    /// A value pill carrying the lesson's *initial* value of the named
    /// variable. Matching against the initial-value table (rather than a
    /// hardcoded literal) keeps preset and custom inputs working with one
    /// rule.
    PillOf(&'static str),
}

/// One variable mutation produced by a matched rule. Effects are staged
/// against the pre-transition store and applied together, so a rule like
/// `Swap` reads consistent values and a failed match never writes at all.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Effect {
    /// Write the dragged pill's literal into the named variable.
    SetFromPill(&'static str),
    /// Copy the current value of `src` into `dst`.
    Copy { dst: &'static str, src: &'static str },
    /// Exchange the values of two variables.
    Swap(&'static str, &'static str),
}

/// A drag-and-drop transition rule, looked up by (phase, source, target).
/// At most one rule may match a given triple; ambiguous tables are a defect.
pub(crate) struct DropRule {
    pub name: &'static str,
    pub phase: Phase,
    pub source: SourcePat,
    pub target: &'static str,
    pub guard: Guard,
    pub effects: &'static [Effect],
    pub next: Phase,
    /// Feedback message key (bilingual; see `engine::feedback`).
    pub feedback: &'static str,
}

impl std::fmt::Debug for DropRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropRule")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("target", &self.target)
            .field("next", &self.next)
            .finish()
    }
}

/// Where a judgment leads when the learner answers it correctly.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Branch {
    pub effects: &'static [Effect],
    pub next: Phase,
    pub feedback: &'static str,
}

/// A yes/no comparison question posed in one phase.
///
/// `truth` is evaluated against the live store at call time (never cached):
/// it returns true when "yes" is the correct answer. A wrong answer keeps the
/// phase in place so the learner retries; the engine never advances past a
/// required judgment.
pub(crate) struct JudgmentRule {
    pub name: &'static str,
    pub phase: Phase,
    pub truth: fn(&VarStore) -> bool,
    pub yes: Branch,
    pub no: Branch,
    pub wrong_yes: &'static str,
    pub wrong_no: &'static str,
}

impl std::fmt::Debug for JudgmentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JudgmentRule").field("name", &self.name).field("phase", &self.phase).finish()
    }
}

/// An explicit "advance" button transition (cover screens, declarations,
/// complete -> summary). No timer drives these; an external scheduler may
/// call the same entrypoint for passive playback.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AdvanceRule {
    pub name: &'static str,
    pub phase: Phase,
    pub effects: &'static [Effect],
    pub next: Phase,
    pub feedback: &'static str,
}

/// The complete transition table for one lesson type, plus its phase -> step
/// projection table and per-phase standing prompts.
#[derive(Debug)]
pub(crate) struct RuleSet {
    pub lesson: LessonId,
    pub drops: Vec<DropRule>,
    pub judgments: Vec<JudgmentRule>,
    pub advances: Vec<AdvanceRule>,
    /// Phase -> step index for code/pseudocode/flowchart highlighting.
    /// Phases absent from this table project to step 0.
    pub steps: &'static [(Phase, u32)],
    /// Phase -> prompt key: the question or instruction a renderer keeps
    /// showing while the phase is active (e.g. after a wrong judgment).
    pub prompts: &'static [(Phase, &'static str)],
}

impl RuleSet {
    /// Derive the input-gating flags for `phase` from the rule tables.
    pub fn phase_flags(&self, phase: Phase) -> PhaseFlags {
        let mut flags = PhaseFlags::empty();
        if self.drops.iter().any(|r| r.phase == phase) {
            flags |= PhaseFlags::ACCEPTS_DROP;
        }
        if self.judgments.iter().any(|r| r.phase == phase) {
            flags |= PhaseFlags::ACCEPTS_JUDGMENT;
        }
        if self.advances.iter().any(|r| r.phase == phase) {
            flags |= PhaseFlags::ACCEPTS_ADVANCE;
        }
        if phase == COVER || phase == INTRO {
            flags |= PhaseFlags::PRE_GAME;
        }
        if phase == COMPLETE || phase == SUMMARY {
            flags |= PhaseFlags::TERMINAL;
        }
        flags
    }

    pub fn prompt_for(&self, phase: Phase) -> Option<&'static str> {
        self.prompts.iter().find(|(p, _)| *p == phase).map(|(_, key)| *key)
    }
}
