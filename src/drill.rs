//! Vocabulary mastery drill and the multiple-choice quiz.
//!
//! The drill runs the lesson's word list through four escalating stages.
//! A stage is mastered at 95% accuracy; a learner who fails twice passes on
//! the third try regardless, so nobody is ever stuck. Failing a stage pauses
//! the drill until `retry_stage` is called, which restarts the word list but
//! keeps the attempt count.

use crate::content::{self, Question, Word};
use crate::LessonId;

/// Accuracy required to master a stage.
const MASTERY_THRESHOLD: f64 = 0.95;

/// Attempt index at which a stage passes regardless of accuracy.
const FORCE_PASS_ATTEMPT: u32 = 2;

/// The four drill stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Word and meaning shown, spoken aloud; type the English word.
    Listen,
    /// English word shown; type it, then pick the Chinese meaning.
    TypeMatch,
    /// Chinese meaning shown; pick the English word, then type it.
    RecallType,
    /// Audio only; type the English word from hearing alone.
    Dictation,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Listen, Stage::TypeMatch, Stage::RecallType, Stage::Dictation];

    pub fn index(self) -> usize {
        match self {
            Stage::Listen => 0,
            Stage::TypeMatch => 1,
            Stage::RecallType => 2,
            Stage::Dictation => 3,
        }
    }

    fn next(self) -> Option<Stage> {
        match self {
            Stage::Listen => Some(Stage::TypeMatch),
            Stage::TypeMatch => Some(Stage::RecallType),
            Stage::RecallType => Some(Stage::Dictation),
            Stage::Dictation => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillState {
    InProgress,
    /// The stage's word list finished below threshold; waiting for
    /// `retry_stage`.
    StageFailed,
    Complete,
}

/// What happened after one word was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillEvent {
    /// Moved to the next word in the current stage.
    Continue,
    /// The stage was mastered; the drill moved to the next stage.
    StagePassed,
    /// The stage fell below threshold. `attempt` is the upcoming retry index.
    StageFailed { attempt: u32 },
    /// The final stage was mastered. `score` is the total correct count.
    Finished { score: u32 },
}

/// One run of the mastery drill over a lesson's vocabulary.
#[derive(Debug)]
pub struct Drill {
    words: Vec<Word>,
    stage: Stage,
    word_idx: usize,
    /// Retry index within the current stage, 0-based.
    attempt: u32,
    /// Correct answers within the current stage pass.
    correct: u32,
    /// Correct answers across the whole drill.
    score: u32,
    state: DrillState,
}

impl Drill {
    /// Drill over the lesson's full word list.
    pub fn new(lesson: LessonId) -> Drill {
        let words = content::vocabulary(lesson);
        let len = words.len();
        Drill::from_words(words, len)
    }

    /// Drill over `group_size` words, cycling the lesson list if the group
    /// is larger than it.
    pub fn with_group(lesson: LessonId, group_size: usize) -> Drill {
        let all = content::vocabulary(lesson);
        Drill::from_words(all, group_size)
    }

    fn from_words(all: Vec<Word>, group_size: usize) -> Drill {
        let words: Vec<Word> = (0..group_size.max(1)).map(|i| all[i % all.len()]).collect();
        Drill {
            words,
            stage: Stage::Listen,
            word_idx: 0,
            attempt: 0,
            correct: 0,
            score: 0,
            state: DrillState::InProgress,
        }
    }

    pub fn state(&self) -> DrillState {
        self.state
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The retry index of the current stage, 0-based.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The word currently being drilled, or `None` when the drill is not
    /// accepting answers.
    pub fn current_word(&self) -> Option<&Word> {
        match self.state {
            DrillState::InProgress => self.words.get(self.word_idx),
            _ => None,
        }
    }

    /// Report the outcome of one word and advance the drill.
    ///
    /// Returns `Continue` mid-list; at the end of the list the mastery gate
    /// runs and the result is `StagePassed`, `StageFailed`, or `Finished`.
    /// Calling this while the drill is not in progress is a no-op.
    pub fn report(&mut self, was_correct: bool) -> DrillEvent {
        if self.state != DrillState::InProgress {
            return DrillEvent::Continue;
        }

        if was_correct {
            self.correct += 1;
            self.score += 1;
        }

        if self.word_idx + 1 < self.words.len() {
            self.word_idx += 1;
            return DrillEvent::Continue;
        }

        // End of list: mastery gate.
        let accuracy = f64::from(self.correct) / self.words.len() as f64;
        if accuracy >= MASTERY_THRESHOLD || self.attempt >= FORCE_PASS_ATTEMPT {
            match self.stage.next() {
                Some(next) => {
                    self.stage = next;
                    self.word_idx = 0;
                    self.correct = 0;
                    self.attempt = 0;
                    DrillEvent::StagePassed
                }
                None => {
                    self.state = DrillState::Complete;
                    DrillEvent::Finished { score: self.score }
                }
            }
        } else {
            self.state = DrillState::StageFailed;
            self.attempt += 1;
            DrillEvent::StageFailed { attempt: self.attempt }
        }
    }

    /// Restart the failed stage's word list. Accuracy resets; the attempt
    /// count does not, so the third run of a stage always passes.
    pub fn retry_stage(&mut self) {
        if self.state != DrillState::StageFailed {
            return;
        }
        self.state = DrillState::InProgress;
        self.word_idx = 0;
        self.correct = 0;
    }
}

/// One run of a lesson's multiple-choice quiz.
#[derive(Debug)]
pub struct Quiz {
    questions: &'static [Question],
    idx: usize,
    score: u32,
    done: bool,
}

impl Quiz {
    pub fn new(lesson: LessonId) -> Quiz {
        Quiz { questions: content::lesson(lesson).questions, idx: 0, score: 0, done: false }
    }

    pub fn current(&self) -> Option<&Question> {
        if self.done { None } else { self.questions.get(self.idx) }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Answer the current question. Right or wrong, the quiz moves on.
    pub fn answer(&mut self, choice: &str) -> bool {
        let Some(q) = self.current() else {
            return false;
        };
        let correct = choice == q.answer;
        if correct {
            self.score += 1;
        }
        if self.idx + 1 < self.questions.len() {
            self.idx += 1;
        } else {
            self.done = true;
        }
        correct
    }

    pub fn restart(&mut self) {
        self.idx = 0;
        self.score = 0;
        self.done = false;
    }
}
