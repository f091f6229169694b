//! The step-explanation seam.
//!
//! The engine never talks to a model service itself. It produces a
//! serializable [`Snapshot`] of the current step, renders it into a prompt,
//! and hands the prompt to whatever [`ExplainBackend`] the embedder wires in.
//! Backend failures degrade to a canned bilingual message; an explanation can
//! never take the lesson down.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::{Engine, Lang};

/// Everything an explanation request needs to know about the current step.
///
/// Values serialize as JSON with `null` standing in for garbage, so the
/// prompt shows uninitialized boxes honestly.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub lesson: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub step: u32,
    pub max_steps: u32,
    pub values: BTreeMap<&'static str, Option<i64>>,
    /// The line of the short code listing the current step highlights.
    pub code_line: String,
    #[serde(skip)]
    pub lang: Lang,
}

impl Snapshot {
    pub fn of(engine: &Engine, lang: Lang) -> Snapshot {
        let def = engine.lesson();
        let step = engine.current_step();
        let values = engine
            .current_values()
            .into_iter()
            .map(|(name, value)| (name, value.as_int()))
            .collect();
        let line_idx = def.code_line(step);
        let code_line = def
            .code
            .lines()
            .nth(line_idx as usize)
            .unwrap_or("")
            .trim()
            .to_string();

        Snapshot {
            lesson: def.id.name(),
            title: def.title.en,
            description: def.description.en,
            step,
            max_steps: def.max_steps,
            values,
            code_line,
            lang,
        }
    }
}

#[derive(Debug)]
pub enum ExplainError {
    /// No credential is configured for the backend.
    MissingCredential,
    /// The backend was reached but did not produce an explanation.
    Unavailable(String),
}

impl fmt::Display for ExplainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainError::MissingCredential => write!(f, "no API credential configured"),
            ExplainError::Unavailable(reason) => write!(f, "explanation backend unavailable: {reason}"),
        }
    }
}

impl std::error::Error for ExplainError {}

/// A source of natural-language step explanations.
pub trait ExplainBackend {
    fn generate(&self, prompt: &str) -> Result<String, ExplainError>;
}

/// Render a snapshot into the tutor prompt sent to the backend.
///
/// The persona and output language follow `snapshot.lang`; the context block
/// is always English so the lesson metadata stays stable across languages.
pub fn build_prompt(snapshot: &Snapshot) -> String {
    let (persona, lang_context) = match snapshot.lang {
        Lang::En => (
            "You are a friendly Computer Science tutor teaching C++ to a beginner.",
            "Language: English.",
        ),
        Lang::Cn => (
            "你是一位友好的计算机科学导师，正在教初学者 C++。",
            "Language: Chinese (Simplified). Explain in Chinese.",
        ),
    };

    let values = serde_json::to_string(&snapshot.values).unwrap_or_else(|_| "{}".to_string());

    format!(
        "{persona}\n{lang_context}\n\n\
         Context:\n\
         - Algorithm: {title}\n\
         - Description: {description}\n\
         - Current Variable State: {values}\n\
         - Step: {step} of {max_steps}\n\
         - Current C++ Code Executing: \"{code_line}\"\n\n\
         Task:\n\
         Explain briefly (maximum 2 sentences) what is happening in computer memory \
         or logic flow at this specific step. \
         Use simple language suitable for students. Focus on data movement or comparison logic.",
        title = snapshot.title,
        description = snapshot.description,
        step = snapshot.step,
        max_steps = snapshot.max_steps,
        code_line = snapshot.code_line,
    )
}

fn fallback(err: &ExplainError, lang: Lang) -> &'static str {
    match (err, lang) {
        (ExplainError::MissingCredential, Lang::En) => {
            "API Key not configured. Please view the animation to understand the logic."
        }
        (ExplainError::MissingCredential, Lang::Cn) => "未配置 API Key。请查看动画以理解逻辑。",
        (ExplainError::Unavailable(_), Lang::En) => {
            "I'm having trouble connecting to my brain right now. Try again later!"
        }
        (ExplainError::Unavailable(_), Lang::Cn) => "我现在无法连接到大脑。请稍后再试！",
    }
}

/// Ask `backend` to explain the snapshot, falling back to a canned message
/// in the snapshot's language on any failure.
pub fn explain_with(backend: &dyn ExplainBackend, snapshot: &Snapshot) -> String {
    let prompt = build_prompt(snapshot);
    match backend.generate(&prompt) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => fallback(&ExplainError::Unavailable("empty response".to_string()), snapshot.lang).to_string(),
        Err(err) => fallback(&err, snapshot.lang).to_string(),
    }
}
