use serde::{Deserialize, Serialize};

/// The kind of a quiz question, fixed at creation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    #[serde(rename = "single")]
    SingleChoice,
    #[serde(rename = "multiple")]
    MultipleChoice,
    #[serde(rename = "text")]
    FreeText,
}

impl QuestionKind {
    /// Human-readable label shown in the preview pane.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "Single Choice",
            QuestionKind::MultipleChoice => "Multiple Choice",
            QuestionKind::FreeText => "Text Answer",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    #[serde(rename = "type")]
    pub kind: QuestionKind,

    /// Multi-line prompt. May embed markdown/LaTeX/diagram syntax, which is
    /// opaque to this crate and passed through verbatim.
    #[serde(rename = "question")]
    pub prompt: String,

    /// Choice-kind questions only; empty for free-text questions.
    /// Duplicated option lines are kept as separate entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Semantically a set, stored in encounter order. For choice kinds this
    /// is always a subset of `options`; for free text at most one reference
    /// answer.
    #[serde(rename = "correctAnswers", default)]
    pub correct_answers: Vec<String>,

    /// Shown after grading, if the author provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answers.iter().any(|a| a == option)
    }
}

/// The structured quiz produced by [`parse`](super::parse). Question order is
/// authoring order and meaningful for both display and grading sequence.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizDocument {
    pub questions: Vec<QuizQuestion>,

    /// Minimum score in [0, 100] required to pass; no minimum when absent.
    #[serde(rename = "passingScore", default, skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<u8>,
}
