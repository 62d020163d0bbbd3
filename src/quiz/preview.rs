//! Preview projection.
//!
//! A pure, read-only transform from [`QuizDocument`] to a display-ready
//! structure. The rendering collaborator consumes this; prompts and
//! explanations stay opaque strings. Absent fields (no options, no correct
//! answer, no explanation) are valid displayable states.

use serde::Serialize;

use super::question::{QuestionKind, QuizDocument};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizPreview {
    /// Banner value when the quiz enforces a minimum score.
    pub passing_score: Option<u8>,
    pub questions: Vec<QuestionPreview>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionPreview {
    /// 1-based display index.
    pub number: usize,
    pub kind_label: &'static str,
    pub prompt: String,
    pub body: QuestionBody,
    pub explanation: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    Choice { options: Vec<OptionPreview> },
    FreeText { reference_answer: Option<String> },
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionPreview {
    pub text: String,
    pub correct: bool,
}

/// Project a document into its preview. Pure and idempotent: the input is
/// not mutated and repeated calls yield structurally equal output.
pub fn project(doc: &QuizDocument) -> QuizPreview {
    let questions = doc
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let body = match question.kind {
                QuestionKind::SingleChoice | QuestionKind::MultipleChoice => {
                    QuestionBody::Choice {
                        options: question
                            .options
                            .iter()
                            .map(|option| OptionPreview {
                                text: option.clone(),
                                correct: question.is_correct(option),
                            })
                            .collect(),
                    }
                }
                QuestionKind::FreeText => QuestionBody::FreeText {
                    reference_answer: question.correct_answers.first().cloned(),
                },
            };

            QuestionPreview {
                number: index + 1,
                kind_label: question.kind.label(),
                prompt: question.prompt.clone(),
                body,
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    QuizPreview {
        passing_score: doc.passing_score,
        questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::parse;

    #[test]
    fn numbering_is_one_based_and_ordered() {
        let doc = parse("[single]\nA\n[text]\nB");
        let preview = project(&doc);
        let numbers: Vec<usize> = preview.questions.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn kind_labels() {
        let doc = parse("[single]\nA\n[multiple]\nB\n[text]\nC");
        let labels: Vec<&str> = project(&doc)
            .questions
            .iter()
            .map(|q| q.kind_label)
            .collect();
        assert_eq!(labels, vec!["Single Choice", "Multiple Choice", "Text Answer"]);
    }

    #[test]
    fn choice_options_carry_correctness_flags_in_order() {
        let doc = parse("[multiple]\nQ?\n- [x] A\n- [ ] B\n- [x] C");
        let preview = project(&doc);
        match &preview.questions[0].body {
            QuestionBody::Choice { options } => {
                let flags: Vec<(&str, bool)> = options
                    .iter()
                    .map(|o| (o.text.as_str(), o.correct))
                    .collect();
                assert_eq!(flags, vec![("A", true), ("B", false), ("C", true)]);
            }
            other => panic!("expected choice body, got {:?}", other),
        }
    }

    #[test]
    fn free_text_exposes_reference_answer_or_absence() {
        let with = project(&parse("[text]\nQ?\nR:= 42"));
        match &with.questions[0].body {
            QuestionBody::FreeText { reference_answer } => {
                assert_eq!(reference_answer.as_deref(), Some("42"));
            }
            other => panic!("expected free-text body, got {:?}", other),
        }

        let without = project(&parse("[text]\nQ?"));
        match &without.questions[0].body {
            QuestionBody::FreeText { reference_answer } => assert!(reference_answer.is_none()),
            other => panic!("expected free-text body, got {:?}", other),
        }
    }

    #[test]
    fn passing_score_banner_passes_through() {
        assert_eq!(project(&parse("[passing_score]\n70")).passing_score, Some(70));
        assert_eq!(project(&parse("")).passing_score, None);
    }

    #[test]
    fn projection_is_idempotent_and_leaves_input_untouched() {
        let doc = parse("[single]\nQ?\n- (x) A\n- ( ) B\nE:= because");
        let before = doc.clone();
        let first = project(&doc);
        let second = project(&doc);
        assert_eq!(first, second);
        assert_eq!(doc, before);
    }
}
