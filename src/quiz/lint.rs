//! Authoring-time diagnostics for the quiz schema.
//!
//! [`parse`](super::parse) is total and swallows malformed input silently so
//! the live preview never breaks mid-keystroke. This pass walks the same
//! grammar and reports what the parser silently ignored, for an optional
//! feedback panel in the editor. It never affects parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::question::QuestionKind;

/// Case/whitespace near-misses of the known tags, for did-you-mean hints.
static NEAR_MISS_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\[\s*(single|multiple|text|passing_score)\s*\]$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the raw schema text.
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line: line + 1,
            message: message.into(),
        }
    }
}

/// Collect diagnostics over the raw schema text. Line numbers are 1-based.
pub fn lint(raw: &str) -> Vec<Diagnostic> {
    let lines: Vec<&str> = raw.lines().collect();

    let mut diagnostics = Vec::new();
    let mut current: Option<QuestionKind> = None;
    // false once an unknown tag (or no tag yet) leaves body lines orphaned
    let mut saw_any_tag = false;
    let mut score_set_at: Option<usize> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line == "[passing_score]" {
            match lines.get(i + 1).map(|l| l.trim()) {
                None | Some("") => {
                    diagnostics.push(Diagnostic::new(
                        i,
                        "[passing_score] expects a value on the next line",
                    ));
                }
                Some(value) => match value.parse::<i64>() {
                    Err(_) => diagnostics.push(Diagnostic::new(
                        i + 1,
                        format!("passing score `{}` is not a number", value),
                    )),
                    Ok(score) if !(0..=100).contains(&score) => {
                        diagnostics.push(Diagnostic::new(
                            i + 1,
                            format!("passing score {} must be between 0 and 100", score),
                        ));
                    }
                    Ok(_) => {
                        if let Some(previous) = score_set_at {
                            diagnostics.push(Diagnostic::new(
                                i,
                                format!(
                                    "duplicate [passing_score] overrides the value set on line {}",
                                    previous + 1
                                ),
                            ));
                        }
                        score_set_at = Some(i);
                    }
                },
            }
            i += if i + 1 < lines.len() { 2 } else { 1 };
            continue;
        }

        if line.starts_with('[') {
            current = QuestionKind::from_tag(line);
            if current.is_none() {
                if let Some(caps) = NEAR_MISS_TAG.captures(line) {
                    diagnostics.push(Diagnostic::new(
                        i,
                        format!(
                            "unknown tag `{}`, did you mean `[{}]`?",
                            line,
                            caps[1].to_lowercase()
                        ),
                    ));
                } else {
                    diagnostics.push(Diagnostic::new(
                        i,
                        format!(
                            "unknown tag `{}`; content until the next valid tag is ignored",
                            line
                        ),
                    ));
                }
            } else {
                saw_any_tag = true;
            }
            i += 1;
            continue;
        }

        match current {
            None => {
                if !line.is_empty() {
                    let message = if saw_any_tag {
                        "this line follows an unknown tag and is ignored"
                    } else {
                        "this line appears before the first question tag and is ignored"
                    };
                    diagnostics.push(Diagnostic::new(i, message));
                }
            }
            Some(kind) => lint_body_line(kind, line, i, &mut diagnostics),
        }

        i += 1;
    }

    diagnostics
}

fn lint_body_line(kind: QuestionKind, line: &str, i: usize, diagnostics: &mut Vec<Diagnostic>) {
    match kind {
        QuestionKind::SingleChoice => {
            if line.starts_with("- [") {
                diagnostics.push(Diagnostic::new(
                    i,
                    "single-choice options use `- ( )` / `- (x)`; this line is treated as prompt text",
                ));
            } else if line.starts_with("- (") && option_text_is_empty(line, ')') {
                diagnostics.push(Diagnostic::new(i, "option has no text and is dropped"));
            }
        }
        QuestionKind::MultipleChoice => {
            if line.starts_with("- (") {
                diagnostics.push(Diagnostic::new(
                    i,
                    "multiple-choice options use `- [ ]` / `- [x]`; this line is treated as prompt text",
                ));
            } else if line.starts_with("- [") && option_text_is_empty(line, ']') {
                diagnostics.push(Diagnostic::new(i, "option has no text and is dropped"));
            }
        }
        QuestionKind::FreeText => {}
    }

    if line.starts_with("R:=") && kind != QuestionKind::FreeText {
        diagnostics.push(Diagnostic::new(
            i,
            "reference answers (`R:=`) only apply to [text] questions; this line is treated as prompt text",
        ));
    }
}

fn option_text_is_empty(line: &str, close: char) -> bool {
    line.find(close)
        .map_or(line, |i| &line[i + 1..])
        .trim()
        .is_empty()
}
