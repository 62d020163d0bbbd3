//! Quiz schema parser.
//!
//! The schema is line-oriented and backs a live preview pane: the full text
//! is re-parsed on every edit, so `parse` must be total. Malformed input is
//! never an error; unrecognized directives are skipped and missing values
//! leave the corresponding field unset. Use [`lint`](super::lint) for
//! authoring-time feedback on the same grammar.

use super::question::{QuestionKind, QuizDocument, QuizQuestion};

/// Parse raw author-entered text into a [`QuizDocument`].
///
/// Total over all inputs: the empty string yields a document with no
/// questions and no passing score. Single linear scan; the only lookahead is
/// the one line following a `[passing_score]` directive.
pub fn parse(raw: &str) -> QuizDocument {
    let lines: Vec<&str> = raw.lines().collect();

    let mut questions = Vec::new();
    let mut passing_score: Option<u8> = None;
    let mut current: Option<QuestionAccumulator> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line == "[passing_score]" {
            if let Some(value) = lines.get(i + 1) {
                if let Some(score) = parse_score(value.trim()) {
                    passing_score = Some(score);
                }
                // the value line is consumed even when invalid
                i += 1;
            }
            i += 1;
            continue;
        }

        if line.starts_with('[') {
            if let Some(acc) = current.take() {
                questions.push(acc.finish());
            }
            // an unrecognized tag finalizes but starts nothing, so body
            // lines are dropped until the next valid tag
            current = QuestionKind::from_tag(line).map(QuestionAccumulator::new);
        } else if let Some(acc) = current.as_mut() {
            acc.push_line(line);
        }

        i += 1;
    }

    if let Some(acc) = current.take() {
        questions.push(acc.finish());
    }

    QuizDocument {
        questions,
        passing_score,
    }
}

impl QuestionKind {
    pub(crate) fn from_tag(line: &str) -> Option<QuestionKind> {
        match line {
            "[single]" => Some(QuestionKind::SingleChoice),
            "[multiple]" => Some(QuestionKind::MultipleChoice),
            "[text]" => Some(QuestionKind::FreeText),
            _ => None,
        }
    }
}

fn parse_score(value: &str) -> Option<u8> {
    value
        .parse::<i64>()
        .ok()
        .filter(|s| (0..=100).contains(s))
        .map(|s| s as u8)
}

/// Accumulates one in-progress question while its body lines are classified.
/// Finalized into a [`QuizQuestion`] when the next tag or end of input is
/// reached.
struct QuestionAccumulator {
    kind: QuestionKind,
    prompt_lines: Vec<String>,
    options: Vec<String>,
    correct_answers: Vec<String>,
    explanation: Option<String>,
}

impl QuestionAccumulator {
    fn new(kind: QuestionKind) -> Self {
        Self {
            kind,
            prompt_lines: Vec::new(),
            options: Vec::new(),
            correct_answers: Vec::new(),
            explanation: None,
        }
    }

    /// Classify one body line. Precedence: option syntax for the current
    /// kind, then `R:=`, then `E:=`, then prompt content. Option syntax for
    /// a different kind falls through to prompt content.
    fn push_line(&mut self, line: &str) {
        if line.starts_with("- (") && self.kind == QuestionKind::SingleChoice {
            self.push_option(line, ')', "(x)");
        } else if line.starts_with("- [") && self.kind == QuestionKind::MultipleChoice {
            self.push_option(line, ']', "[x]");
        } else if line.starts_with("R:=") && self.kind == QuestionKind::FreeText {
            // last reference answer wins
            self.correct_answers = vec![marker_tail(line).to_string()];
        } else if line.starts_with("E:=") {
            self.explanation = Some(marker_tail(line).to_string());
        } else {
            // blank lines are kept so paragraph breaks survive
            self.prompt_lines.push(line.to_string());
        }
    }

    fn push_option(&mut self, line: &str, close: char, correct_marker: &str) {
        let correct = line.contains(correct_marker);
        let text = line.find(close).map_or(line, |i| &line[i + 1..]).trim();
        if text.is_empty() {
            return;
        }
        self.options.push(text.to_string());
        if correct {
            self.correct_answers.push(text.to_string());
        }
    }

    fn finish(self) -> QuizQuestion {
        QuizQuestion {
            kind: self.kind,
            prompt: self.prompt_lines.join("\n"),
            options: self.options,
            correct_answers: self.correct_answers,
            explanation: self.explanation,
        }
    }
}

/// Text after an `R:=`/`E:=` marker: the marker occupies four columns,
/// counting the separator space after `:=`.
fn marker_tail(line: &str) -> &str {
    line.char_indices()
        .nth(4)
        .map_or("", |(i, _)| &line[i..])
        .trim()
}
