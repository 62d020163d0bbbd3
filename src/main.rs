use std::{env, fs};

use anyhow::Context;
use lessonkit::quiz::{self, QuestionBody, QuizPreview};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

struct Config {
    schema_path: String,
}

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let schema_path = args.next().context("path to a quiz schema file is required")?;
    Ok(Config { schema_path })
}

fn main() -> anyhow::Result<()> {
    let args = env::args().skip(1);

    let config = match parse_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: cargo run <schema-file>");
            return Err(e);
        }
    };

    let raw = fs::read_to_string(&config.schema_path)
        .context(format!("failed to read {}", config.schema_path))?;

    for diagnostic in quiz::lint(&raw) {
        eprintln!("line {}: {}", diagnostic.line, diagnostic.message);
    }

    let preview = quiz::project(&quiz::parse(&raw));
    print!("{}", render_preview(&preview));

    Ok(())
}

fn render_preview(preview: &QuizPreview) -> String {
    let mut out = String::new();

    if let Some(score) = preview.passing_score {
        out.push_str(&format!("Passing Score Required: {}%\n\n", score));
    }

    for question in &preview.questions {
        out.push_str(&format!(
            "{BOLD}Question {}{RESET} · {}\n{}\n",
            question.number, question.kind_label, question.prompt
        ));

        match &question.body {
            QuestionBody::Choice { options } => {
                for option in options {
                    let marker = if option.correct { "[x]" } else { "[ ]" };
                    let tag = if option.correct { "  (Correct)" } else { "" };
                    out.push_str(&format!("  {} {}{}\n", marker, option.text, tag));
                }
            }
            QuestionBody::FreeText { reference_answer } => match reference_answer {
                Some(answer) => out.push_str(&format!("  Expected Answer: {}\n", answer)),
                None => out.push_str("  Expected Answer: (not set)\n"),
            },
        }

        if let Some(explanation) = &question.explanation {
            out.push_str(&format!("  Explanation: {}\n", explanation));
        }

        out.push('\n');
    }

    out
}
