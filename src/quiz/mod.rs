mod lint;
mod parse;
mod preview;
mod question;

pub use lint::{lint, Diagnostic};
pub use parse::parse;
pub use preview::{project, OptionPreview, QuestionBody, QuestionPreview, QuizPreview};
pub use question::{QuestionKind, QuizDocument, QuizQuestion};
