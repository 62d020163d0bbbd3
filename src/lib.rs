//! lessonkit — lesson authoring SDK.
//!
//! The core is the quiz schema: a small line-oriented text format authors
//! write quizzes in, parsed by [`quiz::parse`] into a [`quiz::QuizDocument`]
//! and projected by [`quiz::project`] into a display-ready preview. Around
//! it, [`lesson`] carries the lesson/kitem data model the backend
//! collaborator serializes and the Draft/Submitted/Pending/Approved
//! approval workflow.

pub mod lesson;
pub mod quiz;
