//! Lesson approval workflow.
//!
//! Draft -> Submitted -> Pending -> Approved, with rejection returning a
//! lesson to Draft from either review state. Transitions are methods on
//! [`Lesson`]; an invalid transition is a typed error, never a panic.

use chrono::Utc;
use thiserror::Error;

use serde::{Deserialize, Serialize};

use super::model::Lesson;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    Draft,
    Submitted,
    Pending,
    Approved,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransitionError {
    #[error("only a Draft lesson can be submitted (status is {0:?})")]
    NotDraft(LessonStatus),

    #[error("only a Submitted lesson can enter review (status is {0:?})")]
    NotSubmitted(LessonStatus),

    #[error("lesson is not awaiting approval (status is {0:?})")]
    NotAwaitingApproval(LessonStatus),
}

impl Lesson {
    /// Send a draft to the approval queue.
    pub fn submit(&mut self) -> Result<(), TransitionError> {
        match self.status {
            LessonStatus::Draft => {
                self.status = LessonStatus::Submitted;
                Ok(())
            }
            other => Err(TransitionError::NotDraft(other)),
        }
    }

    /// Mark a submitted lesson as under review.
    pub fn begin_review(&mut self) -> Result<(), TransitionError> {
        match self.status {
            LessonStatus::Submitted => {
                self.status = LessonStatus::Pending;
                Ok(())
            }
            other => Err(TransitionError::NotSubmitted(other)),
        }
    }

    /// Approve a submitted or in-review lesson, recording who approved it
    /// and when.
    pub fn approve(&mut self, approver: &str) -> Result<(), TransitionError> {
        match self.status {
            LessonStatus::Submitted | LessonStatus::Pending => {
                self.status = LessonStatus::Approved;
                self.approved_by = Some(approver.to_string());
                self.approved_at = Some(Utc::now());
                Ok(())
            }
            other => Err(TransitionError::NotAwaitingApproval(other)),
        }
    }

    /// Send a submitted or in-review lesson back to draft, clearing any
    /// approval metadata.
    pub fn reject(&mut self) -> Result<(), TransitionError> {
        match self.status {
            LessonStatus::Submitted | LessonStatus::Pending => {
                self.status = LessonStatus::Draft;
                self.approved_by = None;
                self.approved_at = None;
                Ok(())
            }
            other => Err(TransitionError::NotAwaitingApproval(other)),
        }
    }
}
