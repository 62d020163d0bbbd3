use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::topic::Subject;
use super::workflow::LessonStatus;
use crate::quiz::QuizDocument;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Learning,
    Mastery,
    Evaluation,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Audio,
    Image,
    Video,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStyle {
    Narrative,
    Descriptive,
    Expository,
    Persuasive,
    Gamified,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationType {
    Quiz,
    #[serde(rename = "AI Evaluation")]
    AiEvaluation,
}

/// Prompt and grading instructions for an AI-graded free response block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AiEvaluationContent {
    pub prompt: String,
    pub instructions: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AiTutorConfig {
    pub enabled: bool,
    pub instructions: String,
}

/// One content block of a lesson. Block order within the lesson is authoring
/// order; reordering is the drag-and-drop collaborator's concern.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Kitem {
    pub id: String,
    pub level: String,
    pub subject: Subject,
    pub topic: String,

    #[serde(rename = "blockType")]
    pub block_type: BlockType,

    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,

    #[serde(rename = "contentStyle", default, skip_serializing_if = "Option::is_none")]
    pub content_style: Option<ContentStyle>,

    /// Raw authored content. For a quiz evaluation block this is the schema
    /// text the quiz below was parsed from.
    pub content: String,

    #[serde(rename = "evaluationType", default, skip_serializing_if = "Option::is_none")]
    pub evaluation_type: Option<EvaluationType>,

    #[serde(rename = "aiEvaluation", default, skip_serializing_if = "Option::is_none")]
    pub ai_evaluation: Option<AiEvaluationContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizDocument>,

    #[serde(rename = "aiTutor", default, skip_serializing_if = "Option::is_none")]
    pub ai_tutor: Option<AiTutorConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub name: String,
    pub level: String,
    pub subject: Subject,
    pub topic: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Ordered content blocks.
    pub kitems: Vec<Kitem>,

    pub status: LessonStatus,

    #[serde(rename = "approvedBy", default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,

    #[serde(rename = "approvedAt", default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl Lesson {
    /// A fresh lesson starts in draft with no blocks.
    pub fn new(id: String, name: String, level: String, subject: Subject, topic: String) -> Self {
        Self {
            id,
            name,
            level,
            subject,
            topic,
            created_at: Utc::now(),
            kitems: Vec::new(),
            status: LessonStatus::Draft,
            approved_by: None,
            approved_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz;

    fn quiz_kitem() -> Kitem {
        let content = "[single]\nQ?\n- (x) A\n- ( ) B";
        Kitem {
            id: "k1".to_string(),
            level: "2".to_string(),
            subject: Subject::Science,
            topic: "Forces and Motion".to_string(),
            block_type: BlockType::Evaluation,
            content_type: None,
            content_style: None,
            content: content.to_string(),
            evaluation_type: Some(EvaluationType::Quiz),
            ai_evaluation: None,
            quiz: Some(quiz::parse(content)),
            ai_tutor: None,
        }
    }

    #[test]
    fn kitem_wire_format_uses_camel_case_names() {
        let json = serde_json::to_value(quiz_kitem()).unwrap();
        assert_eq!(json["blockType"], "Evaluation");
        assert_eq!(json["evaluationType"], "Quiz");
        assert_eq!(json["quiz"]["questions"][0]["type"], "single");
        assert_eq!(json["quiz"]["questions"][0]["correctAnswers"][0], "A");
        // absent optionals are omitted, not null
        assert!(json.get("contentType").is_none());
        assert!(json.get("aiTutor").is_none());
    }

    #[test]
    fn embedded_quiz_round_trips() {
        let kitem = quiz_kitem();
        let json = serde_json::to_string(&kitem).unwrap();
        let back: Kitem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kitem);
    }

    #[test]
    fn new_lesson_is_an_empty_draft() {
        let lesson = Lesson::new(
            "1".to_string(),
            "Intro".to_string(),
            "1".to_string(),
            Subject::Mathematics,
            "Numbers and Operations".to_string(),
        );
        assert_eq!(lesson.status, LessonStatus::Draft);
        assert!(lesson.kitems.is_empty());
        assert!(lesson.approved_by.is_none());
    }
}
