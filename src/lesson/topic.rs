use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Science,
    Technology,
    Entrepreneurship,
    Arts,
    Mathematics,
    #[serde(rename = "Self Development")]
    SelfDevelopment,
}

/// A curriculum topic the authoring UI offers when creating a lesson.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub level: String,
    pub subject: Subject,
}

impl Topic {
    fn new(id: &str, name: &str, level: &str, subject: Subject) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            level: level.to_string(),
            subject,
        }
    }
}

/// The built-in topic catalog, grouped by subject and ordered by level.
pub fn catalog() -> Vec<Topic> {
    vec![
        Topic::new("1", "Introduction to Matter", "1", Subject::Science),
        Topic::new("2", "Living Things", "1", Subject::Science),
        Topic::new("3", "Forces and Motion", "2", Subject::Science),
        Topic::new("4", "Energy and Its Forms", "2", Subject::Science),
        Topic::new("5", "Earth and Space", "3", Subject::Science),
        Topic::new("6", "Numbers and Operations", "1", Subject::Mathematics),
        Topic::new("7", "Basic Geometry", "1", Subject::Mathematics),
        Topic::new("8", "Fractions and Decimals", "2", Subject::Mathematics),
        Topic::new("9", "Algebra Basics", "3", Subject::Mathematics),
        Topic::new("10", "Statistics and Probability", "3", Subject::Mathematics),
        Topic::new("11", "Digital Literacy", "1", Subject::Technology),
        Topic::new("12", "Basic Programming", "2", Subject::Technology),
        Topic::new("13", "Web Development", "3", Subject::Technology),
        Topic::new("14", "Color Theory", "1", Subject::Arts),
        Topic::new("15", "Drawing Basics", "1", Subject::Arts),
        Topic::new("16", "Digital Art", "2", Subject::Arts),
        Topic::new("17", "Business Basics", "1", Subject::Entrepreneurship),
        Topic::new("18", "Marketing Fundamentals", "2", Subject::Entrepreneurship),
        Topic::new("19", "Financial Planning", "3", Subject::Entrepreneurship),
        Topic::new("20", "Time Management", "1", Subject::SelfDevelopment),
        Topic::new("21", "Goal Setting", "1", Subject::SelfDevelopment),
        Topic::new("22", "Leadership Skills", "2", Subject::SelfDevelopment),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_serializes_with_display_names() {
        let json = serde_json::to_string(&Subject::SelfDevelopment).unwrap();
        assert_eq!(json, "\"Self Development\"");
        let back: Subject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Subject::SelfDevelopment);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let topics = catalog();
        let mut ids: Vec<&str> = topics.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), topics.len());
    }

    #[test]
    fn catalog_matches_the_authoring_ui_topic_list() {
        let topics = catalog();
        assert_eq!(topics.len(), 22);

        let entry = |id: &str| topics.iter().find(|t| t.id == id).unwrap();
        assert_eq!(entry("19").name, "Financial Planning");
        assert_eq!(entry("19").level, "3");
        assert_eq!(entry("19").subject, Subject::Entrepreneurship);
        assert_eq!(entry("20").name, "Time Management");
        assert_eq!(entry("21").name, "Goal Setting");
        assert_eq!(entry("22").name, "Leadership Skills");

        let self_dev = topics
            .iter()
            .filter(|t| t.subject == Subject::SelfDevelopment)
            .count();
        assert_eq!(self_dev, 3);
    }
}
