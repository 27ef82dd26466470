use serde::Deserialize;

/// Generated lesson material for one topic, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonContent {
    pub topic_name: String,
    pub content: LessonBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonBody {
    pub explanation: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    pub example: String,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
}
