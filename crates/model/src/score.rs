use alloc::boxed::Box;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Payload persisted once per completed attempt.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScoreSubmission {
    #[serde(rename = "quizId")]
    pub quiz_id: Box<str>,
    pub score: u16,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u16,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizRef {
    pub title: String,
}

/// One row of the caller's score history.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScoreRecord {
    pub id: Box<str>,
    #[serde(default)]
    pub quiz: Option<QuizRef>,
    pub score: u16,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u16,
    #[serde(rename = "createdAt", default)]
    pub created_at: Box<str>,
}

/// Backend-computed aggregate per user.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    #[serde(rename = "totalQuizzes")]
    pub total_quizzes: u32,
    #[serde(rename = "totalScore")]
    pub total_score: u32,
}
