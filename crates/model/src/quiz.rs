use alloc::{boxed::Box, string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// Difficulty tiers recognized by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// The fixed set of quiz categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Category {
    #[serde(rename = "General Knowledge")]
    GeneralKnowledge,
    Technology,
    Science,
    History,
    Other,
}

impl Category {
    pub const ALL: [Self; 5] = [Self::GeneralKnowledge, Self::Technology, Self::Science, Self::History, Self::Other];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralKnowledge => "General Knowledge",
            Self::Technology => "Technology",
            Self::Science => "Science",
            Self::History => "History",
            Self::Other => "Other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    /// Prompt displayed to the player.
    pub prompt: String,
    /// Ordered option texts to select from.
    pub options: Vec<String>,
    /// Index of the correct option. Keying by position keeps scoring
    /// unambiguous even when two options carry identical text.
    pub answer: u8,
}

/// Minimal author reference embedded in a quiz document.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Creator {
    pub name: String,
}

/// A quiz document as served by the backend. Immutable once created.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: Box<str>,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<Creator>,
}

/// Payload for creating a new quiz.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizDraft {
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
}

/// Directory filter parameters. Unset members are sent as empty values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    pub search: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
}
