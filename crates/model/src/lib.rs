#![no_std]
extern crate alloc;

pub mod quiz;
pub mod score;
pub mod user;

pub use quiz::{Category, Difficulty, Filters, Question, Quiz, QuizDraft};
pub use score::{LeaderboardEntry, ScoreRecord, ScoreSubmission};
pub use user::{AuthGrant, User};
