use crate::error::{Error, Result};
use model::{Question, Quiz};
use std::time::Duration;

/// Seconds granted to each question.
pub const QUESTION_SECS: u8 = 30;

/// How long the celebratory banner stays up before it is dismissed.
pub const CELEBRATION: Duration = Duration::from_secs(5);

/// Terminal result of an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub score: u16,
    pub total: u16,
}

impl Outcome {
    /// Whether at least four fifths of the questions were answered correctly.
    pub const fn celebratory(&self) -> bool {
        self.score as u32 * 5 >= self.total as u32 * 4
    }
}

/// Where the attempt stands after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Next { index: usize },
    Finished(Outcome),
}

/// Pure scoring: one point per slot whose recorded choice matches the
/// question's answer key. A vacant slot matches nothing.
pub fn tally(questions: &[Question], answers: &[Option<u8>]) -> u16 {
    questions.iter().zip(answers).filter(|(question, slot)| **slot == Some(question.answer)).count() as u16
}

/// One traversal of a quiz, from the first question to a scored terminal
/// state. The cursor only moves forward and every answer slot is written
/// exactly once, by whichever of answer/expiry happens first.
pub struct Attempt {
    quiz: Quiz,
    index: usize,
    answers: Vec<Option<u8>>,
}

impl Attempt {
    pub fn new(quiz: Quiz) -> Self {
        let slots = quiz.questions.len();
        Self { quiz, index: 0, answers: Vec::with_capacity(slots) }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn answers(&self) -> &[Option<u8>] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.total()
    }

    pub fn question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.index)
    }

    /// Records the player's selection for the current question.
    pub fn answer(&mut self, choice: u8) -> Result<Progress> {
        let question = self.question().ok_or(Error::AttemptFinished)?;
        if usize::from(choice) >= question.options.len() {
            return Err(Error::UnknownChoice);
        }
        Ok(self.advance(Some(choice)))
    }

    /// Records the countdown expiring: an explicit no-answer marker that can
    /// never match a correct option.
    pub fn expire(&mut self) -> Result<Progress> {
        if self.is_finished() {
            return Err(Error::AttemptFinished);
        }
        Ok(self.advance(None))
    }

    fn advance(&mut self, slot: Option<u8>) -> Progress {
        debug_assert_eq!(self.answers.len(), self.index);
        self.answers.push(slot);
        self.index += 1;
        if self.index < self.total() {
            Progress::Next { index: self.index }
        } else {
            let score = tally(&self.quiz.questions, &self.answers);
            Progress::Finished(Outcome { score, total: self.total() as u16 })
        }
    }
}
