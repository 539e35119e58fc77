use model::{Category, Difficulty, Question, QuizDraft};
use std::fmt::{self, Display};

/// Every question carries exactly this many option slots.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, PartialEq, Eq)]
pub enum FormError {
    /// A quiz must keep at least one question.
    LastQuestion,
    /// No question at that position.
    UnknownQuestion,
    /// Option slot outside the fixed set.
    UnknownOption,
    /// The answer key must point at a filled option slot.
    BlankAnswer,
    /// A required field was left blank.
    Blank(&'static str),
    /// A required selection was never made.
    Unselected(&'static str),
}

impl Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastQuestion => f.write_str("At least one question required!"),
            Self::UnknownQuestion => f.write_str("No such question."),
            Self::UnknownOption => f.write_str("No such option slot."),
            Self::BlankAnswer => f.write_str("The correct answer must be one of the filled options."),
            Self::Blank(field) => write!(f, "The {field} cannot be blank."),
            Self::Unselected(field) => write!(f, "Select a {field} first."),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Clone, Debug, Default)]
pub struct QuestionForm {
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub answer: Option<u8>,
}

/// Controlled editor state for a new quiz. Starts with one blank question
/// and never drops below one.
pub struct QuizForm {
    pub title: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    questions: Vec<QuestionForm>,
}

impl Default for QuizForm {
    fn default() -> Self {
        Self { title: String::new(), category: None, difficulty: None, questions: vec![QuestionForm::default()] }
    }
}

impl QuizForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[QuestionForm] {
        &self.questions
    }

    pub fn add_question(&mut self) {
        self.questions.push(QuestionForm::default());
    }

    /// Removal below one question is rejected.
    pub fn remove_question(&mut self, index: usize) -> Result<()> {
        if self.questions.len() <= 1 {
            return Err(FormError::LastQuestion);
        }
        if index >= self.questions.len() {
            return Err(FormError::UnknownQuestion);
        }
        self.questions.remove(index);
        Ok(())
    }

    pub fn set_prompt(&mut self, question: usize, text: String) -> Result<()> {
        self.questions.get_mut(question).ok_or(FormError::UnknownQuestion)?.prompt = text;
        Ok(())
    }

    pub fn set_option(&mut self, question: usize, slot: usize, text: String) -> Result<()> {
        let form = self.questions.get_mut(question).ok_or(FormError::UnknownQuestion)?;
        *form.options.get_mut(slot).ok_or(FormError::UnknownOption)? = text;
        Ok(())
    }

    /// The answer selector is constrained to the filled option slots.
    pub fn set_answer(&mut self, question: usize, slot: u8) -> Result<()> {
        let form = self.questions.get_mut(question).ok_or(FormError::UnknownQuestion)?;
        match form.options.get(usize::from(slot)) {
            None => Err(FormError::UnknownOption),
            Some(text) if text.trim().is_empty() => Err(FormError::BlankAnswer),
            Some(_) => {
                form.answer = Some(slot);
                Ok(())
            }
        }
    }

    /// Validates the whole form into a submission payload.
    pub fn build(&self) -> Result<QuizDraft> {
        if self.title.trim().is_empty() {
            return Err(FormError::Blank("title"));
        }
        let category = self.category.ok_or(FormError::Unselected("category"))?;
        let difficulty = self.difficulty.ok_or(FormError::Unselected("difficulty"))?;

        let mut questions = Vec::with_capacity(self.questions.len());
        for form in &self.questions {
            if form.prompt.trim().is_empty() {
                return Err(FormError::Blank("question prompt"));
            }
            if form.options.iter().any(|option| option.trim().is_empty()) {
                return Err(FormError::Blank("option"));
            }
            let answer = form.answer.ok_or(FormError::BlankAnswer)?;
            questions.push(Question { prompt: form.prompt.clone(), options: form.options.to_vec(), answer });
        }

        Ok(QuizDraft { title: self.title.clone(), category, difficulty, questions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuizForm {
        let mut form = QuizForm::new();
        form.title = String::from("Rivers");
        form.category = Some(Category::GeneralKnowledge);
        form.difficulty = Some(Difficulty::Easy);
        form.set_prompt(0, String::from("Longest river?")).unwrap();
        for (slot, text) in ["Nile", "Amazon", "Yangtze", "Danube"].into_iter().enumerate() {
            form.set_option(0, slot, String::from(text)).unwrap();
        }
        form.set_answer(0, 0).unwrap();
        form
    }

    #[test]
    fn removing_the_last_question_is_rejected() {
        let mut form = QuizForm::new();
        assert_eq!(form.remove_question(0), Err(FormError::LastQuestion));
        assert_eq!(form.questions().len(), 1);
    }

    #[test]
    fn removal_works_above_one() {
        let mut form = QuizForm::new();
        form.add_question();
        assert_eq!(form.questions().len(), 2);
        form.remove_question(0).unwrap();
        assert_eq!(form.questions().len(), 1);
        assert_eq!(form.remove_question(0), Err(FormError::LastQuestion));
    }

    #[test]
    fn answer_key_must_point_at_a_filled_slot() {
        let mut form = QuizForm::new();
        assert_eq!(form.set_answer(0, 0), Err(FormError::BlankAnswer));
        form.set_option(0, 2, String::from("Paris")).unwrap();
        assert_eq!(form.set_answer(0, 4), Err(FormError::UnknownOption));
        form.set_answer(0, 2).unwrap();
    }

    #[test]
    fn builds_a_complete_draft() {
        let draft = filled().build().unwrap();
        assert_eq!(draft.title, "Rivers");
        assert_eq!(draft.questions.len(), 1);
        assert_eq!(draft.questions[0].options.len(), OPTION_COUNT);
        assert_eq!(draft.questions[0].answer, 0);
    }

    #[test]
    fn blank_fields_block_submission() {
        let mut form = filled();
        form.title.clear();
        assert_eq!(form.build(), Err(FormError::Blank("title")));

        let mut form = filled();
        form.set_option(0, 3, String::from("  ")).unwrap();
        assert_eq!(form.build(), Err(FormError::Blank("option")));

        let mut form = filled();
        form.add_question();
        assert_eq!(form.build(), Err(FormError::Blank("question prompt")));
    }
}
