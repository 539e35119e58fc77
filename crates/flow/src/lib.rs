pub mod attempt;
pub mod directory;
pub mod error;
pub mod form;
pub mod submit;

use attempt::{Attempt, Progress, QUESTION_SECS};
use dashmap::DashMap;
use error::{Error, Result};
use model::Quiz;
use std::{sync::Arc, time::Duration};
use tokio::{sync::mpsc, time};

pub use attempt::{Outcome, CELEBRATION};
pub use submit::Reporter;

/// View updates published by a live attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Update {
    /// Entered a question; the countdown has been reset to its full allowance.
    Question { index: usize, total: usize, time_left: u8 },
    /// One second of the countdown elapsed.
    Tick { time_left: u8 },
    /// The attempt is terminal. No transition leads back out.
    Finished { score: u16, total: u16, celebratory: bool },
}

type Channel = mpsc::UnboundedSender<u8>;
type Registry = DashMap<Box<str>, Channel>;

/// Container for all live attempts, at most one per quiz.
#[derive(Clone, Default)]
pub struct Flow {
    attempts: Arc<Registry>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an attempt and hands back its update stream. The attempt runs
    /// on a detached task until it is scored or torn down.
    pub fn start(&self, quiz: Quiz, reporter: Option<Reporter>) -> Result<mpsc::UnboundedReceiver<Update>> {
        if quiz.questions.is_empty() {
            return Err(Error::EmptyQuiz);
        }

        let key = quiz.id.clone();
        let (tx, rx) = mpsc::unbounded_channel();
        use dashmap::mapref::entry::Entry::Vacant;
        if let Vacant(entry) = self.attempts.entry(key.clone()) {
            entry.insert(tx);
        } else {
            return Err(Error::AlreadyRunning);
        }

        let (updates, stream) = mpsc::unbounded_channel();
        let attempts = Arc::clone(&self.attempts);
        tokio::spawn(async move {
            drive(Attempt::new(quiz), rx, updates, reporter).await;
            attempts.remove(&key);
        });
        Ok(stream)
    }

    /// Routes a selection to the quiz's live attempt.
    pub fn answer(&self, quiz_id: &str, choice: u8) -> Result<()> {
        self.attempts.get(quiz_id).ok_or(Error::UnknownAttempt)?.send(choice).map_err(|_| Error::UnknownAttempt)
    }

    /// Tears a live attempt down without scoring it.
    pub fn abandon(&self, quiz_id: &str) {
        self.attempts.remove(quiz_id);
    }
}

async fn drive(
    mut attempt: Attempt,
    mut events: mpsc::UnboundedReceiver<u8>,
    updates: mpsc::UnboundedSender<Update>,
    reporter: Option<Reporter>,
) {
    let total = attempt.total();
    let outcome = loop {
        let mut time_left = QUESTION_SECS;
        if updates.send(Update::Question { index: attempt.index(), total, time_left }).is_err() {
            return;
        }

        // Race the player against the countdown. The sleep is recreated per
        // iteration, so exactly one timer exists and it dies with the
        // question that armed it.
        let progress = loop {
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    Some(choice) => match attempt.answer(choice) {
                        Ok(progress) => break progress,
                        Err(err) => log::warn!("selection ignored: {err}"),
                    },
                    // Sender dropped: the view tore the attempt down.
                    None => return,
                },
                _ = time::sleep(Duration::from_secs(1)) => {
                    time_left -= 1;
                    if time_left == 0 {
                        let Ok(progress) = attempt.expire() else {
                            return;
                        };
                        break progress;
                    }
                    let _ = updates.send(Update::Tick { time_left });
                }
            }
        };

        match progress {
            Progress::Next { .. } => {}
            Progress::Finished(outcome) => break outcome,
        }
    };

    if let Some(reporter) = reporter {
        reporter.dispatch(attempt.quiz().id.clone(), attempt.answers(), &outcome);
    }
    let _ = updates.send(Update::Finished {
        score: outcome.score,
        total: outcome.total,
        celebratory: outcome.celebratory(),
    });
}
