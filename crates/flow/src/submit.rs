use crate::attempt::Outcome;
use client::Api;
use model::ScoreSubmission;
use std::time::Duration;
use tokio::time;

/// Submission rounds before giving up on a completed score.
const ROUNDS: u32 = 3;
/// Initial backoff, doubled after every failed round.
const BACKOFF: Duration = Duration::from_secs(2);

/// Deterministic key for one attempt, so a retried submission cannot be
/// recorded twice by the backend.
pub fn idempotency_key(quiz_id: &str, answers: &[Option<u8>]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(quiz_id.as_bytes());
    for slot in answers {
        hasher.update(&match slot {
            Some(choice) => [1, *choice],
            None => [0, 0],
        });
    }
    hex::encode(hasher.finalize().as_bytes())
}

fn payload(quiz_id: Box<str>, outcome: &Outcome) -> ScoreSubmission {
    ScoreSubmission { quiz_id, score: outcome.score, total_questions: outcome.total }
}

/// Dispatches completed scores under the caller's identity.
pub struct Reporter {
    api: Api,
    token: Box<str>,
}

impl Reporter {
    pub fn new(api: Api, token: Box<str>) -> Self {
        Self { api, token }
    }

    /// Fires the one submission for a scored attempt on a detached task.
    /// Failure surfaces in the log and never reverts the scored state.
    pub(crate) fn dispatch(self, quiz_id: Box<str>, answers: &[Option<u8>], outcome: &Outcome) {
        let key = idempotency_key(&quiz_id, answers);
        let sub = payload(quiz_id, outcome);
        tokio::spawn(async move {
            let mut delay = BACKOFF;
            for round in 1..=ROUNDS {
                match self.api.submit_score(&self.token, &sub, &key).await {
                    Ok(_) => {
                        log::info!("score {}/{} saved", sub.score, sub.total_questions);
                        return;
                    }
                    Err(err) => log::warn!("score submission failed ({round}/{ROUNDS}): {err}"),
                }
                if round < ROUNDS {
                    time::sleep(delay).await;
                    delay *= 2;
                }
            }
            log::warn!("giving up; the displayed score was not recorded");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{idempotency_key, payload};
    use crate::attempt::Outcome;

    #[test]
    fn key_is_deterministic() {
        let answers = [Some(0), None, Some(2)];
        assert_eq!(idempotency_key("quiz-1", &answers), idempotency_key("quiz-1", &answers));
    }

    #[test]
    fn key_tracks_quiz_and_answers() {
        let answers = [Some(0), None];
        let base = idempotency_key("quiz-1", &answers);
        assert_ne!(base, idempotency_key("quiz-2", &answers));
        assert_ne!(base, idempotency_key("quiz-1", &[Some(0), Some(1)]));
        // An expired slot is distinct from selecting the first option.
        assert_ne!(idempotency_key("q", &[None]), idempotency_key("q", &[Some(0)]));
    }

    #[test]
    fn payload_carries_score_and_count() {
        let sub = payload("quiz-1".into(), &Outcome { score: 1, total: 3 });
        assert_eq!(sub.quiz_id.as_ref(), "quiz-1");
        assert_eq!(sub.score, 1);
        assert_eq!(sub.total_questions, 3);
    }
}
