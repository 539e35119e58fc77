pub mod error;
pub mod query;
pub mod session;

use error::{Error, Result};
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{Buf, Bytes},
    header::{HeaderValue, ACCEPT, CONTENT_TYPE},
    Method, Request, StatusCode, Uri,
};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use model::{AuthGrant, Filters, LeaderboardEntry, Quiz, QuizDraft, ScoreRecord, ScoreSubmission, User};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use session::Session;

pub const APPLICATION_JSON: &str = "application/json";

/// Custom header carrying the bearer credential on authenticated calls.
const AUTH_HEADER: &str = "x-auth-token";
/// Deduplicates retried score submissions on the backend.
const IDEMPOTENCY_HEADER: &str = "x-idempotency-key";

/// Body of a business-rule rejection.
#[derive(Deserialize)]
struct Rejection {
    msg: String,
}

#[derive(Deserialize)]
struct Identity {
    user: User,
}

#[derive(Serialize)]
struct LoginBody<'req> {
    email: &'req str,
    password: &'req str,
}

#[derive(Serialize)]
struct RegisterBody<'req> {
    name: &'req str,
    email: &'req str,
    password: &'req str,
}

/// Typed client for the quiz platform's REST API.
#[derive(Clone)]
pub struct Api {
    /// Base URL without a trailing slash, e.g. `http://localhost:5000`.
    base: Box<str>,
    client: Client<HttpConnector, Full<Bytes>>,
}

impl Api {
    pub fn new(base: &str) -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self { base: base.trim_end_matches('/').into(), client }
    }

    fn uri(&self, path: &str) -> Result<Uri> {
        let uri = [self.base.as_ref(), path].concat().parse()?;
        Ok(uri)
    }

    async fn execute<T: DeserializeOwned>(&self, req: Request<Full<Bytes>>) -> Result<T> {
        let res = self.client.request(req).await?;
        let status = res.status();
        let buf = res.into_body().collect().await?.aggregate();

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            // Rejections carry a `msg` body; anything else is opaque.
            return Err(match serde_json::from_reader(buf.reader()) {
                Ok(Rejection { msg }) => Error::Rejected(msg.into_boxed_str()),
                Err(_) => Error::Status(status.as_u16()),
            });
        }

        let value = serde_json::from_reader(buf.reader())?;
        Ok(value)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let mut builder = Request::builder()
            .method(Method::GET)
            .uri(self.uri(path)?)
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if let Some(token) = token {
            builder = builder.header(AUTH_HEADER, token);
        }
        let req = builder.body(Full::default())?;
        self.execute(req).await
    }

    async fn post<B, T>(&self, path: &str, token: Option<&str>, idempotency: Option<&str>, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let bytes = serde_json::to_vec(body)?;
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(self.uri(path)?)
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON))
            .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        if let Some(token) = token {
            builder = builder.header(AUTH_HEADER, token);
        }
        if let Some(key) = idempotency {
            builder = builder.header(IDEMPOTENCY_HEADER, key);
        }
        let req = builder.body(Full::new(Bytes::from(bytes)))?;
        self.execute(req).await
    }

    /// Fetches the quiz collection through the directory filters.
    pub async fn quizzes(&self, filters: &Filters) -> Result<Vec<Quiz>> {
        self.get(&query::directory_path(filters), None).await
    }

    /// Fetches one quiz document with its nested questions and answer keys.
    pub async fn quiz(&self, id: &str) -> Result<Quiz> {
        self.get(&format!("/api/quizzes/{id}"), None).await
    }

    pub async fn create_quiz(&self, token: &str, draft: &QuizDraft) -> Result<Quiz> {
        self.post("/api/quizzes", Some(token), None, draft).await
    }

    /// Persists one completed attempt under the caller's identity.
    pub async fn submit_score(&self, token: &str, sub: &ScoreSubmission, key: &str) -> Result<ScoreRecord> {
        self.post("/api/scores", Some(token), Some(key), sub).await
    }

    pub async fn scores(&self, token: &str) -> Result<Vec<ScoreRecord>> {
        self.get("/api/scores", Some(token)).await
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.get("/api/leaderboard", None).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthGrant> {
        self.post("/api/auth/login", None, None, &LoginBody { email, password }).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthGrant> {
        self.post("/api/auth/register", None, None, &RegisterBody { name, email, password }).await
    }

    pub async fn me(&self, token: &str) -> Result<User> {
        let Identity { user } = self.get("/api/auth/me", Some(token)).await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use model::{Category, Difficulty, LeaderboardEntry, Quiz, ScoreRecord};

    #[test]
    fn decodes_a_quiz_document() {
        let raw = r#"{
            "id": "64af1c",
            "title": "Ancient Rome",
            "category": "History",
            "difficulty": "medium",
            "createdBy": { "name": "Livia" },
            "questions": [
                { "prompt": "First emperor?", "options": ["Caesar", "Augustus", "Nero", "Trajan"], "answer": 1 }
            ]
        }"#;
        let quiz: Quiz = serde_json::from_str(raw).unwrap();
        assert_eq!(quiz.id.as_ref(), "64af1c");
        assert_eq!(quiz.category, Category::History);
        assert_eq!(quiz.difficulty, Difficulty::Medium);
        assert_eq!(quiz.created_by.unwrap().name, "Livia");
        assert_eq!(quiz.questions[0].answer, 1);
        assert_eq!(quiz.questions[0].options.len(), 4);
    }

    #[test]
    fn decodes_a_quiz_without_creator() {
        let raw = r#"{
            "id": "64af1d",
            "title": "Untitled",
            "category": "Other",
            "difficulty": "easy",
            "questions": []
        }"#;
        let quiz: Quiz = serde_json::from_str(raw).unwrap();
        assert!(quiz.created_by.is_none());
        assert!(quiz.questions.is_empty());
    }

    #[test]
    fn decodes_score_history_rows() {
        let raw = r#"[
            { "id": "1", "quiz": { "title": "Ancient Rome" }, "score": 2, "totalQuestions": 3, "createdAt": "2024-05-01T10:00:00Z" },
            { "id": "2", "score": 1, "totalQuestions": 5 }
        ]"#;
        let rows: Vec<ScoreRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(rows[0].quiz.as_ref().unwrap().title, "Ancient Rome");
        assert_eq!(rows[0].total_questions, 3);
        assert!(rows[1].quiz.is_none());
        assert!(rows[1].created_at.is_empty());
    }

    #[test]
    fn decodes_leaderboard_rows() {
        let raw = r#"[{ "name": "Ada", "totalQuizzes": 7, "totalScore": 31 }]"#;
        let rows: Vec<LeaderboardEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(rows[0], LeaderboardEntry { name: String::from("Ada"), total_quizzes: 7, total_score: 31 });
    }
}
