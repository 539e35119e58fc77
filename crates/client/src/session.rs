use crate::Api;
use model::{AuthGrant, User};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a previously stored credential, if any.
fn load_token(path: &Path) -> Option<Box<str>> {
    let raw = fs::read_to_string(path).ok()?;
    let token = raw.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.into())
}

/// The authenticated session: transport handle, on-disk credential, and the
/// resolved identity. Constructed once and passed down by reference; nothing
/// reaches for it through process-wide state.
pub struct Session {
    api: Api,
    path: PathBuf,
    token: Option<Box<str>>,
    user: Option<User>,
}

impl Session {
    pub fn new(api: Api, path: PathBuf) -> Self {
        Self { api, path, token: None, user: None }
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Exchanges a stored credential for an identity. A failed lookup
    /// discards the credential and leaves the session anonymous.
    pub async fn resume(&mut self) {
        let Some(token) = load_token(&self.path) else {
            return;
        };
        match self.api.me(&token).await {
            Ok(user) => {
                log::info!("resumed session for {}", user.name);
                self.token = Some(token);
                self.user = Some(user);
            }
            Err(err) => {
                log::warn!("stored credential rejected: {err}");
                let _ = fs::remove_file(&self.path);
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        match self.api.login(email, password).await {
            Ok(grant) => {
                self.accept(grant);
                true
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                false
            }
        }
    }

    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> bool {
        match self.api.register(name, email, password).await {
            Ok(grant) => {
                self.accept(grant);
                true
            }
            Err(err) => {
                log::warn!("registration failed: {err}");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        let _ = fs::remove_file(&self.path);
    }

    fn accept(&mut self, AuthGrant { token, user }: AuthGrant) {
        if let Err(err) = fs::write(&self.path, token.as_bytes()) {
            log::warn!("cannot persist credential: {err}");
        }
        self.token = Some(token);
        self.user = Some(user);
    }
}

#[cfg(test)]
mod tests {
    use super::load_token;
    use std::fs;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("quizline-{}-{name}", std::process::id()))
    }

    #[test]
    fn loads_a_trimmed_token() {
        let path = scratch("trimmed");
        fs::write(&path, "tok-123\n").unwrap();
        assert_eq!(load_token(&path).unwrap().as_ref(), "tok-123");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn blank_file_counts_as_absent() {
        let path = scratch("blank");
        fs::write(&path, " \n").unwrap();
        assert!(load_token(&path).is_none());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_counts_as_absent() {
        assert!(load_token(&scratch("missing")).is_none());
    }
}
