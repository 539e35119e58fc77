use alloc::boxed::Box;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// The authenticated identity as reported by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: Box<str>,
    pub name: String,
    pub email: String,
}

/// Response to a successful login or registration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthGrant {
    pub token: Box<str>,
    pub user: User,
}
