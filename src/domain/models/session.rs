#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Body of `GET /api/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginStatus {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(rename = "userID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Login state as last reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub user_id: Option<i64>,
}

impl Session {
    pub fn clear(&mut self) {
        self.logged_in = false;
        self.user_id = None;
    }
}

impl From<LoginStatus> for Session {
    fn from(status: LoginStatus) -> Session {
        if !status.logged_in {
            return Session::default();
        }

        return Session {
            logged_in: true,
            user_id: status.user_id,
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Credentials {
        return Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
    }
}
