use chrono::{DateTime, Utc};

/// Base of every avatar URL; the username and id are appended as path segments.
pub const AVATAR_BASE_URL: &str = "https://cloudinary.com";

/// Length of generated user ids.
const ID_LENGTH: usize = 21;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user with a fresh id and the current time as `created_at`.
    ///
    /// Both defaults are computed here, per instance.
    pub fn new(username: String) -> Self {
        Self {
            id: generate_id(),
            username,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn avatar_url(&self) -> String {
        avatar_url(&self.username, &self.id)
    }
}

/// Builds the avatar URL for a username and id. Not checked against any storage.
pub fn avatar_url(username: &str, id: &str) -> String {
    format!("{}/{}/{}", AVATAR_BASE_URL, username, id)
}

fn generate_id() -> String {
    nanoid::nanoid!(ID_LENGTH)
}

/// The fixed user population, rebuilt on every call.
pub fn mock_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User::new("Fred".to_string()).with_id("1").with_created_at(now),
        User::new("Doug".to_string()).with_id("2").with_created_at(now),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_distinct_defaults() {
        let a = User::new("a".to_string());
        let b = User::new("b".to_string());
        assert_eq!(a.id.len(), ID_LENGTH);
        assert_ne!(a.id, b.id);
        assert!(b.created_at >= a.created_at);
    }

    #[test]
    fn test_avatar_url() {
        let user = User::new("Fred".to_string()).with_id("1");
        assert_eq!(user.avatar_url(), "https://cloudinary.com/Fred/1");
    }

    #[test]
    fn test_mock_users_order() {
        let users = mock_users();
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(names, ["Fred", "Doug"]);
    }
}
