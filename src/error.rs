use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GqlMockError {
    #[error("Not authenticated!")]
    Unauthenticated,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request context: {0}")]
    InvalidContext(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GqlMockError {
    /// Machine-readable code reported in the `extensions` of a GraphQL error.
    pub fn code(&self) -> &'static str {
        match self {
            GqlMockError::Unauthenticated => "UNAUTHENTICATED",
            GqlMockError::InvalidContext(_) => "BAD_USER_INPUT",
            GqlMockError::Config(_)
            | GqlMockError::Io(_)
            | GqlMockError::Json(_)
            | GqlMockError::Toml(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for GqlMockError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, GqlMockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_message() {
        assert_eq!(GqlMockError::Unauthenticated.to_string(), "Not authenticated!");
    }

    #[test]
    fn test_extend_sets_code() {
        let err = GqlMockError::Unauthenticated.extend();
        assert_eq!(err.message, "Not authenticated!");
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("UNAUTHENTICATED"))
        );
    }
}
