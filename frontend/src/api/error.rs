use thiserror::Error;

/// Failure of a read or write against the data API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{message} (status {status})")]
    Status {
        status: u16,
        message: String,
        code: Option<String>,
    },
    #[error("failed to decode {collection} rows: {reason}")]
    Decode { collection: String, reason: String },
    #[error("no matching row in {0}")]
    NotFound(String),
    #[error("not signed in: {0}")]
    Unauthenticated(String),
}

impl QueryError {
    pub fn decode(collection: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            collection: collection.into(),
            reason: reason.to_string(),
        }
    }
}

/// Failure reported by the auth API or the local session store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("failed to decode auth response: {0}")]
    Decode(String),
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_renders_message_and_status() {
        let err = QueryError::Status {
            status: 401,
            message: "JWT expired".into(),
            code: Some("PGRST301".into()),
        };
        assert_eq!(err.to_string(), "JWT expired (status 401)");
    }

    #[test]
    fn unauthenticated_error_names_the_reason() {
        let err = QueryError::Unauthenticated("JWT expired".into());
        assert_eq!(err.to_string(), "not signed in: JWT expired");
    }

    #[test]
    fn rejected_auth_error_shows_backend_message() {
        let err = AuthError::Rejected {
            status: 400,
            message: "Invalid login credentials".into(),
        };
        assert_eq!(err.to_string(), "Invalid login credentials");
    }
}
