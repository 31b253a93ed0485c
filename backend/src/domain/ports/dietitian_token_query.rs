//! Port for dietitian messaging-token lookup.

use async_trait::async_trait;

/// Lookup errors raised by dietitian token query adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DietitianTokenError {
    /// Repository connection could not be established.
    #[error("dietitian token lookup connection failed: {message}")]
    Connection {
        /// Adapter-supplied description.
        message: String,
    },
    /// Query failed during execution.
    #[error("dietitian token lookup query failed: {message}")]
    Query {
        /// Adapter-supplied description.
        message: String,
    },
}

impl DietitianTokenError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Read-only port resolving a dietitian id to their messaging token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DietitianTokenQuery: Send + Sync {
    /// Messaging token for the dietitian, or `None` when the id is unknown.
    async fn find_message_token(&self, did: i64) -> Result<Option<String>, DietitianTokenError>;
}

/// Fixture implementation whose lookups always miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDietitianTokenQuery;

#[async_trait]
impl DietitianTokenQuery for FixtureDietitianTokenQuery {
    async fn find_message_token(&self, _did: i64) -> Result<Option<String>, DietitianTokenError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_query_always_misses() {
        let query = FixtureDietitianTokenQuery;
        let token = query
            .find_message_token(1)
            .await
            .expect("fixture lookup succeeds");
        assert!(token.is_none());
    }
}
