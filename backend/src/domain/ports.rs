//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants.

use async_trait::async_trait;
use thiserror::Error;

use super::{NewPerson, Person};

/// Persistence errors raised by [`PeopleStore`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeopleStoreError {
    /// Store connection could not be established.
    #[error("people store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("people store query failed: {message}")]
    Query { message: String },
}

impl PeopleStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for person records.
///
/// `save` accepts a validated [`NewPerson`] and returns the stored record
/// with its assigned identifier, so client-supplied ids can never reach an
/// adapter.
#[async_trait]
pub trait PeopleStore: Send + Sync {
    /// Fetch every person in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Person>, PeopleStoreError>;

    /// Fetch a person by identifier; `None` when the id is absent.
    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, PeopleStoreError>;

    /// Persist a draft, assigning it a fresh identifier.
    async fn save(&self, draft: NewPerson) -> Result<Person, PeopleStoreError>;
}
