//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O. The clock is
//! injected so error timestamps are deterministic under test.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::PeopleStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Persistence port for person records.
    pub people: Arc<dyn PeopleStore>,
    /// Clock used to stamp error envelopes.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Bundle the ports consumed by the HTTP handlers.
    pub fn new(people: Arc<dyn PeopleStore>, clock: Arc<dyn Clock>) -> Self {
        Self { people, clock }
    }
}
