//! In-memory people store.
//!
//! Mutex-guarded map keyed by the assigned id. Ids increase monotonically,
//! so the store's natural order (ascending id) matches insertion order.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{PeopleStore, PeopleStoreError};
use crate::domain::{NewPerson, Person};

#[derive(Debug, Default)]
struct StoreInner {
    next_id: i32,
    people: BTreeMap<i32, Person>,
}

/// [`PeopleStore`] adapter backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryPeopleStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryPeopleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoreInner>, PeopleStoreError> {
        self.inner
            .lock()
            .map_err(|_| PeopleStoreError::query("people store lock poisoned"))
    }
}

#[async_trait]
impl PeopleStore for InMemoryPeopleStore {
    async fn find_all(&self) -> Result<Vec<Person>, PeopleStoreError> {
        let guard = self.lock()?;
        Ok(guard.people.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, PeopleStoreError> {
        let guard = self.lock()?;
        Ok(guard.people.get(&id).cloned())
    }

    async fn save(&self, draft: NewPerson) -> Result<Person, PeopleStoreError> {
        let mut guard = self.lock()?;
        guard.next_id += 1;
        let person = Person::assign_id(guard.next_id, draft);
        guard.people.insert(person.id, person.clone());
        debug!(id = person.id, "person persisted");
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_rt::System;
    use rstest::rstest;

    fn draft(name: &str) -> NewPerson {
        NewPerson::new(name, 30, "person@example.com").expect("valid draft")
    }

    #[rstest]
    fn save_assigns_increasing_ids() {
        let store = InMemoryPeopleStore::new();

        System::new().block_on(async move {
            let first = store.save(draft("Ada")).await.expect("save succeeds");
            let second = store.save(draft("Bob")).await.expect("save succeeds");
            assert_eq!(first.id, 1);
            assert_eq!(second.id, 2);
        });
    }

    #[rstest]
    fn find_by_id_round_trips_saved_records() {
        let store = InMemoryPeopleStore::new();

        System::new().block_on(async move {
            let saved = store.save(draft("Ada")).await.expect("save succeeds");
            let fetched = store
                .find_by_id(saved.id)
                .await
                .expect("lookup succeeds");
            assert_eq!(fetched, Some(saved));
        });
    }

    #[rstest]
    fn find_by_id_returns_none_for_absent_ids() {
        let store = InMemoryPeopleStore::new();

        System::new().block_on(async move {
            let fetched = store.find_by_id(42).await.expect("lookup succeeds");
            assert_eq!(fetched, None);
        });
    }

    #[rstest]
    fn find_all_preserves_insertion_order() {
        let store = InMemoryPeopleStore::new();

        System::new().block_on(async move {
            for name in ["Ada", "Bob", "Cleo"] {
                store.save(draft(name)).await.expect("save succeeds");
            }
            let people = store.find_all().await.expect("list succeeds");
            let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, vec!["Ada", "Bob", "Cleo"]);
            let ids: Vec<i32> = people.iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        });
    }
}
