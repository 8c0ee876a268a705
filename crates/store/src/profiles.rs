//! Profile persistence seam.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use grouphub_core::UserId;
use grouphub_users::UserProfile;

/// Profile store abstraction (external collaborator).
pub trait ProfileStore: Send + Sync {
    fn get(&self, id: &UserId) -> Option<UserProfile>;
    fn upsert(&self, profile: UserProfile);
    fn remove(&self, id: &UserId) -> bool;
    fn list(&self) -> Vec<UserProfile>;
}

impl<S> ProfileStore for Arc<S>
where
    S: ProfileStore + ?Sized,
{
    fn get(&self, id: &UserId) -> Option<UserProfile> {
        (**self).get(id)
    }

    fn upsert(&self, profile: UserProfile) {
        (**self).upsert(profile)
    }

    fn remove(&self, id: &UserId) -> bool {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<UserProfile> {
        (**self).list()
    }
}

/// In-memory profile store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    inner: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, id: &UserId) -> Option<UserProfile> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn upsert(&self, profile: UserProfile) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(profile.id, profile);
        }
    }

    fn remove(&self, id: &UserId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(id).is_some(),
            Err(_) => false,
        }
    }

    fn list(&self) -> Vec<UserProfile> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn upsert_then_get_round_trips() {
        let store = InMemoryProfileStore::new();
        let profile =
            UserProfile::new(UserId::new(), "Alice", "alice@example.com", Utc::now()).unwrap();

        store.upsert(profile.clone());
        assert_eq!(store.get(&profile.id), Some(profile));
    }
}
