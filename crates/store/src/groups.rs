//! Group persistence seam.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use grouphub_core::GroupId;
use grouphub_groups::Group;

/// Group store abstraction (external collaborator).
pub trait GroupStore: Send + Sync {
    fn get(&self, id: &GroupId) -> Option<Group>;
    fn upsert(&self, group: Group);
    fn remove(&self, id: &GroupId) -> bool;
    fn list(&self) -> Vec<Group>;
}

impl<S> GroupStore for Arc<S>
where
    S: GroupStore + ?Sized,
{
    fn get(&self, id: &GroupId) -> Option<Group> {
        (**self).get(id)
    }

    fn upsert(&self, group: Group) {
        (**self).upsert(group)
    }

    fn remove(&self, id: &GroupId) -> bool {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<Group> {
        (**self).list()
    }
}

/// In-memory group store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryGroupStore {
    inner: RwLock<HashMap<GroupId, Group>>,
}

impl InMemoryGroupStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl GroupStore for InMemoryGroupStore {
    fn get(&self, id: &GroupId) -> Option<Group> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn upsert(&self, group: Group) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(group.id_typed().clone(), group);
        }
    }

    fn remove(&self, id: &GroupId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(id).is_some(),
            Err(_) => false,
        }
    }

    fn list(&self) -> Vec<Group> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}
