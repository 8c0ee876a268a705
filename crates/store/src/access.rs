//! Membership snapshot source.
//!
//! The only authorization input that crosses the storage boundary. Callers
//! load a snapshot once per operation; nothing here may be replaced by an
//! ambient module-level cache of "loaded users" — result caching keyed on
//! guard output risks granting access that was revoked moments earlier.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use grouphub_auth::{Membership, Principal};
use grouphub_core::{GroupId, UserId};

/// Per-operation membership snapshot loader and the membership write seam.
pub trait AccessDirectory: Send + Sync {
    /// Load the caller's complete membership snapshot.
    ///
    /// Unknown identities resolve to a principal with no memberships:
    /// absence of membership is "no access", not an error.
    fn load_access(&self, user_id: &UserId) -> Principal;

    /// Bind `user_id` to a group, replacing any existing membership for the
    /// same group. A role is never ambiguous within one group.
    fn upsert_membership(&self, user_id: &UserId, membership: Membership);

    /// Drop the membership for `group_id`, if any. Returns whether one
    /// existed.
    fn remove_membership(&self, user_id: &UserId, group_id: &GroupId) -> bool;
}

impl<D> AccessDirectory for Arc<D>
where
    D: AccessDirectory + ?Sized,
{
    fn load_access(&self, user_id: &UserId) -> Principal {
        (**self).load_access(user_id)
    }

    fn upsert_membership(&self, user_id: &UserId, membership: Membership) {
        (**self).upsert_membership(user_id, membership)
    }

    fn remove_membership(&self, user_id: &UserId, group_id: &GroupId) -> bool {
        (**self).remove_membership(user_id, group_id)
    }
}

/// In-memory membership directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryAccessDirectory {
    inner: RwLock<HashMap<UserId, Vec<Membership>>>,
}

impl InMemoryAccessDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl AccessDirectory for InMemoryAccessDirectory {
    fn load_access(&self, user_id: &UserId) -> Principal {
        let memberships = match self.inner.read() {
            Ok(map) => map.get(user_id).cloned().unwrap_or_default(),
            Err(_) => Vec::new(),
        };
        Principal::new(*user_id, memberships)
    }

    fn upsert_membership(&self, user_id: &UserId, membership: Membership) {
        if let Ok(mut map) = self.inner.write() {
            let memberships = map.entry(*user_id).or_default();
            memberships.retain(|m| m.group_id != membership.group_id);
            memberships.push(membership);
        }
    }

    fn remove_membership(&self, user_id: &UserId, group_id: &GroupId) -> bool {
        if let Ok(mut map) = self.inner.write() {
            if let Some(memberships) = map.get_mut(user_id) {
                let before = memberships.len();
                memberships.retain(|m| &m.group_id != group_id);
                return memberships.len() != before;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouphub_auth::GroupRole;

    #[test]
    fn unknown_identity_loads_empty_snapshot() {
        let directory = InMemoryAccessDirectory::new();
        let principal = directory.load_access(&UserId::new());
        assert!(principal.memberships.is_empty());
    }

    #[test]
    fn upsert_replaces_the_role_for_one_group() {
        let directory = InMemoryAccessDirectory::new();
        let user = UserId::new();
        let group = GroupId::new("bazalthe");

        directory.upsert_membership(&user, Membership::new(group.clone(), GroupRole::Guest));
        directory.upsert_membership(&user, Membership::new(group.clone(), GroupRole::Manager));

        let principal = directory.load_access(&user);
        assert_eq!(principal.memberships.len(), 1);
        assert_eq!(principal.role_in(&group), Some(GroupRole::Manager));
    }

    #[test]
    fn remove_reports_whether_a_membership_existed() {
        let directory = InMemoryAccessDirectory::new();
        let user = UserId::new();
        let group = GroupId::new("bazalthe");

        assert!(!directory.remove_membership(&user, &group));

        directory.upsert_membership(&user, Membership::new(group.clone(), GroupRole::Guest));
        assert!(directory.remove_membership(&user, &group));
        assert!(!directory.load_access(&user).is_member_of(&group));
    }
}
