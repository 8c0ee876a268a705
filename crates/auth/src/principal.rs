//! Membership index and resolved principal.

use serde::{Deserialize, Serialize};

use grouphub_core::{GroupId, UserId, ValueObject};

use crate::roles::GroupRole;

/// Binding of an identity to one group with a specific role.
///
/// Invariant: an identity holds at most one membership per group, so a role
/// is never ambiguous within one group. The write seam (membership store)
/// enforces this on upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub group_id: GroupId,
    pub role: GroupRole,
}

impl Membership {
    pub fn new(group_id: GroupId, role: GroupRole) -> Self {
        Self { group_id, role }
    }
}

impl ValueObject for Membership {}

/// A fully resolved identity for authorization decisions.
///
/// Construction is decoupled from storage and transport: the caller loads
/// this snapshot once per operation and treats it as immutable for the
/// duration of that operation. The guards never re-fetch mid-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub memberships: Vec<Membership>,
}

impl Principal {
    pub fn new(id: UserId, memberships: Vec<Membership>) -> Self {
        debug_assert!(
            {
                let mut groups: Vec<&GroupId> =
                    memberships.iter().map(|m| &m.group_id).collect();
                groups.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                groups.windows(2).all(|pair| pair[0] != pair[1])
            },
            "duplicate membership for one group"
        );
        Self { id, memberships }
    }

    /// A valid caller with no memberships: every group-scoped check
    /// resolves to "no access" through the normal `false` path.
    pub fn without_memberships(id: UserId) -> Self {
        Self {
            id,
            memberships: Vec::new(),
        }
    }

    /// The caller's role in `group_id`, if they are a member.
    pub fn role_in(&self, group_id: &GroupId) -> Option<GroupRole> {
        self.memberships
            .iter()
            .find(|m| &m.group_id == group_id)
            .map(|m| m.role)
    }

    pub fn is_member_of(&self, group_id: &GroupId) -> bool {
        self.role_in(group_id).is_some()
    }
}
