//! Permission wrappers for the groups business area.
//!
//! Each predicate translates a business question ("can this viewer delete
//! that group?") into guard calls. Fixed exceptions (self-removal) are
//! applied before any registry consult and cannot be revoked by registry
//! configuration. Callers confirm the target exists *before* invoking these
//! wrappers; a missing target is a "not found" outcome, never a denial.

use grouphub_auth::{GroupRole, Principal, can_do, cap, has_min_role, is_owner_of_any};
use grouphub_core::{GroupId, UserId};

pub fn can_view_group(viewer: &Principal, group_id: &GroupId) -> bool {
    can_do(viewer, group_id, &cap::GROUPS_VIEW)
}

/// Founding a new group is granted to anyone who owns at least one existing
/// group. There is no target group to scope the check to.
pub fn can_create_group(viewer: &Principal) -> bool {
    is_owner_of_any(viewer)
}

pub fn can_edit_group(viewer: &Principal, group_id: &GroupId) -> bool {
    can_do(viewer, group_id, &cap::GROUPS_EDIT)
}

pub fn can_delete_group(viewer: &Principal, group_id: &GroupId) -> bool {
    can_do(viewer, group_id, &cap::GROUPS_DELETE)
}

pub fn can_view_members(viewer: &Principal, group_id: &GroupId) -> bool {
    can_do(viewer, group_id, &cap::MEMBERS_VIEW)
}

/// Member administration requires at least `Admin` rank in that specific
/// group.
pub fn can_manage_members(viewer: &Principal, group_id: &GroupId) -> bool {
    has_min_role(viewer, group_id, GroupRole::Admin)
}

pub fn can_add_member(viewer: &Principal, group_id: &GroupId) -> bool {
    can_manage_members(viewer, group_id)
}

/// Removing one's own membership is always denied, regardless of rank.
pub fn can_remove_member(viewer: &Principal, group_id: &GroupId, target: &UserId) -> bool {
    if viewer.id == *target {
        return false;
    }
    can_manage_members(viewer, group_id)
}

pub fn can_change_member_role(viewer: &Principal, group_id: &GroupId, _target: &UserId) -> bool {
    can_manage_members(viewer, group_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouphub_auth::Membership;

    fn member_of(group: &'static str, role: GroupRole) -> Principal {
        Principal::new(
            UserId::new(),
            vec![Membership::new(GroupId::new(group), role)],
        )
    }

    #[test]
    fn owner_of_any_group_may_found_a_new_one() {
        let owner = member_of("bazalthe", GroupRole::Owner);
        assert!(can_create_group(&owner));

        let admin = member_of("bazalthe", GroupRole::Admin);
        assert!(!can_create_group(&admin));

        let nobody = Principal::without_memberships(UserId::new());
        assert!(!can_create_group(&nobody));
    }

    #[test]
    fn collaborator_cannot_delete_their_group() {
        let collaborator = member_of("bazalthe", GroupRole::Collaborator);
        assert!(!can_delete_group(&collaborator, &GroupId::new("bazalthe")));
        assert!(can_view_group(&collaborator, &GroupId::new("bazalthe")));
    }

    #[test]
    fn member_administration_needs_admin_in_that_group() {
        let group = GroupId::new("g1");
        let manager = member_of("g1", GroupRole::Manager);
        let admin = member_of("g1", GroupRole::Admin);

        assert!(!can_add_member(&manager, &group));
        assert!(can_add_member(&admin, &group));

        // Admin rank elsewhere does not carry over.
        assert!(!can_add_member(&admin, &GroupId::new("g2")));
    }

    #[test]
    fn self_removal_is_always_denied() {
        let admin = member_of("g1", GroupRole::Admin);
        let group = GroupId::new("g1");

        assert!(!can_remove_member(&admin, &group, &admin.id));
        assert!(can_remove_member(&admin, &group, &UserId::new()));
    }
}
