//! Mutating operations for group memberships.
//!
//! The self-removal denial is applied before anything else, then the
//! existence checks, then the Admin-rank authorization, then the mutation.

use grouphub_auth::{GroupRole, Membership, Principal};
use grouphub_core::{GroupId, UserId};
use grouphub_groups::permissions;
use grouphub_store::{AccessDirectory, GroupStore};

use crate::result::{ActionError, ActionResult};

pub fn add_member<G: GroupStore, D: AccessDirectory>(
    groups: &G,
    directory: &D,
    caller: Option<&Principal>,
    group_id: &GroupId,
    user_id: &UserId,
    role: GroupRole,
) -> ActionResult<()> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    if groups.get(group_id).is_none() {
        return Err(ActionError::NotFound("group"));
    }

    if !permissions::can_add_member(caller, group_id) {
        tracing::debug!(caller = %caller.id, group = %group_id, "add_member denied");
        return Err(ActionError::Forbidden("add members to this group"));
    }

    directory.upsert_membership(user_id, Membership::new(group_id.clone(), role));
    Ok(())
}

pub fn remove_member<G: GroupStore, D: AccessDirectory>(
    groups: &G,
    directory: &D,
    caller: Option<&Principal>,
    group_id: &GroupId,
    user_id: &UserId,
) -> ActionResult<()> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    if caller.id == *user_id {
        return Err(ActionError::Forbidden("remove your own membership"));
    }

    if groups.get(group_id).is_none() {
        return Err(ActionError::NotFound("group"));
    }
    if !directory.load_access(user_id).is_member_of(group_id) {
        return Err(ActionError::NotFound("membership"));
    }

    if !permissions::can_remove_member(caller, group_id, user_id) {
        tracing::debug!(caller = %caller.id, group = %group_id, "remove_member denied");
        return Err(ActionError::Forbidden("remove members from this group"));
    }

    directory.remove_membership(user_id, group_id);
    Ok(())
}

pub fn update_member_role<G: GroupStore, D: AccessDirectory>(
    groups: &G,
    directory: &D,
    caller: Option<&Principal>,
    group_id: &GroupId,
    user_id: &UserId,
    role: GroupRole,
) -> ActionResult<()> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    if groups.get(group_id).is_none() {
        return Err(ActionError::NotFound("group"));
    }
    if !directory.load_access(user_id).is_member_of(group_id) {
        return Err(ActionError::NotFound("membership"));
    }

    if !permissions::can_change_member_role(caller, group_id, user_id) {
        tracing::debug!(caller = %caller.id, group = %group_id, "update_member_role denied");
        return Err(ActionError::Forbidden("change member roles in this group"));
    }

    directory.upsert_membership(user_id, Membership::new(group_id.clone(), role));
    Ok(())
}
