//! Permission wrappers for the users business area.
//!
//! Self-action overrides come first, before any registry consult: editing
//! one's own record is always permitted, deleting one's own record is
//! always denied. Neither can be revoked by registry configuration.

use grouphub_auth::{Principal, can_do, cap};
use grouphub_core::{GroupId, UserId};

pub fn can_view_user(viewer: &Principal, group_id: &GroupId) -> bool {
    can_do(viewer, group_id, &cap::USERS_VIEW)
}

pub fn can_create_user(viewer: &Principal, group_id: &GroupId) -> bool {
    can_do(viewer, group_id, &cap::USERS_CREATE)
}

/// Editing one's own record is always permitted.
pub fn can_edit_user(viewer: &Principal, group_id: &GroupId, target: &UserId) -> bool {
    if viewer.id == *target {
        return true;
    }
    can_do(viewer, group_id, &cap::USERS_EDIT)
}

/// Deleting one's own record is always denied.
pub fn can_delete_user(viewer: &Principal, group_id: &GroupId, target: &UserId) -> bool {
    if viewer.id == *target {
        return false;
    }
    can_do(viewer, group_id, &cap::USERS_DELETE)
}
