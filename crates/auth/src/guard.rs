//! The three pure authorization primitives.
//!
//! Each guard evaluates a caller-supplied [`Principal`] snapshot against the
//! compiled-in registry and returns a single boolean. No IO, no locking, no
//! partial outcomes; a `false` is immediate and final for that operation.

use grouphub_core::GroupId;

use crate::capability::{self, Capability};
use crate::principal::Principal;
use crate::roles::GroupRole;

/// Whether the caller holds `role` or better in `group_id`.
///
/// No membership in the group resolves to `false` unconditionally; there is
/// no implicit or default access to a group one is not a member of.
pub fn has_min_role(principal: &Principal, group_id: &GroupId, role: GroupRole) -> bool {
    match principal.role_in(group_id) {
        Some(held) => held.satisfies(role),
        None => false,
    }
}

/// Whether the caller may exercise `capability` in `group_id`.
///
/// An unregistered capability id is a defect in the calling code: debug and
/// test builds fail loudly here, release builds log an error and fail
/// closed, since crashing a production authorization check on a
/// caller-supplied value would itself be a denial-of-service vector.
pub fn can_do(principal: &Principal, group_id: &GroupId, capability: &Capability) -> bool {
    let Some(requirement) = capability::requirement(capability) else {
        debug_assert!(false, "capability '{capability}' is not registered");
        tracing::error!(capability = %capability, "unregistered capability id; denying");
        return false;
    };

    match principal.role_in(group_id) {
        Some(role) => requirement.is_met_by(role),
        None => false,
    }
}

/// Whether the caller is an Owner of at least one group — any group.
///
/// The only guard not scoped to a single group: it gates operations that
/// are not about acting *within* a group, such as founding a new one.
pub fn is_owner_of_any(principal: &Principal) -> bool {
    principal
        .memberships
        .iter()
        .any(|m| m.role == GroupRole::Owner)
}
