//! Capability identifiers and the compiled-in registry.
//!
//! A capability is a named permission to perform one action on one resource
//! type, spelled `resource:action`. The registry is a closed, process-wide
//! constant: new policy ships as a new build, never as runtime mutation.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::roles::GroupRole;

/// Capability identifier (e.g. `"groups:delete"`).
///
/// Ids are drawn from the closed registry below; referencing an id outside
/// the registry is a programming error, not a runtime denial
/// (see [`crate::guard::can_do`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Requirement a capability places on the caller's role in the target group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityRequirement {
    /// Hierarchical: any role at or above the threshold qualifies.
    MinRole(GroupRole),
    /// Non-monotonic: only the listed roles qualify. Used where business
    /// rules do not follow strict rank order.
    ExplicitRoles(&'static [GroupRole]),
}

impl CapabilityRequirement {
    /// Whether `role` meets this requirement.
    pub fn is_met_by(&self, role: GroupRole) -> bool {
        match self {
            Self::MinRole(min) => role.satisfies(*min),
            Self::ExplicitRoles(allowed) => allowed.contains(&role),
        }
    }
}

/// The registered capability ids (the closed set).
///
/// Group creation is deliberately absent: founding a group has no target
/// group to scope a check to, so it is gated by
/// [`crate::guard::is_owner_of_any`] instead.
pub mod cap {
    use super::Capability;

    pub const GROUPS_VIEW: Capability = Capability::from_static("groups:view");
    pub const GROUPS_EDIT: Capability = Capability::from_static("groups:edit");
    pub const GROUPS_DELETE: Capability = Capability::from_static("groups:delete");

    pub const USERS_VIEW: Capability = Capability::from_static("users:view");
    pub const USERS_CREATE: Capability = Capability::from_static("users:create");
    pub const USERS_EDIT: Capability = Capability::from_static("users:edit");
    pub const USERS_DELETE: Capability = Capability::from_static("users:delete");

    pub const MEMBERS_VIEW: Capability = Capability::from_static("members:view");
    pub const MEMBERS_ADD: Capability = Capability::from_static("members:add");
    pub const MEMBERS_REMOVE: Capability = Capability::from_static("members:remove");
    pub const MEMBERS_EDIT: Capability = Capability::from_static("members:edit");

    /// Every registered capability, for audits and registry tests.
    pub const ALL: [&Capability; 11] = [
        &GROUPS_VIEW,
        &GROUPS_EDIT,
        &GROUPS_DELETE,
        &USERS_VIEW,
        &USERS_CREATE,
        &USERS_EDIT,
        &USERS_DELETE,
        &MEMBERS_VIEW,
        &MEMBERS_ADD,
        &MEMBERS_REMOVE,
        &MEMBERS_EDIT,
    ];
}

/// Resolve a capability in the compiled-in registry.
///
/// `None` means the id was never registered — a defect in the calling code,
/// not a normal denial.
pub fn requirement(capability: &Capability) -> Option<CapabilityRequirement> {
    use CapabilityRequirement::{ExplicitRoles, MinRole};
    use GroupRole::{Admin, Collaborator, Guest, Manager, Owner};

    let requirement = match capability.as_str() {
        "groups:view" => MinRole(Guest),
        "groups:edit" => MinRole(Admin),
        "groups:delete" => MinRole(Admin),
        "users:view" => MinRole(Guest),
        "users:create" => MinRole(Admin),
        "users:edit" => MinRole(Manager),
        "users:delete" => ExplicitRoles(&[Admin, Owner]),
        "members:view" => MinRole(Collaborator),
        "members:add" | "members:remove" | "members:edit" => MinRole(Admin),
        _ => return None,
    };
    Some(requirement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_capability_resolves() {
        for capability in cap::ALL {
            assert!(
                requirement(capability).is_some(),
                "unresolvable: {capability}"
            );
        }
    }

    #[test]
    fn unknown_capability_does_not_resolve() {
        assert_eq!(requirement(&Capability::new("groups:transmogrify")), None);
    }

    #[test]
    fn min_role_requirement_is_hierarchical() {
        let requirement = requirement(&cap::GROUPS_DELETE).unwrap();
        assert!(!requirement.is_met_by(GroupRole::Collaborator));
        assert!(requirement.is_met_by(GroupRole::Admin));
        assert!(requirement.is_met_by(GroupRole::Owner));
    }

    #[test]
    fn explicit_roles_requirement_lists_exactly() {
        let requirement = requirement(&cap::USERS_DELETE).unwrap();
        assert!(requirement.is_met_by(GroupRole::Admin));
        assert!(requirement.is_met_by(GroupRole::Owner));
        assert!(!requirement.is_met_by(GroupRole::Manager));
        assert!(!requirement.is_met_by(GroupRole::Guest));
    }
}
