//! Field-level edit policy for profile records.
//!
//! Keyed by the viewer's [`TeamRank`] and a field name; independent of any
//! group context. The policy is evaluated per field on every render or
//! mutation, so one profile view may legitimately mix editable and
//! read-only rows for the same viewer.

use crate::roles::TeamRank;

pub const FIELD_DIVISION: &str = "division";
pub const FIELD_TEAM: &str = "team";
pub const FIELD_ENTITY: &str = "entity";
pub const FIELD_SECONDARY_ROLE: &str = "secondary-role";

/// Organizational-identity fields restricted for `Legacy` viewers.
///
/// This table is closed: absence of a field means "no team-specific
/// restriction" (still subject to the coarse gate below).
pub const ORG_IDENTITY_FIELDS: [&str; 4] = [
    FIELD_DIVISION,
    FIELD_TEAM,
    FIELD_ENTITY,
    FIELD_SECONDARY_ROLE,
];

const UNRESTRICTED: [TeamRank; 3] = [TeamRank::Owner, TeamRank::Executive, TeamRank::MarshaTeam];

/// Coarse gate consulted before any per-field check.
///
/// `Talent`, `Momentum`, `Squad` — and any rank not explicitly granted —
/// edit nothing; per-field checks are not even consulted for them.
pub fn can_edit(viewer: TeamRank) -> bool {
    UNRESTRICTED.contains(&viewer) || viewer == TeamRank::Legacy
}

/// Whether `viewer` may edit `field` on another person's profile record.
///
/// Resolution order: unrestricted ranks edit every field; `Legacy` edits
/// everything except the organizational-identity fields; everyone else
/// edits nothing.
pub fn can_edit_field(viewer: TeamRank, field: &str) -> bool {
    if UNRESTRICTED.contains(&viewer) {
        return true;
    }
    if viewer == TeamRank::Legacy {
        return !ORG_IDENTITY_FIELDS.contains(&field);
    }
    false
}
