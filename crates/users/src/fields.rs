//! Per-field edit gating for profile rendering.
//!
//! Read-only call sites evaluate the field policy per row to decide whether
//! to render an edit affordance. A `false` must degrade to a disabled or
//! hidden control, never an enabled one that then fails server-side.

use serde::Serialize;

use grouphub_auth::{TeamRank, field_policy};

/// One profile row as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldAccess<'a> {
    pub field: &'a str,
    pub editable: bool,
}

/// Evaluate the field policy for every row a profile form renders.
///
/// A viewer with no team rank is treated like any unlisted rank: nothing is
/// editable.
pub fn editable_fields<'a>(viewer: Option<TeamRank>, fields: &[&'a str]) -> Vec<FieldAccess<'a>> {
    fields
        .iter()
        .map(|&field| FieldAccess {
            field,
            editable: viewer
                .is_some_and(|rank| field_policy::can_edit(rank) && field_policy::can_edit_field(rank, field)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouphub_auth::field_policy::{FIELD_DIVISION, FIELD_TEAM};

    const FORM: [&str; 5] = [FIELD_DIVISION, FIELD_TEAM, "email", "phone", "display-name"];

    #[test]
    fn legacy_sees_a_mixed_form() {
        let rows = editable_fields(Some(TeamRank::Legacy), &FORM);
        let editable: Vec<&str> = rows.iter().filter(|r| r.editable).map(|r| r.field).collect();
        assert_eq!(editable, vec!["email", "phone", "display-name"]);
    }

    #[test]
    fn executive_sees_everything_editable() {
        let rows = editable_fields(Some(TeamRank::Executive), &FORM);
        assert!(rows.iter().all(|r| r.editable));
    }

    #[test]
    fn missing_rank_sees_nothing_editable() {
        let rows = editable_fields(None, &FORM);
        assert!(rows.iter().all(|r| !r.editable));

        let rows = editable_fields(Some(TeamRank::Squad), &FORM);
        assert!(rows.iter().all(|r| !r.editable));
    }
}
