//! Mutating operations for user records and profile fields.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use grouphub_auth::{Principal, field_policy};
use grouphub_core::{GroupId, UserId};
use grouphub_store::ProfileStore;
use grouphub_users::{UserProfile, permissions};

use crate::result::{ActionError, ActionResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInput {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub fn create_user<P: ProfileStore>(
    profiles: &P,
    caller: Option<&Principal>,
    group_id: &GroupId,
    input: CreateUserInput,
    occurred_at: DateTime<Utc>,
) -> ActionResult<UserProfile> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    let profile = UserProfile::new(UserId::new(), input.display_name, input.email, occurred_at)?;

    if !permissions::can_create_user(caller, group_id) {
        tracing::debug!(caller = %caller.id, group = %group_id, "create_user denied");
        return Err(ActionError::Forbidden("create users"));
    }

    profiles.upsert(profile.clone());
    Ok(profile)
}

pub fn update_user<P: ProfileStore>(
    profiles: &P,
    caller: Option<&Principal>,
    group_id: &GroupId,
    target: &UserId,
    input: UpdateUserInput,
    occurred_at: DateTime<Utc>,
) -> ActionResult<UserProfile> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    let Some(mut profile) = profiles.get(target) else {
        return Err(ActionError::NotFound("user"));
    };

    if !permissions::can_edit_user(caller, group_id, target) {
        tracing::debug!(caller = %caller.id, target = %target, "update_user denied");
        return Err(ActionError::Forbidden("modify this user"));
    }

    if let Some(display_name) = input.display_name {
        profile.set_field("display-name", Some(display_name), occurred_at)?;
    }
    if let Some(email) = input.email {
        profile.set_field("email", Some(email), occurred_at)?;
    }
    if let Some(phone) = input.phone {
        profile.set_field("phone", Some(phone), occurred_at)?;
    }

    profiles.upsert(profile.clone());
    Ok(profile)
}

pub fn delete_user<P: ProfileStore>(
    profiles: &P,
    caller: Option<&Principal>,
    group_id: &GroupId,
    target: &UserId,
) -> ActionResult<()> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    // Self-deletion is refused outright, even before the existence check;
    // the override is independent of registry content.
    if caller.id == *target {
        return Err(ActionError::Forbidden("delete your own account"));
    }

    if profiles.get(target).is_none() {
        return Err(ActionError::NotFound("user"));
    }

    if !permissions::can_delete_user(caller, group_id, target) {
        tracing::debug!(caller = %caller.id, target = %target, "delete_user denied");
        return Err(ActionError::Forbidden("delete this user"));
    }

    profiles.remove(target);
    Ok(())
}

/// Update a single profile field under the field edit policy.
///
/// Field edits are independent of any group context: the gate is the
/// caller's own team rank (from their profile), except that editing one's
/// own record is always permitted.
pub fn update_profile_field<P: ProfileStore>(
    profiles: &P,
    caller: Option<&Principal>,
    target: &UserId,
    field: &str,
    value: Option<String>,
    occurred_at: DateTime<Utc>,
) -> ActionResult<UserProfile> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    let Some(mut profile) = profiles.get(target) else {
        return Err(ActionError::NotFound("user"));
    };

    if caller.id != *target {
        let viewer_rank = profiles.get(&caller.id).and_then(|p| p.team);
        let allowed = viewer_rank.is_some_and(|rank| {
            field_policy::can_edit(rank) && field_policy::can_edit_field(rank, field)
        });
        if !allowed {
            tracing::debug!(caller = %caller.id, target = %target, field, "field edit denied");
            return Err(ActionError::Forbidden("modify this field"));
        }
    }

    profile.set_field(field, value, occurred_at)?;
    profiles.upsert(profile.clone());
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouphub_auth::{GroupRole, Membership, TeamRank};
    use grouphub_store::InMemoryProfileStore;

    fn member_of(group: &'static str, role: GroupRole) -> Principal {
        Principal::new(
            UserId::new(),
            vec![Membership::new(GroupId::new(group), role)],
        )
    }

    fn seed_profile(store: &InMemoryProfileStore, id: UserId, team: Option<TeamRank>) {
        let mut profile =
            UserProfile::new(id, "Member", "member@example.com", Utc::now()).unwrap();
        profile.team = team;
        store.upsert(profile);
    }

    #[test]
    fn guest_updates_their_own_record() {
        let store = InMemoryProfileStore::new();
        let caller = member_of("bazalthe", GroupRole::Guest);
        seed_profile(&store, caller.id, None);

        let updated = update_user(
            &store,
            Some(&caller),
            &GroupId::new("bazalthe"),
            &caller.id,
            UpdateUserInput {
                phone: Some("555-0100".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();

        assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn owner_cannot_delete_their_own_record() {
        let store = InMemoryProfileStore::new();
        let caller = member_of("bazalthe", GroupRole::Owner);
        seed_profile(&store, caller.id, None);

        let err = delete_user(&store, Some(&caller), &GroupId::new("bazalthe"), &caller.id)
            .unwrap_err();
        assert_eq!(err, ActionError::Forbidden("delete your own account"));
        assert!(store.get(&caller.id).is_some());
    }

    #[test]
    fn legacy_viewer_edits_phone_but_not_team() {
        let store = InMemoryProfileStore::new();
        let caller = member_of("bazalthe", GroupRole::Guest);
        let target = UserId::new();
        seed_profile(&store, caller.id, Some(TeamRank::Legacy));
        seed_profile(&store, target, Some(TeamRank::Squad));

        update_profile_field(
            &store,
            Some(&caller),
            &target,
            "phone",
            Some("555-0199".to_string()),
            Utc::now(),
        )
        .unwrap();

        let err = update_profile_field(
            &store,
            Some(&caller),
            &target,
            "team",
            Some("talent".to_string()),
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err, ActionError::Forbidden("modify this field"));

        let unchanged = store.get(&target).unwrap();
        assert_eq!(unchanged.team, Some(TeamRank::Squad));
        assert_eq!(unchanged.phone.as_deref(), Some("555-0199"));
    }

    #[test]
    fn viewer_without_rank_edits_nothing_on_others() {
        let store = InMemoryProfileStore::new();
        let caller = member_of("bazalthe", GroupRole::Owner);
        let target = UserId::new();
        seed_profile(&store, caller.id, None);
        seed_profile(&store, target, None);

        let err = update_profile_field(
            &store,
            Some(&caller),
            &target,
            "phone",
            Some("555-0000".to_string()),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, ActionError::Forbidden(_)));
    }

    #[test]
    fn unknown_field_is_validation_not_denial() {
        let store = InMemoryProfileStore::new();
        let caller = member_of("bazalthe", GroupRole::Guest);
        seed_profile(&store, caller.id, None);

        let err = update_profile_field(
            &store,
            Some(&caller),
            &caller.id,
            "shoe-size",
            Some("42".to_string()),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, ActionError::Validation(_)));
    }
}
