//! Mutating operations for groups.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use grouphub_auth::Principal;
use grouphub_core::GroupId;
use grouphub_groups::{Group, permissions};
use grouphub_store::GroupStore;

use crate::result::{ActionError, ActionResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupInput {
    pub id: GroupId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGroupInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub fn create_group<S: GroupStore>(
    store: &S,
    caller: Option<&Principal>,
    input: CreateGroupInput,
    occurred_at: DateTime<Utc>,
) -> ActionResult<Group> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    let mut group = Group::new(input.id, input.name, occurred_at)?;
    if store.get(group.id_typed()).is_some() {
        return Err(ActionError::Validation(format!(
            "group '{}' already exists",
            group.id_typed()
        )));
    }

    if !permissions::can_create_group(caller) {
        tracing::debug!(caller = %caller.id, "create_group denied");
        return Err(ActionError::Forbidden("create a group"));
    }

    if input.description.is_some() {
        group.set_description(input.description, occurred_at);
    }
    store.upsert(group.clone());
    Ok(group)
}

pub fn update_group<S: GroupStore>(
    store: &S,
    caller: Option<&Principal>,
    group_id: &GroupId,
    input: UpdateGroupInput,
    occurred_at: DateTime<Utc>,
) -> ActionResult<Group> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(ActionError::Validation(
                "group name cannot be empty".to_string(),
            ));
        }
    }

    let Some(mut group) = store.get(group_id) else {
        return Err(ActionError::NotFound("group"));
    };

    if !permissions::can_edit_group(caller, group_id) {
        tracing::debug!(caller = %caller.id, group = %group_id, "update_group denied");
        return Err(ActionError::Forbidden("edit this group"));
    }

    if let Some(name) = input.name {
        group.rename(name, occurred_at)?;
    }
    if input.description.is_some() {
        group.set_description(input.description, occurred_at);
    }
    store.upsert(group.clone());
    Ok(group)
}

pub fn delete_group<S: GroupStore>(
    store: &S,
    caller: Option<&Principal>,
    group_id: &GroupId,
) -> ActionResult<()> {
    let caller = caller.ok_or(ActionError::NotAuthenticated)?;

    if store.get(group_id).is_none() {
        return Err(ActionError::NotFound("group"));
    }

    if !permissions::can_delete_group(caller, group_id) {
        tracing::debug!(caller = %caller.id, group = %group_id, "delete_group denied");
        return Err(ActionError::Forbidden("delete this group"));
    }

    store.remove(group_id);
    Ok(())
}
