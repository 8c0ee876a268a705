use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grouphub_core::{DomainError, Entity, GroupId};

/// A tenant boundary. A member's role is always evaluated relative to one
/// specific group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a group with a validated display name.
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("group name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            description: None,
            created_at,
            updated_at: created_at,
        })
    }

    pub fn id_typed(&self) -> &GroupId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn rename(
        &mut self,
        name: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("group name cannot be empty"));
        }
        self.name = name;
        self.updated_at = at;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>, at: DateTime<Utc>) {
        self.description = description;
        self.updated_at = at;
    }
}

impl Entity for Group {
    type Id = GroupId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
