use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use grouphub_auth::{TeamRank, field_policy};
use grouphub_core::{DomainError, Entity, UserId};

/// Profile record for a member identity.
///
/// The organizational attributes (`division`, `team`, `entity`,
/// `secondary_role`) are the fields the edit policy restricts for `Legacy`
/// viewers; the rest carry no team-specific restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub division: Option<String>,
    pub team: Option<TeamRank>,
    pub entity: Option<String>,
    pub secondary_role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with validated identity fields.
    pub fn new(
        id: UserId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let display_name = display_name.into().trim().to_string();
        if display_name.is_empty() {
            return Err(DomainError::validation("display name cannot be empty"));
        }

        let email = email.into().trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }

        Ok(Self {
            id,
            display_name,
            email,
            phone: None,
            division: None,
            team: None,
            entity: None,
            secondary_role: None,
            created_at,
            updated_at: created_at,
        })
    }

    /// Update one field by its policy name.
    ///
    /// Field names are the same identifiers the edit policy is keyed by;
    /// an unknown name is a validation failure, not a silent no-op.
    pub fn set_field(
        &mut self,
        field: &str,
        value: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        match field {
            "display-name" => {
                let name = value.unwrap_or_default().trim().to_string();
                if name.is_empty() {
                    return Err(DomainError::validation("display name cannot be empty"));
                }
                self.display_name = name;
            }
            "email" => {
                let email = value.unwrap_or_default().trim().to_lowercase();
                if email.is_empty() || !email.contains('@') {
                    return Err(DomainError::validation("invalid email format"));
                }
                self.email = email;
            }
            "phone" => self.phone = value,
            field_policy::FIELD_DIVISION => self.division = value,
            field_policy::FIELD_ENTITY => self.entity = value,
            field_policy::FIELD_SECONDARY_ROLE => self.secondary_role = value,
            field_policy::FIELD_TEAM => {
                self.team = match value {
                    Some(label) => Some(label.parse::<TeamRank>()?),
                    None => None,
                };
            }
            other => {
                return Err(DomainError::validation(format!(
                    "unknown profile field '{other}'"
                )));
            }
        }
        self.updated_at = at;
        Ok(())
    }
}

impl Entity for UserProfile {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
