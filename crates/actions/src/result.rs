//! Structured action outcomes.

use serde::Serialize;
use thiserror::Error;

use grouphub_core::DomainError;

/// Failure outcome of a mutating operation.
///
/// Messages are user-facing and keep "not signed in", "not permitted", and
/// "not found" distinct. Denial is expected and ordinary — never a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("you are not signed in")]
    NotAuthenticated,

    /// Authorization denial, naming the action that was refused.
    #[error("you do not have permission to {0}")]
    Forbidden(&'static str),

    /// The target does not exist. Checked before authorization so the two
    /// outcomes can never be conflated.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),
}

impl From<DomainError> for ActionError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg)
            | DomainError::InvariantViolation(msg)
            | DomainError::InvalidId(msg) => ActionError::Validation(msg),
            DomainError::NotFound => ActionError::NotFound("resource"),
            DomainError::Unauthorized => ActionError::Forbidden("perform this action"),
        }
    }
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Wire shape consumed by presentation callers:
/// `{ "success": true, "data": ... }` or `{ "success": false, "error": ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<ActionResult<T>> for ActionResponse<T> {
    fn from(result: ActionResult<T>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(err) => Self {
                success: false,
                data: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_serializes_with_a_user_facing_message() {
        let response: ActionResponse<()> =
            ActionResult::Err(ActionError::Forbidden("delete this group")).into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "you do not have permission to delete this group",
            })
        );
    }

    #[test]
    fn success_carries_data() {
        let response: ActionResponse<u32> = ActionResult::Ok(7).into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": 7 }));
    }

    #[test]
    fn not_found_and_forbidden_read_differently() {
        assert_ne!(
            ActionError::NotFound("group").to_string(),
            ActionError::Forbidden("edit this group").to_string()
        );
        assert_eq!(ActionError::NotFound("group").to_string(), "group not found");
    }
}
