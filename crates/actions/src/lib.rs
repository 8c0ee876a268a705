//! `grouphub-actions` — mutating-operation surface over the decision core.
//!
//! Every action follows the same fixed pipeline: authenticate, validate
//! input, confirm the target exists, authorize, then mutate. A denial is an
//! ordinary outcome carried as a value, performs no partial mutation, and
//! is never conflated with "not found".

pub mod groups;
pub mod members;
pub mod result;
pub mod users;

pub use result::{ActionError, ActionResponse, ActionResult};
