//! `grouphub-store` — storage seams for the authorization core.
//!
//! Persistence of groups, profiles, and memberships is an external
//! collaborator; this crate specifies only the interfaces the decision
//! library needs, plus in-memory implementations for tests and dev.

pub mod access;
pub mod groups;
pub mod profiles;

pub use access::{AccessDirectory, InMemoryAccessDirectory};
pub use groups::{GroupStore, InMemoryGroupStore};
pub use profiles::{InMemoryProfileStore, ProfileStore};
