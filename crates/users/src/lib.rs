//! Users domain module (profile records and their edit gating).
//!
//! A profile's `team` attribute carries the organizational [`TeamRank`]
//! consumed by the field edit policy; it is unrelated to any group role the
//! same identity may hold.
//!
//! [`TeamRank`]: grouphub_auth::TeamRank

pub mod fields;
pub mod permissions;
pub mod profile;

pub use fields::{FieldAccess, editable_fields};
pub use profile::UserProfile;
