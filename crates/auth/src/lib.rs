//! `grouphub-auth` — pure authorization core (zero-trust, no IO).
//!
//! This crate decides, it never fetches: callers load a [`Principal`]
//! membership snapshot once per operation and pass it to the guard
//! functions. Everything here is synchronous, side-effect free, and safe to
//! call from arbitrarily many concurrent operations.

pub mod capability;
pub mod field_policy;
pub mod guard;
pub mod principal;
pub mod roles;

pub use capability::{Capability, CapabilityRequirement, cap, requirement};
pub use guard::{can_do, has_min_role, is_owner_of_any};
pub use principal::{Membership, Principal};
pub use roles::{GroupRole, TeamRank};
