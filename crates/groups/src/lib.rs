//! Groups domain module (tenant boundaries and member administration).
//!
//! Pure business rules: no IO, no HTTP, no storage. Authorization questions
//! are answered by the permission wrappers in [`permissions`], composed
//! from the `grouphub-auth` guards plus the fixed business exceptions.

pub mod group;
pub mod permissions;

pub use group::Group;
