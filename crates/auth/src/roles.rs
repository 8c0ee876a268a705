//! The two role hierarchies.
//!
//! [`GroupRole`] and [`TeamRank`] are independent, strictly ordered axes.
//! Several labels are spelled identically across them ("Owner", "Legacy")
//! but carry unrelated meaning; keeping them as distinct types makes a
//! misrouted comparison a compile error instead of a latent defect.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use grouphub_core::DomainError;

/// Group-scoped rank used for capability checks.
///
/// Ordered from least to most privileged:
/// Guest < Collaborator < Manager < Admin < Owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupRole {
    Guest,
    Collaborator,
    Manager,
    Admin,
    Owner,
}

impl GroupRole {
    /// Every role, in ascending rank order.
    pub const ALL: [GroupRole; 5] = [
        GroupRole::Guest,
        GroupRole::Collaborator,
        GroupRole::Manager,
        GroupRole::Admin,
        GroupRole::Owner,
    ];

    /// Hierarchical level (higher number = more privileged).
    pub const fn rank(self) -> u8 {
        match self {
            GroupRole::Guest => 0,
            GroupRole::Collaborator => 1,
            GroupRole::Manager => 2,
            GroupRole::Admin => 3,
            GroupRole::Owner => 4,
        }
    }

    /// Whether this role meets a requirement of `min` or below.
    ///
    /// Reflexive (a role satisfies itself) and monotonic (satisfying a
    /// higher requirement implies satisfying every lower one).
    pub const fn satisfies(self, min: GroupRole) -> bool {
        self.rank() >= min.rank()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GroupRole::Guest => "guest",
            GroupRole::Collaborator => "collaborator",
            GroupRole::Manager => "manager",
            GroupRole::Admin => "admin",
            GroupRole::Owner => "owner",
        }
    }
}

impl PartialOrd for GroupRole {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupRole {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl core::fmt::Display for GroupRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guest" => Ok(GroupRole::Guest),
            "collaborator" => Ok(GroupRole::Collaborator),
            "manager" => Ok(GroupRole::Manager),
            "admin" => Ok(GroupRole::Admin),
            "owner" => Ok(GroupRole::Owner),
            other => Err(DomainError::invalid_id(format!(
                "GroupRole: unknown label '{other}'"
            ))),
        }
    }
}

/// Organizational rank attached to a profile's team attribute.
///
/// Consumed exclusively by the field edit policy (and UI ordering); never
/// comparable to [`GroupRole`].
///
/// Ordered from least to most senior:
/// Squad < Momentum < Talent < Legacy < Marsha Team < Executive < Owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamRank {
    Squad,
    Momentum,
    Talent,
    Legacy,
    MarshaTeam,
    Executive,
    Owner,
}

impl TeamRank {
    /// Every rank, in ascending order.
    pub const ALL: [TeamRank; 7] = [
        TeamRank::Squad,
        TeamRank::Momentum,
        TeamRank::Talent,
        TeamRank::Legacy,
        TeamRank::MarshaTeam,
        TeamRank::Executive,
        TeamRank::Owner,
    ];

    /// Hierarchical level (higher number = more senior).
    pub const fn rank(self) -> u8 {
        match self {
            TeamRank::Squad => 0,
            TeamRank::Momentum => 1,
            TeamRank::Talent => 2,
            TeamRank::Legacy => 3,
            TeamRank::MarshaTeam => 4,
            TeamRank::Executive => 5,
            TeamRank::Owner => 6,
        }
    }

    /// Stable identifier used in storage and transport.
    pub const fn as_str(self) -> &'static str {
        match self {
            TeamRank::Squad => "squad",
            TeamRank::Momentum => "momentum",
            TeamRank::Talent => "talent",
            TeamRank::Legacy => "legacy",
            TeamRank::MarshaTeam => "marsha-team",
            TeamRank::Executive => "executive",
            TeamRank::Owner => "owner",
        }
    }

    /// Human-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            TeamRank::Squad => "Squad",
            TeamRank::Momentum => "Momentum",
            TeamRank::Talent => "Talent",
            TeamRank::Legacy => "Legacy",
            TeamRank::MarshaTeam => "Marsha Team",
            TeamRank::Executive => "Executive",
            TeamRank::Owner => "Owner",
        }
    }
}

impl PartialOrd for TeamRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TeamRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl core::fmt::Display for TeamRank {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TeamRank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "squad" => Ok(TeamRank::Squad),
            "momentum" => Ok(TeamRank::Momentum),
            "talent" => Ok(TeamRank::Talent),
            "legacy" => Ok(TeamRank::Legacy),
            "marsha-team" | "marsha team" => Ok(TeamRank::MarshaTeam),
            "executive" => Ok(TeamRank::Executive),
            "owner" => Ok(TeamRank::Owner),
            other => Err(DomainError::invalid_id(format!(
                "TeamRank: unknown label '{other}'"
            ))),
        }
    }
}
