//! Group membership
//!
//! Callers hand membership over either as bare user ids or as full member
//! records. [`Membership`] normalizes both shapes once per invocation into a
//! hash-indexed lookup so the scoring code never branches on representation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display name used for voters without a membership record
pub const UNKNOWN_VOTER_NAME: &str = "Unknown";

/// A full member record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Per-member weight multiplier (defaults to 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl Member {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            avatar: None,
            vote_weight: None,
            is_verified: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_vote_weight(mut self, weight: f64) -> Self {
        self.vote_weight = Some(weight);
        self
    }

    pub fn verified(mut self) -> Self {
        self.is_verified = Some(true);
        self
    }
}

/// A membership entry as supplied by callers: a bare id or a full record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberEntry {
    Id(String),
    Record(Member),
}

impl MemberEntry {
    pub fn user_id(&self) -> &str {
        match self {
            MemberEntry::Id(id) => id,
            MemberEntry::Record(member) => &member.user_id,
        }
    }

    fn into_member(self) -> Member {
        match self {
            MemberEntry::Id(id) => Member::new(id),
            MemberEntry::Record(member) => member,
        }
    }
}

impl From<Member> for MemberEntry {
    fn from(member: Member) -> Self {
        MemberEntry::Record(member)
    }
}

impl From<&str> for MemberEntry {
    fn from(id: &str) -> Self {
        MemberEntry::Id(id.to_string())
    }
}

/// Voter attributes with every default already applied
#[derive(Debug, Clone, PartialEq)]
pub struct VoterProfile {
    pub name: String,
    pub avatar: Option<String>,
    pub weight: f64,
    pub verified: bool,
}

impl VoterProfile {
    fn unknown() -> Self {
        Self {
            name: UNKNOWN_VOTER_NAME.to_string(),
            avatar: None,
            weight: 1.0,
            verified: false,
        }
    }
}

/// Normalized, hash-indexed group membership
#[derive(Debug, Clone, Default)]
pub struct Membership {
    members: Vec<Member>,
    index: HashMap<String, usize>,
}

impl Membership {
    /// Build the lookup from caller-supplied entries.
    ///
    /// Duplicate user ids keep the first occurrence.
    pub fn from_entries(entries: &[MemberEntry]) -> Self {
        let mut members = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            if index.contains_key(entry.user_id()) {
                continue;
            }
            index.insert(entry.user_id().to_string(), members.len());
            members.push(entry.clone().into_member());
        }

        Self { members, index }
    }

    pub fn get(&self, user_id: &str) -> Option<&Member> {
        self.index.get(user_id).map(|&i| &self.members[i])
    }

    /// Member ids in their original order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.user_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Resolve a voter's profile, defaulting unknown voters
    pub fn profile(&self, user_id: &str) -> VoterProfile {
        let Some(member) = self.get(user_id) else {
            return VoterProfile::unknown();
        };

        VoterProfile {
            name: member
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_VOTER_NAME.to_string()),
            avatar: member.avatar.clone(),
            weight: member.vote_weight.unwrap_or(1.0),
            verified: member.is_verified.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_entries() {
        let json = r#"["u1", {"user_id": "u2", "name": "Mika", "vote_weight": 2.0}]"#;
        let entries: Vec<MemberEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries[0], MemberEntry::Id("u1".to_string()));
        assert!(matches!(&entries[1], MemberEntry::Record(m) if m.user_id == "u2"));
    }

    #[test]
    fn test_membership_dedupes_and_keeps_order() {
        let entries = vec![
            MemberEntry::from("u2"),
            MemberEntry::from(Member::new("u1").with_name("Ada")),
            MemberEntry::from(Member::new("u2").with_name("Later duplicate")),
        ];
        let membership = Membership::from_entries(&entries);

        assert_eq!(membership.len(), 2);
        assert_eq!(membership.ids().collect::<Vec<_>>(), vec!["u2", "u1"]);
        assert!(membership.get("u2").unwrap().name.is_none());
    }

    #[test]
    fn test_profile_defaults_for_unknown_voter() {
        let membership = Membership::default();
        let profile = membership.profile("ghost");

        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.weight, 1.0);
        assert!(!profile.verified);
        assert!(profile.avatar.is_none());
    }

    #[test]
    fn test_profile_uses_member_record() {
        let entries = vec![MemberEntry::from(
            Member::new("u1")
                .with_name("Ada")
                .with_avatar("https://img/ada.png")
                .with_vote_weight(2.0)
                .verified(),
        )];
        let profile = Membership::from_entries(&entries).profile("u1");

        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.weight, 2.0);
        assert!(profile.verified);
        assert_eq!(profile.avatar.as_deref(), Some("https://img/ada.png"));
    }

    #[test]
    fn test_bare_id_member_gets_defaults() {
        let membership = Membership::from_entries(&[MemberEntry::from("u1")]);
        let profile = membership.profile("u1");

        assert!(membership.get("u1").is_some());
        assert_eq!(profile.name, UNKNOWN_VOTER_NAME);
        assert_eq!(profile.weight, 1.0);
    }
}
