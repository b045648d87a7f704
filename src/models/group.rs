use super::member::Member;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A set of members sharing expenses. The member list preserves insertion
/// order, but the order carries no meaning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<Member>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn is_member(&self, member_id: Uuid) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }

    pub fn member_ids(&self) -> Vec<Uuid> {
        self.members.iter().map(|m| m.id).collect()
    }

    pub fn member_name(&self, member_id: Uuid) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.id == member_id)
            .map(|m| m.name.as_str())
    }
}
