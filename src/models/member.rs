use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A participant, owned by the external user directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
}
