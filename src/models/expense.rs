use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// How an expense is divided among the group's participants.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "split_type", rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Amount divided evenly across all participants.
    Equal,
    /// Member id to percentage of the amount, in [0, 100]. Percentages
    /// must cover exactly the participant set and sum to 100.
    Percentage { percentages: HashMap<Uuid, f64> },
}

/// A recorded expense. Immutable once recorded; the ledger is append-only
/// and past expenses are never edited or retracted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub group_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub paid_by: Uuid,
    pub policy: SplitPolicy,
    pub created_at: DateTime<Utc>,
}
