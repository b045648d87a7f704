use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A suggested repayment. Derived from a balance snapshot on demand and
/// never persisted as ledger state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Uuid,
    pub to: Uuid,
    pub amount: f64,
}
