use crate::error::DivvyError;
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

pub mod in_memory;

/// Turns a computed share map into signed balance deltas: every
/// participant is debited their share, then the payer is credited the
/// full amount, so the payer's net change is the amount minus their own
/// share. The deltas sum to zero up to floating error, which is what
/// keeps the per-group conservation law intact.
pub fn balance_deltas(
    amount: f64,
    payer: Uuid,
    shares: &HashMap<Uuid, f64>,
) -> HashMap<Uuid, f64> {
    let mut deltas: HashMap<Uuid, f64> = HashMap::new();
    for (&member, &share) in shares {
        *deltas.entry(member).or_insert(0.0) -= share;
    }
    *deltas.entry(payer).or_insert(0.0) += amount;
    deltas
}

/// Net balance bookkeeping per (member, group) pair. Positive means the
/// member is owed money within the group, negative means they owe.
///
/// Implementations must serialize `apply_deltas` per group and must not
/// let reads observe a partially applied update.
#[async_trait]
pub trait BalanceLedger: Send + Sync {
    /// Starts tracking the member in the group at zero if not already
    /// tracked. Idempotent.
    async fn initialize(&self, group_id: Uuid, member_id: Uuid) -> Result<(), DivvyError>;

    /// Applies all deltas atomically: either every entry lands or none
    /// do. Fails with [`DivvyError::MemberNotFound`] if any target
    /// balance is untracked, leaving the group untouched.
    async fn apply_deltas(
        &self,
        group_id: Uuid,
        deltas: &HashMap<Uuid, f64>,
    ) -> Result<(), DivvyError>;

    async fn balance(&self, group_id: Uuid, member_id: Uuid) -> Result<f64, DivvyError>;

    /// Snapshot of every tracked balance in the group.
    async fn balances(&self, group_id: Uuid) -> Result<HashMap<Uuid, f64>, DivvyError>;
}
