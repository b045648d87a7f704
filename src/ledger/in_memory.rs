use crate::error::DivvyError;
use crate::ledger::BalanceLedger;
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

type GroupBalances = Arc<Mutex<HashMap<Uuid, f64>>>;

/// Balance ledger held entirely in memory, one lock per group.
///
/// The outer map is touched only to look up or create a group's slot;
/// every balance read and write goes through that group's own mutex, so
/// writers for different groups never contend and a group snapshot can
/// never expose a half-applied expense.
pub struct InMemoryLedger {
    groups: RwLock<HashMap<Uuid, GroupBalances>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        InMemoryLedger {
            groups: RwLock::new(HashMap::new()),
        }
    }

    async fn group(&self, group_id: Uuid) -> Result<GroupBalances, DivvyError> {
        self.groups
            .read()
            .await
            .get(&group_id)
            .cloned()
            .ok_or(DivvyError::GroupNotFound(group_id))
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceLedger for InMemoryLedger {
    async fn initialize(&self, group_id: Uuid, member_id: Uuid) -> Result<(), DivvyError> {
        let slot = {
            let mut groups = self.groups.write().await;
            groups
                .entry(group_id)
                .or_insert_with(|| Arc::new(Mutex::new(HashMap::new())))
                .clone()
        };
        let mut balances = slot.lock().await;
        balances.entry(member_id).or_insert(0.0);
        Ok(())
    }

    async fn apply_deltas(
        &self,
        group_id: Uuid,
        deltas: &HashMap<Uuid, f64>,
    ) -> Result<(), DivvyError> {
        let slot = self.group(group_id).await?;
        let mut balances = slot.lock().await;

        // Validate every target before mutating anything.
        for &member in deltas.keys() {
            if !balances.contains_key(&member) {
                return Err(DivvyError::MemberNotFound(member, group_id));
            }
        }
        for (&member, &delta) in deltas {
            if let Some(balance) = balances.get_mut(&member) {
                *balance += delta;
            }
        }
        debug!(
            "Applied {} balance deltas to group {}",
            deltas.len(),
            group_id
        );
        Ok(())
    }

    async fn balance(&self, group_id: Uuid, member_id: Uuid) -> Result<f64, DivvyError> {
        let slot = self.group(group_id).await?;
        let balances = slot.lock().await;
        balances
            .get(&member_id)
            .copied()
            .ok_or(DivvyError::MemberNotFound(member_id, group_id))
    }

    async fn balances(&self, group_id: Uuid) -> Result<HashMap<Uuid, f64>, DivvyError> {
        let slot = self.group(group_id).await?;
        let balances = slot.lock().await;
        Ok(balances.clone())
    }
}
