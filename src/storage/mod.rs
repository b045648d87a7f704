use crate::error::DivvyError;
use crate::models::{Expense, Group};
use async_trait::async_trait;
use uuid::Uuid;

pub mod in_memory;

/// Durable records the ledger core reads and writes: group rosters handed
/// over by the membership collaborator and the append-only expense log.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_group(&self, group: Group) -> Result<(), DivvyError>;
    async fn get_group(&self, group_id: Uuid) -> Result<Option<Group>, DivvyError>;
    async fn list_groups(&self) -> Result<Vec<Group>, DivvyError>;

    async fn save_expense(&self, expense: Expense) -> Result<(), DivvyError>;
    async fn get_group_expenses(&self, group_id: Uuid) -> Result<Vec<Expense>, DivvyError>;
}
