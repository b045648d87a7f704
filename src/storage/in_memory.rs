use crate::error::DivvyError;
use crate::models::{Expense, Group};
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct InMemoryStorage {
    groups: Mutex<HashMap<Uuid, Group>>,
    expenses: Mutex<HashMap<Uuid, Expense>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            groups: Mutex::new(HashMap::new()),
            expenses: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_group(&self, group: Group) -> Result<(), DivvyError> {
        self.groups.lock().await.insert(group.id, group);
        Ok(())
    }

    async fn get_group(&self, group_id: Uuid) -> Result<Option<Group>, DivvyError> {
        Ok(self.groups.lock().await.get(&group_id).cloned())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, DivvyError> {
        let mut groups: Vec<Group> = self.groups.lock().await.values().cloned().collect();
        groups.sort_by_key(|g| g.created_at);
        Ok(groups)
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), DivvyError> {
        self.expenses.lock().await.insert(expense.id, expense);
        Ok(())
    }

    async fn get_group_expenses(&self, group_id: Uuid) -> Result<Vec<Expense>, DivvyError> {
        // For production: use a database query with an index
        let mut expenses: Vec<Expense> = self
            .expenses
            .lock()
            .await
            .values()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect();
        expenses.sort_by_key(|e| e.created_at);
        Ok(expenses)
    }
}
