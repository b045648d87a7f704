use crate::config::CONFIG;
use crate::error::DivvyError;
use crate::ledger::{self, BalanceLedger};
use crate::models::{Expense, Group, Member, SplitPolicy, Transfer};
use crate::settlement;
use crate::split;
use crate::storage::Storage;
use crate::summary::{GroupSummary, MemberOverview};
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Orchestrates the expense ledger: share computation, balance updates
/// and on-demand settlement, over injected storage and ledger backends.
pub struct DivvyService<S: Storage, L: BalanceLedger> {
    storage: S,
    ledger: L,
}

impl<S: Storage, L: BalanceLedger> DivvyService<S, L> {
    pub fn new(storage: S, ledger: L) -> Self {
        info!("Initializing DivvyService");
        DivvyService { storage, ledger }
    }

    fn validate_text(value: &str, max_length: usize) -> Option<String> {
        if value.trim().is_empty() {
            return Some("cannot be empty".to_string());
        }
        if value.len() > max_length {
            return Some(format!("cannot exceed {} characters", max_length));
        }
        if value.chars().any(|c| c.is_control()) {
            return Some("contains control characters".to_string());
        }
        None
    }

    async fn require_group(&self, group_id: Uuid) -> Result<Group, DivvyError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or(DivvyError::GroupNotFound(group_id))
    }

    /// Registers a group handed over by the membership collaborator and
    /// opens a zero balance for every member.
    pub async fn register_group(
        &self,
        name: String,
        members: Vec<Member>,
    ) -> Result<Group, DivvyError> {
        info!("Registering group '{}' with {} members", name, members.len());
        if let Some(reason) = Self::validate_text(&name, 100) {
            return Err(DivvyError::InvalidGroup(format!("name {}", reason)));
        }
        if members.is_empty() {
            return Err(DivvyError::InvalidGroup(
                "a group needs at least one member".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member.id) {
                return Err(DivvyError::InvalidGroup(format!(
                    "duplicate member {}",
                    member.id
                )));
            }
        }

        let group = Group {
            id: Uuid::new_v4(),
            name,
            members,
            created_at: Utc::now(),
        };

        for member in &group.members {
            self.ledger.initialize(group.id, member.id).await?;
        }
        self.storage.save_group(group.clone()).await?;

        debug!("Group registered with ID: {}", group.id);
        Ok(group)
    }

    /// Hook for the membership collaborator: adds the member to the group
    /// roster and opens their zero balance. Harmless for existing members.
    pub async fn add_member(&self, group_id: Uuid, member: Member) -> Result<(), DivvyError> {
        let mut group = self.require_group(group_id).await?;
        if !group.is_member(member.id) {
            group.members.push(member.clone());
            self.storage.save_group(group).await?;
        }
        self.ledger.initialize(group_id, member.id).await?;
        Ok(())
    }

    /// Records an expense and applies its balance deltas atomically.
    ///
    /// Validation failures surface unmodified and leave every balance in
    /// the group exactly as it was.
    pub async fn record_expense(
        &self,
        group_id: Uuid,
        description: String,
        amount: f64,
        paid_by: Uuid,
        policy: SplitPolicy,
    ) -> Result<Expense, DivvyError> {
        info!(
            "Recording expense of {} in group {} paid by {}",
            amount, group_id, paid_by
        );
        let group = self.require_group(group_id).await?;

        if let Some(reason) = Self::validate_text(&description, 255) {
            return Err(DivvyError::InvalidDescription(format!(
                "description {}",
                reason
            )));
        }
        if amount > CONFIG.max_expense_amount {
            warn!("Expense of {} exceeds configured maximum", amount);
            return Err(DivvyError::AmountTooLarge(amount));
        }
        if !group.is_member(paid_by) {
            warn!("Payer {} is not in group {}", paid_by, group_id);
            return Err(DivvyError::PayerNotInGroup(paid_by, group_id));
        }

        let participants = group.member_ids();
        let shares = split::compute_shares(amount, &policy, &participants)?;
        let deltas = ledger::balance_deltas(amount, paid_by, &shares);
        self.ledger.apply_deltas(group_id, &deltas).await?;

        let expense = Expense {
            id: Uuid::new_v4(),
            group_id,
            description,
            amount,
            paid_by,
            policy,
            created_at: Utc::now(),
        };
        self.storage.save_expense(expense.clone()).await?;

        debug!("Expense recorded with ID: {}", expense.id);
        Ok(expense)
    }

    /// Computes the transfers that would settle the group right now.
    /// Always recomputed from the live balance snapshot; nothing is
    /// cached because balances can change between calls.
    pub async fn settle_group(&self, group_id: Uuid) -> Result<Vec<Transfer>, DivvyError> {
        self.require_group(group_id).await?;
        let balances = self.ledger.balances(group_id).await?;
        let transfers = settlement::simplify(&balances);
        debug!(
            "Settlement for group {}: {} transfers",
            group_id,
            transfers.len()
        );
        Ok(transfers)
    }

    /// Current balance snapshot for the group.
    pub async fn group_balances(&self, group_id: Uuid) -> Result<HashMap<Uuid, f64>, DivvyError> {
        self.require_group(group_id).await?;
        self.ledger.balances(group_id).await
    }

    pub async fn member_balance(
        &self,
        group_id: Uuid,
        member_id: Uuid,
    ) -> Result<f64, DivvyError> {
        self.ledger.balance(group_id, member_id).await
    }

    pub async fn get_group(&self, group_id: Uuid) -> Result<Option<Group>, DivvyError> {
        self.storage.get_group(group_id).await
    }

    pub async fn group_expenses(&self, group_id: Uuid) -> Result<Vec<Expense>, DivvyError> {
        self.require_group(group_id).await?;
        self.storage.get_group_expenses(group_id).await
    }

    /// Read-only aggregate handed to the reporting and narration
    /// collaborators.
    pub async fn group_summary(&self, group_id: Uuid) -> Result<GroupSummary, DivvyError> {
        let group = self.require_group(group_id).await?;
        let expenses = self.storage.get_group_expenses(group_id).await?;
        let balances = self.ledger.balances(group_id).await?;
        Ok(GroupSummary::build(&group, &expenses, &balances))
    }

    /// A member's net position in every group that includes them.
    pub async fn member_overview(&self, member_id: Uuid) -> Result<MemberOverview, DivvyError> {
        let groups = self.storage.list_groups().await?;
        let mut memberships = Vec::new();
        for group in groups.into_iter().filter(|g| g.is_member(member_id)) {
            let balance = self.ledger.balance(group.id, member_id).await?;
            memberships.push((group, balance));
        }
        if memberships.is_empty() {
            return Err(DivvyError::UnknownMember(member_id));
        }
        Ok(MemberOverview::build(member_id, &memberships))
    }
}
