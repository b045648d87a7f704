//! Pre-aggregated, read-only views of the ledger for the reporting
//! collaborator and the external narration assistant.

use crate::constants::BALANCE_EPSILON;
use crate::models::{Expense, Group, Transfer};
use crate::settlement::{self, round_to_cents};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
pub struct MemberBalance {
    pub member_id: Uuid,
    pub name: String,
    pub balance: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct MemberSpend {
    pub member_id: Uuid,
    pub name: String,
    pub paid_total: f64,
    pub expense_count: usize,
}

/// Everything a reporting consumer needs to describe one group: counts,
/// totals, who paid what, the current balances rounded to cents, and the
/// transfers that would settle them.
#[derive(Clone, Debug, Serialize)]
pub struct GroupSummary {
    pub group_id: Uuid,
    pub group_name: String,
    pub member_count: usize,
    pub expense_count: usize,
    pub total_spent: f64,
    pub top_payers: Vec<MemberSpend>,
    pub balances: Vec<MemberBalance>,
    pub suggested_transfers: Vec<Transfer>,
}

fn display_name(group: &Group, member_id: Uuid) -> String {
    group
        .member_name(member_id)
        .map(str::to_string)
        .unwrap_or_else(|| member_id.to_string())
}

impl GroupSummary {
    pub fn build(group: &Group, expenses: &[Expense], balances: &HashMap<Uuid, f64>) -> Self {
        let total_spent: f64 = expenses.iter().map(|e| e.amount).sum();

        let mut paid: HashMap<Uuid, (f64, usize)> = HashMap::new();
        for expense in expenses {
            let entry = paid.entry(expense.paid_by).or_insert((0.0, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }
        let mut top_payers: Vec<MemberSpend> = paid
            .into_iter()
            .map(|(member_id, (paid_total, expense_count))| MemberSpend {
                member_id,
                name: display_name(group, member_id),
                paid_total: round_to_cents(paid_total),
                expense_count,
            })
            .collect();
        top_payers.sort_by(|a, b| {
            b.paid_total
                .total_cmp(&a.paid_total)
                .then_with(|| a.member_id.cmp(&b.member_id))
        });

        let mut rows: Vec<MemberBalance> = balances
            .iter()
            .map(|(&member_id, &balance)| MemberBalance {
                member_id,
                name: display_name(group, member_id),
                balance: round_to_cents(balance),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.balance
                .total_cmp(&a.balance)
                .then_with(|| a.member_id.cmp(&b.member_id))
        });

        GroupSummary {
            group_id: group.id,
            group_name: group.name.clone(),
            member_count: group.members.len(),
            expense_count: expenses.len(),
            total_spent: round_to_cents(total_spent),
            top_payers,
            balances: rows,
            suggested_transfers: settlement::simplify(balances),
        }
    }

    /// Narration context for the external assistant: a structured, purely
    /// descriptive payload. The assistant only ever reads it.
    pub fn context(&self) -> Value {
        let names: HashMap<Uuid, &str> = self
            .balances
            .iter()
            .map(|b| (b.member_id, b.name.as_str()))
            .collect();

        let balances: Vec<Value> = self
            .balances
            .iter()
            .filter(|b| b.balance.abs() > BALANCE_EPSILON)
            .map(|b| {
                json!({
                    "member": b.name,
                    "owes_or_owed": if b.balance > 0.0 { "owed" } else { "owes" },
                    "absolute_amount": b.balance.abs(),
                })
            })
            .collect();

        let transfers: Vec<Value> = self
            .suggested_transfers
            .iter()
            .map(|t| {
                json!({
                    "from": names.get(&t.from).copied().unwrap_or("unknown"),
                    "to": names.get(&t.to).copied().unwrap_or("unknown"),
                    "amount": t.amount,
                })
            })
            .collect();

        json!({
            "group": self.group_name,
            "member_count": self.member_count,
            "statistics": {
                "expense_count": self.expense_count,
                "total_spent": self.total_spent,
                "top_payers": self.top_payers.iter().map(|p| json!({
                    "name": p.name,
                    "paid_total": p.paid_total,
                    "expense_count": p.expense_count,
                })).collect::<Vec<_>>(),
            },
            "balances": balances,
            "suggested_transfers": transfers,
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GroupBalanceEntry {
    pub group_id: Uuid,
    pub group_name: String,
    pub balance: f64,
}

/// A member's position across every group that includes them. Groups
/// where the member is settled are elided; the total spans all of them.
#[derive(Clone, Debug, Serialize)]
pub struct MemberOverview {
    pub member_id: Uuid,
    pub name: String,
    pub total_balance: f64,
    pub group_balances: Vec<GroupBalanceEntry>,
}

impl MemberOverview {
    pub fn build(member_id: Uuid, memberships: &[(Group, f64)]) -> Self {
        let name = memberships
            .iter()
            .find_map(|(group, _)| group.member_name(member_id))
            .map(str::to_string)
            .unwrap_or_else(|| member_id.to_string());
        let total: f64 = memberships.iter().map(|(_, balance)| balance).sum();
        let group_balances = memberships
            .iter()
            .filter(|(_, balance)| balance.abs() > BALANCE_EPSILON)
            .map(|(group, balance)| GroupBalanceEntry {
                group_id: group.id,
                group_name: group.name.clone(),
                balance: round_to_cents(*balance),
            })
            .collect();

        MemberOverview {
            member_id,
            name,
            total_balance: round_to_cents(total),
            group_balances,
        }
    }
}
