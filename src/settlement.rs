//! Debt simplification: collapses a group's net balances into a short
//! list of direct repayments.

use crate::constants::BALANCE_EPSILON;
use crate::models::Transfer;
use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use uuid::Uuid;

/// Rounds a monetary value half-up to whole cents.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Clone, Debug)]
struct Party {
    member: Uuid,
    remaining: f64,
}

fn compare_parties(a: &Party, b: &Party) -> Ordering {
    b.remaining
        .total_cmp(&a.remaining)
        .then_with(|| a.member.cmp(&b.member))
}

/// Greedy largest-magnitude matcher over two sorted queues.
///
/// Creditors and debtors are matched front to front; each step settles
/// `min(creditor.remaining, debtor.remaining)` and retires whichever side
/// drops below [`BALANCE_EPSILON`]. Output is deterministic (ties break by
/// member id) and linear after the initial sort. The result approximates
/// the minimum number of transfers but does not guarantee it; an exact
/// minimum is a much harder, subset-sum flavored problem and callers that
/// need it need a different algorithm.
pub struct Simplifier {
    creditors: VecDeque<Party>,
    debtors: VecDeque<Party>,
}

impl Simplifier {
    /// Partitions and sorts a balance snapshot. Members within
    /// [`BALANCE_EPSILON`] of zero are already settled and take no part.
    pub fn new(balances: &HashMap<Uuid, f64>) -> Self {
        let mut creditors: Vec<Party> = balances
            .iter()
            .filter(|(_, balance)| **balance > BALANCE_EPSILON)
            .map(|(&member, &balance)| Party {
                member,
                remaining: balance,
            })
            .collect();
        let mut debtors: Vec<Party> = balances
            .iter()
            .filter(|(_, balance)| **balance < -BALANCE_EPSILON)
            .map(|(&member, &balance)| Party {
                member,
                remaining: -balance,
            })
            .collect();

        creditors.sort_by(compare_parties);
        debtors.sort_by(compare_parties);

        Simplifier {
            creditors: creditors.into(),
            debtors: debtors.into(),
        }
    }

    /// Advances the machine by one match and returns the transfer it
    /// settled, or `None` once either queue is exhausted.
    ///
    /// Rounding to cents happens only here, at emission; the remaining
    /// amounts inside the queues stay unrounded so error cannot compound
    /// across steps.
    pub fn step(&mut self) -> Option<Transfer> {
        loop {
            let (to, credit) = {
                let creditor = self.creditors.front()?;
                (creditor.member, creditor.remaining)
            };
            let (from, debt) = {
                let debtor = self.debtors.front()?;
                (debtor.member, debtor.remaining)
            };

            let amount = credit.min(debt);

            if let Some(creditor) = self.creditors.front_mut() {
                creditor.remaining -= amount;
                if creditor.remaining < BALANCE_EPSILON {
                    self.creditors.pop_front();
                }
            }
            if let Some(debtor) = self.debtors.front_mut() {
                debtor.remaining -= amount;
                if debtor.remaining < BALANCE_EPSILON {
                    self.debtors.pop_front();
                }
            }

            if amount > BALANCE_EPSILON {
                return Some(Transfer {
                    from,
                    to,
                    amount: round_to_cents(amount),
                });
            }
        }
    }

    /// Drains the machine to completion.
    pub fn run(mut self) -> Vec<Transfer> {
        std::iter::from_fn(move || self.step()).collect()
    }
}

/// Computes the transfers that settle every balance in the snapshot.
pub fn simplify(balances: &HashMap<Uuid, f64>) -> Vec<Transfer> {
    Simplifier::new(balances).run()
}
