use crate::constants::SPLIT_TOLERANCE;
use crate::error::DivvyError;
use crate::models::SplitPolicy;
use std::collections::HashMap;
use uuid::Uuid;

/// Computes each participant's share of an expense.
///
/// Pure function: validates its inputs and never touches ledger state.
/// For an `Equal` policy every participant gets the exact quotient; the
/// leftover cent is not redistributed, only the sum of shares is
/// guaranteed to match the amount within floating tolerance.
pub fn compute_shares(
    amount: f64,
    policy: &SplitPolicy,
    participants: &[Uuid],
) -> Result<HashMap<Uuid, f64>, DivvyError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DivvyError::InvalidExpenseAmount(amount));
    }
    if participants.is_empty() {
        return Err(DivvyError::EmptyParticipants);
    }

    match policy {
        SplitPolicy::Equal => {
            let share = amount / participants.len() as f64;
            Ok(participants.iter().map(|&id| (id, share)).collect())
        }
        SplitPolicy::Percentage { percentages } => {
            for &id in participants {
                if !percentages.contains_key(&id) {
                    return Err(DivvyError::MissingSplitMember(id));
                }
            }
            for &id in percentages.keys() {
                if !participants.contains(&id) {
                    return Err(DivvyError::UnknownSplitMember(id));
                }
            }
            let total: f64 = percentages.values().sum();
            if (total - 100.0).abs() > SPLIT_TOLERANCE {
                return Err(DivvyError::PercentageSumMismatch(total));
            }
            Ok(percentages
                .iter()
                .map(|(&id, &pct)| (id, amount * pct / 100.0))
                .collect())
        }
    }
}
