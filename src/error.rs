use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Serialize)]
pub enum DivvyError {
    /// Expense amount is zero, negative, or not a finite number
    #[error("Expense amount must be greater than 0, got {0}")]
    InvalidExpenseAmount(f64),

    /// Expense amount exceeds the configured ceiling
    #[error("Expense amount {0} exceeds the configured maximum")]
    AmountTooLarge(f64),

    /// Expense has nobody to split between
    #[error("Cannot split an expense across an empty participant set")]
    EmptyParticipants,

    /// Description is empty, too long, or contains control characters
    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    /// Percentage split does not assign a share to a group participant
    #[error("Percentage split is missing participant {0}")]
    MissingSplitMember(Uuid),

    /// Percentage split names someone outside the participant set
    #[error("Percentage split references {0}, who is not a participant")]
    UnknownSplitMember(Uuid),

    /// Percentages do not add up to 100 within tolerance
    #[error("Split percentages sum to {0}, expected 100")]
    PercentageSumMismatch(f64),

    /// Payer is not a participant of the target group
    #[error("Payer {0} is not a member of group {1}")]
    PayerNotInGroup(Uuid, Uuid),

    /// Balance queried or updated for an untracked member/group pair
    #[error("No balance for member {0} in group {1}")]
    MemberNotFound(Uuid, Uuid),

    /// Member does not appear in any known group
    #[error("Member {0} is not in any group")]
    UnknownMember(Uuid),

    #[error("Group {0} not found")]
    GroupNotFound(Uuid),

    #[error("Invalid group: {0}")]
    InvalidGroup(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
