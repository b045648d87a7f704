/// Tolerance for percentage totals and share sums.
pub const SPLIT_TOLERANCE: f64 = 0.01;

/// Balances within this distance of zero count as settled.
pub const BALANCE_EPSILON: f64 = 0.01;
