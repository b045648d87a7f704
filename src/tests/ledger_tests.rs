use crate::InMemoryLedger;
use crate::error::DivvyError;
use crate::ledger::{BalanceLedger, balance_deltas};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[test]
fn balance_deltas_debit_shares_and_credit_payer() {
    let payer = id(1);
    let shares = HashMap::from([(id(1), 30.0), (id(2), 30.0), (id(3), 30.0)]);
    let deltas = balance_deltas(90.0, payer, &shares);
    assert_eq!(deltas[&id(1)], 60.0);
    assert_eq!(deltas[&id(2)], -30.0);
    assert_eq!(deltas[&id(3)], -30.0);
    let net: f64 = deltas.values().sum();
    assert!(net.abs() < 1e-9);
}

#[tokio::test]
async fn initialize_is_idempotent() {
    let ledger = InMemoryLedger::new();
    let (group, member) = (id(10), id(1));
    ledger.initialize(group, member).await.unwrap();

    let deltas = HashMap::from([(member, 5.0)]);
    ledger.apply_deltas(group, &deltas).await.unwrap();

    // Re-initializing must not reset an existing balance.
    ledger.initialize(group, member).await.unwrap();
    assert_eq!(ledger.balance(group, member).await.unwrap(), 5.0);
}

#[tokio::test]
async fn balance_query_for_untracked_member_fails() {
    let ledger = InMemoryLedger::new();
    let group = id(10);
    ledger.initialize(group, id(1)).await.unwrap();

    let result = ledger.balance(group, id(2)).await;
    assert!(matches!(result, Err(DivvyError::MemberNotFound(m, g)) if m == id(2) && g == group));
}

#[tokio::test]
async fn balance_query_for_unknown_group_fails() {
    let ledger = InMemoryLedger::new();
    let result = ledger.balances(id(10)).await;
    assert!(matches!(result, Err(DivvyError::GroupNotFound(_))));
}

#[tokio::test]
async fn apply_deltas_is_all_or_nothing() {
    let ledger = InMemoryLedger::new();
    let group = id(10);
    for n in 1..=2 {
        ledger.initialize(group, id(n)).await.unwrap();
    }

    let deltas = HashMap::from([(id(1), 30.0), (id(2), -10.0), (id(99), -20.0)]);
    let result = ledger.apply_deltas(group, &deltas).await;
    assert!(matches!(result, Err(DivvyError::MemberNotFound(m, _)) if m == id(99)));

    let balances = ledger.balances(group).await.unwrap();
    assert_eq!(balances[&id(1)], 0.0);
    assert_eq!(balances[&id(2)], 0.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_applies_preserve_conservation() {
    let ledger = Arc::new(InMemoryLedger::new());
    let group = id(10);
    for n in 1..=3 {
        ledger.initialize(group, id(n)).await.unwrap();
    }

    let mut handles = Vec::new();
    for round in 0..32u32 {
        let ledger = Arc::clone(&ledger);
        let payer = id(u128::from(round % 3) + 1);
        handles.push(tokio::spawn(async move {
            let shares = HashMap::from([(id(1), 10.0), (id(2), 10.0), (id(3), 10.0)]);
            let deltas = balance_deltas(30.0, payer, &shares);
            ledger.apply_deltas(group, &deltas).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let balances = ledger.balances(group).await.unwrap();
    let net: f64 = balances.values().sum();
    assert!(net.abs() <= 0.01, "conservation violated: {}", net);
}
