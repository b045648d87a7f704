use crate::models::Transfer;
use crate::settlement::{Simplifier, simplify};
use std::collections::HashMap;
use uuid::Uuid;

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn balances(entries: &[(u128, f64)]) -> HashMap<Uuid, f64> {
    entries.iter().map(|&(n, b)| (id(n), b)).collect()
}

/// Replays transfers onto the snapshot: the payment shrinks the debtor's
/// debt and the creditor's outstanding credit.
fn apply_transfers(balances: &mut HashMap<Uuid, f64>, transfers: &[Transfer]) {
    for t in transfers {
        *balances.get_mut(&t.from).unwrap() += t.amount;
        *balances.get_mut(&t.to).unwrap() -= t.amount;
    }
}

#[test]
fn two_debtors_pay_single_creditor() {
    let snapshot = balances(&[(1, 50.0), (2, -20.0), (3, -30.0)]);
    let transfers = simplify(&snapshot);
    assert_eq!(
        transfers,
        vec![
            Transfer {
                from: id(3),
                to: id(1),
                amount: 30.0
            },
            Transfer {
                from: id(2),
                to: id(1),
                amount: 20.0
            },
        ]
    );
}

#[test]
fn transfers_zero_out_every_balance() {
    let mut snapshot = balances(&[(1, 70.0), (2, 10.0), (3, -25.0), (4, -55.0)]);
    let transfers = simplify(&snapshot);
    apply_transfers(&mut snapshot, &transfers);
    for balance in snapshot.values() {
        assert!(balance.abs() <= 0.01, "left unsettled: {}", balance);
    }
}

#[test]
fn transfer_total_matches_outstanding_credit() {
    let snapshot = balances(&[(1, 33.34), (2, 33.33), (3, -66.67)]);
    let transfers = simplify(&snapshot);
    let transferred: f64 = transfers.iter().map(|t| t.amount).sum();
    assert!((transferred - 66.67).abs() <= 0.01);
}

#[test]
fn simplify_is_deterministic() {
    let snapshot = balances(&[(5, 40.0), (2, -40.0), (9, 25.0), (7, -25.0)]);
    assert_eq!(simplify(&snapshot), simplify(&snapshot));
}

#[test]
fn equal_magnitudes_order_by_member_id() {
    let snapshot = balances(&[(4, 30.0), (2, 30.0), (9, -60.0)]);
    let transfers = simplify(&snapshot);
    assert_eq!(
        transfers,
        vec![
            Transfer {
                from: id(9),
                to: id(2),
                amount: 30.0
            },
            Transfer {
                from: id(9),
                to: id(4),
                amount: 30.0
            },
        ]
    );
}

#[test]
fn settled_group_yields_no_transfers() {
    let snapshot = balances(&[(1, 0.0), (2, 0.005), (3, -0.005)]);
    assert!(simplify(&snapshot).is_empty());
}

#[test]
fn step_settles_largest_pair_first() {
    let snapshot = balances(&[(1, 10.0), (2, 80.0), (3, -65.0), (4, -25.0)]);
    let mut machine = Simplifier::new(&snapshot);

    let first = machine.step().unwrap();
    assert_eq!(
        first,
        Transfer {
            from: id(3),
            to: id(2),
            amount: 65.0
        }
    );

    let second = machine.step().unwrap();
    assert_eq!(
        second,
        Transfer {
            from: id(4),
            to: id(2),
            amount: 15.0
        }
    );

    let third = machine.step().unwrap();
    assert_eq!(
        third,
        Transfer {
            from: id(4),
            to: id(1),
            amount: 10.0
        }
    );

    assert!(machine.step().is_none());
}
