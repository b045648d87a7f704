mod ledger_tests;
mod settlement_tests;

use crate::models::Member;
use crate::service::DivvyService;
use crate::{InMemoryLedger, InMemoryStorage};
use uuid::Uuid;

pub fn create_test_service() -> DivvyService<InMemoryStorage, InMemoryLedger> {
    let _ = env_logger::try_init();
    DivvyService::new(InMemoryStorage::new(), InMemoryLedger::new())
}

pub fn member(n: u128, name: &str) -> Member {
    Member {
        id: Uuid::from_u128(n),
        name: name.to_string(),
    }
}

pub fn trio() -> (Member, Member, Member) {
    (member(1, "Alice"), member(2, "Bob"), member(3, "Carol"))
}
