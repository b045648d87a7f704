pub mod expense;
pub mod group;
pub mod member;
pub mod transfer;

pub use expense::{Expense, SplitPolicy};
pub use group::Group;
pub use member::Member;
pub use transfer::Transfer;
