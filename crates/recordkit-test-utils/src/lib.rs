//! Test helpers shared across recordkit crates.

pub mod fixtures;
pub mod user;

pub use fixtures::{as_map, sample_map, sample_record};
pub use user::User;
