pub mod admin;
pub mod balances;
pub mod contracts;
pub mod jobs;
