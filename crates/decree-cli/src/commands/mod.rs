pub mod calculate;
pub mod reports;
