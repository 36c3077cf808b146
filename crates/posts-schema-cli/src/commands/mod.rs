pub mod describe;
pub mod provision;
