pub mod calculator;
pub mod filter;
pub mod loader;
pub mod logic;
