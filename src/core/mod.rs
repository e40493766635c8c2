pub mod calculator;
pub mod fixtures;
pub mod logic;
