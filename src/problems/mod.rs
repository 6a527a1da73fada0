pub mod catalog;
pub mod runner;
