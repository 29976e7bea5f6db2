//! CLI command implementations.

pub mod catalog;
pub mod price;
pub mod run;
