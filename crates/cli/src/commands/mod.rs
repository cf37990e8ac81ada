//! Command implementations.

pub mod browse;
pub mod cart;
pub mod lists;
