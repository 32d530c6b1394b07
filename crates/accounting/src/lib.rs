//! Operational expense bookkeeping.

pub mod expense;

pub use expense::CostRecord;
