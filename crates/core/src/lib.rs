//! `stagebill-core` — billing foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the billing error model and minor-unit currency formatting.

pub mod error;
pub mod money;

pub use error::{BillingError, BillingResult};
