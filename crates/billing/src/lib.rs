//! `stagebill-billing` — invoice pricing and statement aggregation.
//!
//! This crate contains the billing rules for theatrical invoices,
//! implemented purely as deterministic domain logic (no IO, no clocks, no
//! globals). Rendering lives in `stagebill-render`.

pub mod invoice;
pub mod pricing;
pub mod statement;

pub use invoice::{Invoice, Performance};
pub use pricing::{BASE_VOLUME_CREDIT_THRESHOLD, PricingResult, PricingVariant};
pub use statement::{PerformanceValuation, Statement};
