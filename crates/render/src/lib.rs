//! `stagebill-render` — textual statement output.
//!
//! Consumes a prepared [`stagebill_billing::Statement`]; never computes or
//! mutates billing data itself.

pub mod plain_text;

pub use plain_text::render_plain_text;
