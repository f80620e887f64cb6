//! `stagebill-repertory` — play reference data.
//!
//! Plays are immutable reference data supplied by the surrounding layer
//! (structured config, a database, in-memory construction). This crate owns
//! their shape and lookup semantics only; pricing lives in `stagebill-billing`.

pub mod catalog;
pub mod play;

pub use catalog::PlayCatalog;
pub use play::{Play, PlayId};
