//! Pure domain contracts for the stock & sales dashboard: entities, the
//! filter engine, aggregate statistics, formatting helpers and the tabular
//! report shape consumed by the export capability.
//!
//! Everything in this crate is synchronous, side-effect free and total over
//! its documented inputs; the frontend owns the collections and passes them
//! in on every invocation.

pub mod domain;
pub mod enums;
pub mod shared;
