//! Activity-measurement reconciliation engine
//!
//! Joins the BOQ activity catalogue with the KPI measurement log at query
//! time. The two datasets are maintained independently and share no foreign
//! key, so association is fuzzy textual and positional matching, reduced
//! into progress, monetary, and schedule metrics. Every component is a
//! synchronous pure function over the snapshot supplied by the caller:
//! inputs are never mutated and identical inputs yield identical outputs.

pub mod aggregator;
pub mod classifier;
pub mod matcher;
pub mod ports;
pub mod service;
pub mod timeline;
pub mod valuation;
