//! Raw-row ingestion from the external tabular store
//!
//! The store labels the same logical attribute several ways. Aliases are
//! resolved here, once, at the boundary; every component downstream
//! assumes the canonical shapes from `sitegauge-domain`.

pub mod field_map;
