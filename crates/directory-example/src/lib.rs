//! Worked example for `roster-facet`: an intern community directory.
//!
//! The record types, their facet configurations, and the embedded mock
//! datasets live here so both the `roster` binary and the integration
//! tests can drive the same pipeline.

pub mod records;
