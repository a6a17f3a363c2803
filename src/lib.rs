//! Audit Calculation Engine
//!
//! This crate provides five audit calculators (tax audit over progressive
//! slabs, salary reconciliation, professional tax reconciliation, opening
//! balance materiality and bank vouching), the rule profiles that
//! parameterise them, and an HTTP API that returns each result with an
//! audit trace.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
