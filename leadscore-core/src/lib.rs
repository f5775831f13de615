// leadscore-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (record sources, competitor signals)
pub mod ports;

// 2. Domain (features, scoring, priority, routing)
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (config files, JSON adapters, seeded simulation)
pub mod infrastructure;

// 4. Application (engine, pipeline, reports, clean)
pub mod application;

pub mod error;

pub use error::LeadScoreError;
