//! Labor Cost Quotation Engine
//!
//! This crate computes billable labor costs for staffing groups, applying
//! overhead and margin markups plus the statutory 1.5x premium for holiday
//! and overtime work, and exposes the interactive quotation operations
//! (add group, update rates, reset, report, export) over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod session;
