//! Personal cashbook library: transaction tracking and reporting.
//!
//! This crate provides typed models, pluggable storage, and a pure
//! aggregation engine for turning flat transaction lists into daily
//! groups and monthly income/expense reports.

pub mod error;
#[cfg(any(feature = "async", feature = "blocking"))]
pub mod ledger;
pub mod models;
pub mod report;
#[cfg(any(feature = "async", feature = "blocking"))]
pub mod storage;
