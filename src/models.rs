//! Data models for cashbook entities.
//!
//! This module contains strongly-typed representations of the stored
//! entities (users, categories, transactions), newtype ID wrappers,
//! enumeration types for constrained values, and the report value
//! objects produced by [`crate::report`].

mod amount;
mod category;
mod date;
mod enums;
mod ids;
mod report;
mod transaction;
mod user;

pub use amount::{Amount, format_value};
pub use category::Category;
pub use date::TxDate;
pub use enums::{CategoryKind, Month, ParseMonthError};
pub use ids::{CategoryId, TransactionId, UserId};
pub use report::{
    CashFlow, CategoryBreakdown, CategoryCatalog, CategoryTotal, DailyGroup, MonthlyReport, Period,
};
pub use transaction::Transaction;
pub use user::User;
