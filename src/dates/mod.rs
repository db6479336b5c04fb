// src/dates/mod.rs
//! Calendar instant helpers and validated UTC date ranges.
//!
//! [`calendar`] answers point-in-time questions (period boundaries,
//! business days, ages); [`range`] builds on it with the [`DateRange`]
//! interval type. All arithmetic is UTC-only and weeks open on Sunday.
//! Period ends sit one nanosecond before the next period begins, so
//! consecutive periods never share an instant.

pub mod calendar;
pub mod range;


pub use range::{DateRange, DateRangeError, daily_ranges, monthly_ranges, weekly_ranges};
