// src/lib.rs
//! Small building blocks shared across services: an [`Outcome`] rail for
//! recoverable errors, date-range math, enum metadata, pagination, API
//! response envelopes, and string helpers.
//!
//! Each module stands on its own:
//!
//! - [`outcome`] carries a success value or a non-empty error list through
//!   a computation without early returns.
//! - [`dates`] builds, measures and splits UTC date ranges.
//! - [`enums`] looks enum variants up by name, display name or ordinal.
//! - [`pagination`] slices collections into pages with derived totals.
//! - [`response`] shapes response envelopes for the wire.
//! - [`strings`] converts casings, validates shapes and cleans up text.
//!
//! ```
//! use kitbag::{Error, Outcome};
//!
//! fn half(n: i32) -> Outcome<i32> {
//!     Outcome::success(n)
//!         .ensure(|n| n % 2 == 0, Error::validation("odd", "expected an even number"))
//!         .map(|n| n / 2)
//! }
//!
//! assert_eq!(half(8).into_value(), 4);
//! assert!(half(7).is_failure());
//! ```

pub mod dates;
pub mod enums;
pub mod outcome;
pub mod pagination;
pub mod response;
pub mod strings;

pub use dates::{DateRange, DateRangeError};
pub use enums::EnumMeta;
pub use outcome::{Error, ErrorCategory, ErrorList, Outcome};
pub use pagination::{Page, PaginateError};
pub use response::ApiResponse;
