// src/dates/range.rs
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::calendar;

/// Rejected [`DateRange`] construction or manipulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("range start {start} is after its end {end}")]
    InvertedBounds {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("cannot merge an empty collection of ranges")]
    EmptyMerge,
    #[error("cannot split a range into zero parts")]
    ZeroParts,
    #[error("range duration is not evenly divisible into {parts} parts")]
    UnevenSplit { parts: u32 },
    #[error("range duration is too large to split")]
    DurationOverflow,
    #[error("{year}-{month} is not a representable calendar month")]
    InvalidCalendarMonth { year: i32, month: u32 },
    #[error("{year} is not a representable calendar year")]
    InvalidCalendarYear { year: i32 },
}

/// A closed interval of UTC instants, ordered so that `start <= end`.
///
/// The bounds are validated at construction and when deserializing, so a
/// held `DateRange` is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DateRangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvertedBounds { start, end });
        }
        Ok(Self { start, end })
    }

    /// Full day containing the instant, midnight to a nanosecond before the
    /// next midnight.
    pub fn day_of(instant: DateTime<Utc>) -> Self {
        Self {
            start: calendar::start_of_day(instant),
            end: calendar::end_of_day(instant),
        }
    }

    /// Full Sunday-opened week containing the instant.
    pub fn week_of(instant: DateTime<Utc>) -> Self {
        Self {
            start: calendar::start_of_week(instant),
            end: calendar::end_of_week(instant),
        }
    }

    /// Full calendar month containing the instant.
    pub fn month_of(instant: DateTime<Utc>) -> Self {
        Self {
            start: calendar::start_of_month(instant),
            end: calendar::end_of_month(instant),
        }
    }

    /// Full calendar year containing the instant.
    pub fn year_of(instant: DateTime<Utc>) -> Self {
        Self {
            start: calendar::start_of_year(instant),
            end: calendar::end_of_year(instant),
        }
    }

    pub fn current_day() -> Self {
        Self::day_of(Utc::now())
    }

    pub fn next_day() -> Self {
        Self::day_of(Utc::now() + Duration::days(1))
    }

    pub fn previous_day() -> Self {
        Self::day_of(Utc::now() - Duration::days(1))
    }

    pub fn current_week() -> Self {
        Self::week_of(Utc::now())
    }

    pub fn current_month() -> Self {
        Self::month_of(Utc::now())
    }

    pub fn next_month() -> Self {
        Self::month_of(Utc::now() + Months::new(1))
    }

    pub fn previous_month() -> Self {
        Self::month_of(Utc::now() - Months::new(1))
    }

    pub fn current_year() -> Self {
        Self::year_of(Utc::now())
    }

    pub fn next_year() -> Self {
        Self::year_of(Utc::now() + Months::new(12))
    }

    pub fn previous_year() -> Self {
        Self::year_of(Utc::now() - Months::new(12))
    }

    /// Named calendar month, e.g. `month_of_year(2024, 2)` for February 2024.
    pub fn month_of_year(year: i32, month: u32) -> Result<Self, DateRangeError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(DateRangeError::InvalidCalendarMonth { year, month })?;
        let start = first.and_time(NaiveTime::MIN).and_utc();
        Ok(Self {
            start,
            end: start + Months::new(1) - Duration::nanoseconds(1),
        })
    }

    /// Named calendar year, January 1 through the last instant of December 31.
    pub fn calendar_year(year: i32) -> Result<Self, DateRangeError> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or(DateRangeError::InvalidCalendarYear { year })?;
        let start = first.and_time(NaiveTime::MIN).and_utc();
        Ok(Self {
            start,
            end: start + Months::new(12) - Duration::nanoseconds(1),
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whole days covered by the range, truncated.
    pub fn days(&self) -> i64 {
        self.duration().num_days()
    }

    /// Whole weeks covered by the range, truncated.
    pub fn weeks(&self) -> i64 {
        self.days() / 7
    }

    /// Calendar months between the bounds, ignoring days and times.
    pub fn months(&self) -> i32 {
        (self.end.year() - self.start.year()) * 12 + self.end.month() as i32
            - self.start.month() as i32
    }

    /// Calendar years between the bounds, ignoring months, days and times.
    pub fn years(&self) -> i32 {
        self.end.year() - self.start.year()
    }

    /// Fractional days covered by the range, at millisecond resolution.
    pub fn exact_days(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 86_400_000.0
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Whether the two ranges share any instants beyond a touching boundary.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The instants common to both ranges, or `None` when they do not
    /// overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Smallest single range covering every input range.
    pub fn merge(ranges: impl IntoIterator<Item = Self>) -> Result<Self, DateRangeError> {
        let mut iter = ranges.into_iter();
        let first = iter.next().ok_or(DateRangeError::EmptyMerge)?;
        Ok(iter.fold(first, |merged, range| Self {
            start: merged.start.min(range.start),
            end: merged.end.max(range.end),
        }))
    }

    /// Splits the range into `parts` consecutive pieces of equal duration.
    /// Adjacent pieces share their boundary instant.
    pub fn split(&self, parts: u32) -> Result<Vec<Self>, DateRangeError> {
        if parts == 0 {
            return Err(DateRangeError::ZeroParts);
        }
        let nanos = self
            .duration()
            .num_nanoseconds()
            .ok_or(DateRangeError::DurationOverflow)?;
        if nanos % i64::from(parts) != 0 {
            return Err(DateRangeError::UnevenSplit { parts });
        }
        let step = Duration::nanoseconds(nanos / i64::from(parts));
        let mut pieces = Vec::with_capacity(parts as usize);
        let mut cursor = self.start;
        for _ in 0..parts {
            let next = cursor + step;
            pieces.push(Self {
                start: cursor,
                end: next,
            });
            cursor = next;
        }
        Ok(pieces)
    }

    /// Moves the end later by `duration` (or earlier when negative).
    pub fn extend_end(&self, duration: Duration) -> Result<Self, DateRangeError> {
        Self::new(self.start, self.end + duration)
    }

    /// Moves the start earlier by `duration` (or later when negative).
    pub fn extend_start(&self, duration: Duration) -> Result<Self, DateRangeError> {
        Self::new(self.start - duration, self.end)
    }

    /// Midnight of every calendar day the range touches, inclusive of the
    /// end's day.
    pub fn iter_days(&self) -> impl Iterator<Item = DateTime<Utc>> {
        let last = self.end.date_naive();
        self.start
            .date_naive()
            .iter_days()
            .take_while(move |date| *date <= last)
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }

    /// The range cut along calendar month boundaries, clamped to the
    /// original bounds. Month boundaries are drawn at millisecond
    /// resolution, and an end at exactly midnight is widened to cover that
    /// whole day.
    pub fn months_within(&self) -> Vec<Self> {
        let effective_end = if self.end.time() == NaiveTime::MIN {
            self.end + Duration::days(1) - Duration::milliseconds(1)
        } else {
            self.end
        };

        let mut months = Vec::new();
        let mut cursor = calendar::start_of_month(self.start);
        while cursor <= effective_end {
            let next_month = cursor + Months::new(1);
            let month_end = next_month - Duration::milliseconds(1);
            months.push(Self {
                start: self.start.max(cursor),
                end: effective_end.min(month_end),
            });
            cursor = next_month;
        }
        months
    }
}

/// Full-day ranges for `count` consecutive days starting at `from`'s day.
pub fn daily_ranges(from: DateTime<Utc>, count: u32) -> Vec<DateRange> {
    (0..i64::from(count))
        .map(|offset| DateRange::day_of(from + Duration::days(offset)))
        .collect()
}

/// Full-week ranges for `count` consecutive weeks starting at `from`'s week.
pub fn weekly_ranges(from: DateTime<Utc>, count: u32) -> Vec<DateRange> {
    (0..i64::from(count))
        .map(|offset| DateRange::week_of(from + Duration::weeks(offset)))
        .collect()
}

/// Full-month ranges for `count` consecutive months starting at `from`'s
/// month.
pub fn monthly_ranges(from: DateTime<Utc>, count: u32) -> Vec<DateRange> {
    (0..count)
        .map(|offset| DateRange::month_of(from + Months::new(offset)))
        .collect()
}
