// src/dates/calendar.rs
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc, Weekday};

/// Midnight at the start of the instant's day.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    midnight(instant.date_naive())
}

/// The last representable instant of the day, one nanosecond before the
/// next midnight.
pub fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(instant) + Duration::days(1) - Duration::nanoseconds(1)
}

/// Midnight on the Sunday that opens the instant's week.
pub fn start_of_week(instant: DateTime<Utc>) -> DateTime<Utc> {
    let days_back = i64::from(instant.weekday().num_days_from_sunday());
    start_of_day(instant - Duration::days(days_back))
}

/// One nanosecond before the following week begins.
pub fn end_of_week(instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_week(instant) + Duration::weeks(1) - Duration::nanoseconds(1)
}

/// Midnight on the first day of the instant's month.
pub fn start_of_month(instant: DateTime<Utc>) -> DateTime<Utc> {
    midnight(first_of(instant.year(), instant.month()))
}

/// One nanosecond before the following month begins.
pub fn end_of_month(instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_month(instant) + Months::new(1) - Duration::nanoseconds(1)
}

/// Midnight on January 1 of the instant's year.
pub fn start_of_year(instant: DateTime<Utc>) -> DateTime<Utc> {
    midnight(first_of(instant.year(), 1))
}

/// One nanosecond before the following year begins.
pub fn end_of_year(instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_year(instant) + Months::new(12) - Duration::nanoseconds(1)
}

/// Number of days in the given month.
///
/// # Panics
///
/// Panics if `month` is outside `1..=12` or `year` is outside the range
/// `chrono` can represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (midnight(first_of(year, month)) + Months::new(1) - Duration::days(1)).day()
}

/// Shifts the instant by whole weeks, keeping the time of day.
pub fn add_weeks(instant: DateTime<Utc>, weeks: i64) -> DateTime<Utc> {
    instant + Duration::weeks(weeks)
}

pub fn is_weekend(instant: DateTime<Utc>) -> bool {
    matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the instant falls on one of the given holiday dates.
pub fn is_holiday(instant: DateTime<Utc>, holidays: &[NaiveDate]) -> bool {
    holidays.contains(&instant.date_naive())
}

/// The next day that is not a Saturday or Sunday, keeping the time of day.
pub fn next_business_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    let mut next = instant + Duration::days(1);
    while is_weekend(next) {
        next += Duration::days(1);
    }
    next
}

/// The closest earlier day that is not a Saturday or Sunday, keeping the
/// time of day.
pub fn previous_business_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    let mut previous = instant - Duration::days(1);
    while is_weekend(previous) {
        previous -= Duration::days(1);
    }
    previous
}

/// Counts non-weekend days between the two instants, inclusive of both.
/// Returns 0 when `start` is after `end`.
pub fn business_days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if !is_weekend(current) {
            count += 1;
        }
        current += Duration::days(1);
    }
    count
}

/// The instant itself on a weekday; otherwise the closest weekday, which is
/// the Friday before a Saturday and the Monday after a Sunday.
pub fn nearest_workday(instant: DateTime<Utc>) -> DateTime<Utc> {
    if !is_weekend(instant) {
        return instant;
    }
    let mut next = instant + Duration::days(1);
    let mut previous = instant - Duration::days(1);
    while is_weekend(next) && is_weekend(previous) {
        next += Duration::days(1);
        previous -= Duration::days(1);
    }
    if is_weekend(next) { previous } else { next }
}

/// Completed years between the birth instant and the reference instant.
/// A birthday on February 29 counts on February 28 in common years.
pub fn age_in_years(birth: DateTime<Utc>, reference: DateTime<Utc>) -> i32 {
    let birth_date = birth.date_naive();
    let reference_date = reference.date_naive();
    let mut age = reference_date.year() - birth_date.year();
    let birthday_day = birth_date
        .day()
        .min(days_in_month(reference_date.year(), birth_date.month()));
    if (reference_date.month(), reference_date.day()) < (birth_date.month(), birthday_day) {
        age -= 1;
    }
    age
}

/// Elapsed time from the birth instant until now.
pub fn exact_age(birth: DateTime<Utc>) -> Duration {
    Utc::now() - birth
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first day of a representable month")
}
