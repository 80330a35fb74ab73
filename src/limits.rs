// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Range Limits
//!
//! The per-field bounds enforced by [`TimeBuilder`](crate::builder::TimeBuilder)
//! before it constructs anything. The table is plain data; one shared routine
//! checks a component against its row and raises the error kind for that
//! field.
//!
//! ```
//! use chumsky_iso8601::limits::RangeLimits;
//!
//! let limits = RangeLimits::new().years(1, 9999).leap_seconds(true);
//! assert_eq!(limits.year().min, 1);
//! assert!(limits.allows_leap_seconds());
//! ```

use crate::decimal::Decimal;
use crate::Error;
use std::fmt;

/// A field that has a range limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Week,
    Weekday,
    DayOfYear,
    Hour,
    Minute,
    Second,
    OffsetHour,
    OffsetMinute,
}

impl Field {
    /// Wraps `message` in the error kind that reports this field.
    pub fn out_of_bounds(self, message: String) -> Error {
        match self {
            Field::Year => Error::YearOutOfBounds(message),
            Field::Month => Error::MonthOutOfBounds(message),
            Field::Day | Field::DayOfYear => Error::DayOutOfBounds(message),
            Field::Week => Error::WeekOutOfBounds(message),
            Field::Weekday => Error::WeekdayOutOfBounds(message),
            Field::Hour | Field::OffsetHour => Error::HoursOutOfBounds(message),
            Field::Minute | Field::OffsetMinute => Error::MinutesOutOfBounds(message),
            Field::Second => Error::SecondsOutOfBounds(message),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Week => "week",
            Field::Weekday => "weekday",
            Field::DayOfYear => "day of year",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::OffsetHour => "offset hour",
            Field::OffsetMinute => "offset minute",
        };
        f.write_str(name)
    }
}

/// Inclusive bounds on the whole part of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub field: Field,
    pub min: u32,
    pub max: u32,
}

impl Limit {
    pub const fn new(field: Field, min: u32, max: u32) -> Self {
        Limit { field, min, max }
    }

    /// Checks the whole part of `value`, returning it on success.
    pub fn check(&self, value: &Decimal) -> Result<u32, Error> {
        value
            .whole_u64()
            .and_then(|whole| u32::try_from(whole).ok())
            .filter(|whole| (self.min..=self.max).contains(whole))
            .ok_or_else(|| self.error(value.integer()))
    }

    /// Parses an integer component and checks it.
    ///
    /// Fractions are a format error here; only clock and duration fields
    /// may carry them.
    pub fn check_integer(&self, text: &str) -> Result<u32, Error> {
        let value = Decimal::parse(text)?;
        if value.is_fractional() {
            return Err(Error::format(format!("{} {text:?} must be an integer", self.field)));
        }
        self.check(&value)
    }

    fn error(&self, found: &str) -> Error {
        self.field.out_of_bounds(format!(
            "{} must be between {}..{}, {found} is invalid",
            self.field, self.min, self.max
        ))
    }
}

pub const YEAR: Limit = Limit::new(Field::Year, 0, 9999);
pub const MONTH: Limit = Limit::new(Field::Month, 1, 12);
pub const DAY: Limit = Limit::new(Field::Day, 1, 31);
pub const WEEK: Limit = Limit::new(Field::Week, 1, 53);
pub const WEEKDAY: Limit = Limit::new(Field::Weekday, 1, 7);
pub const DAY_OF_YEAR: Limit = Limit::new(Field::DayOfYear, 1, 366);
pub const HOUR: Limit = Limit::new(Field::Hour, 0, 24);
pub const MINUTE: Limit = Limit::new(Field::Minute, 0, 59);
pub const SECOND: Limit = Limit::new(Field::Second, 0, 60);
pub const OFFSET_HOUR: Limit = Limit::new(Field::OffsetHour, 0, 23);
pub const OFFSET_MINUTE: Limit = Limit::new(Field::OffsetMinute, 0, 59);

/// The limits a [`TimeBuilder`](crate::builder::TimeBuilder) validates against.
///
/// Every field starts at the ISO 8601 default. Only the year bounds and the
/// leap second policy are configurable; the rest are fixed by the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeLimits {
    year: Limit,
    leap_seconds: bool,
}

impl Default for RangeLimits {
    fn default() -> Self {
        RangeLimits { year: YEAR, leap_seconds: false }
    }
}

impl RangeLimits {
    /// Creates the default limits: years 0..=9999, no leap seconds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrows or widens the accepted years.
    pub fn years(mut self, min: u32, max: u32) -> Self {
        self.year = Limit::new(Field::Year, min, max);
        self
    }

    /// Configure whether `23:59:60` is accepted.
    pub fn leap_seconds(mut self, allow: bool) -> Self {
        self.leap_seconds = allow;
        self
    }

    pub fn year(&self) -> Limit {
        self.year
    }

    pub fn allows_leap_seconds(&self) -> bool {
        self.leap_seconds
    }
}
