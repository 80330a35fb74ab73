// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Duration Representations
//!
//! A [`DurationStep`] is what a duration becomes once built, and what
//! intervals and repetitions move their anchors by. Two are provided:
//!
//! * [`time::Duration`], a fixed span where a year is 365 days and a month
//!   30 days;
//! * [`RelativeDuration`], which keeps years and months symbolic and applies
//!   them on the calendar, clamping to the end of shorter months.

use super::calendar::days_in_month;
use crate::components::DurationComponents;
use crate::decimal::{Decimal, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE, MICROS_PER_SECOND};
use crate::resolution::DurationResolution;
use crate::Error;
use num::{ToPrimitive, Zero};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::fmt;
use time::{Date, Duration, Month, PrimitiveDateTime};

/// A duration's populated fields, parsed and validated, highest order first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationValues {
    parts: Vec<(DurationResolution, Decimal)>,
}

impl DurationValues {
    /// Parses each field and checks the rules every representation shares.
    pub fn from_components(components: &DurationComponents) -> Result<Self, Error> {
        let parts = components
            .fields()
            .map(|(unit, text)| Ok((unit, Decimal::parse(text)?)))
            .collect::<Result<Vec<_>, Error>>()?;

        if parts.is_empty() {
            return Err(Error::format("a duration needs at least one unit"));
        }
        if parts.len() > 1 && parts.iter().any(|(unit, _)| *unit == DurationResolution::Weeks) {
            return Err(Error::format("weeks cannot be combined with other duration units"));
        }
        if parts.iter().rev().skip(1).any(|(_, value)| value.is_fractional()) {
            return Err(Error::format(
                "only the lowest order duration unit may have a fraction",
            ));
        }
        Ok(DurationValues { parts })
    }

    pub fn parts(&self) -> &[(DurationResolution, Decimal)] {
        &self.parts
    }

    pub fn get(&self, unit: DurationResolution) -> Option<&Decimal> {
        self.parts.iter().find(|(u, _)| *u == unit).map(|(_, value)| value)
    }

    /// Whether an hour, minute or second field is present.
    pub fn has_time_units(&self) -> bool {
        self.parts.iter().any(|(unit, _)| *unit >= DurationResolution::Hours)
    }
}

/// The length of one unit in microseconds, with years and months at their
/// fixed lengths.
fn unit_micros(unit: DurationResolution) -> u64 {
    match unit {
        DurationResolution::Years => 365 * MICROS_PER_DAY,
        DurationResolution::Months => 30 * MICROS_PER_DAY,
        DurationResolution::Weeks => 7 * MICROS_PER_DAY,
        DurationResolution::Days => MICROS_PER_DAY,
        DurationResolution::Hours => MICROS_PER_HOUR,
        DurationResolution::Minutes => MICROS_PER_MINUTE,
        DurationResolution::Seconds => MICROS_PER_SECOND,
    }
}

fn unit_overflow(unit: DurationResolution) -> Error {
    let message = "duration exceeds the largest representable time span".to_string();
    match unit {
        DurationResolution::Years => Error::YearOutOfBounds(message),
        DurationResolution::Months => Error::MonthOutOfBounds(message),
        DurationResolution::Weeks => Error::WeekOutOfBounds(message),
        DurationResolution::Days => Error::DayOutOfBounds(message),
        DurationResolution::Hours => Error::HoursOutOfBounds(message),
        DurationResolution::Minutes => Error::MinutesOutOfBounds(message),
        DurationResolution::Seconds => Error::SecondsOutOfBounds(message),
    }
}

/// Sums `parts` into a fixed span, truncated to whole microseconds.
///
/// Every unit is checked on its own before the sum is.
fn fixed_span<'v, P>(parts: P) -> Result<Duration, Error>
where
    P: IntoIterator<Item = &'v (DurationResolution, Decimal)>,
{
    let limit = BigInt::from(i64::MAX) * BigInt::from(MICROS_PER_SECOND);
    let rational_limit = BigRational::from_integer(limit.clone());

    let mut total = BigRational::zero();
    let mut highest = None;
    for (unit, value) in parts {
        let micros = value.value() * BigRational::from_integer(BigInt::from(unit_micros(*unit)));
        if micros > rational_limit {
            return Err(unit_overflow(*unit));
        }
        highest.get_or_insert(*unit);
        total += micros;
    }

    let total = total.to_integer();
    let overflow = || unit_overflow(highest.unwrap_or(DurationResolution::Seconds));
    if total > limit {
        return Err(overflow());
    }
    let micros_per_second = BigInt::from(MICROS_PER_SECOND);
    let seconds = (&total / &micros_per_second).to_i64().ok_or_else(overflow)?;
    let micros = (&total % &micros_per_second).to_i32().ok_or_else(overflow)?;
    Ok(Duration::new(seconds, micros * 1_000))
}

fn is_sub_day(span: Duration) -> bool {
    span.whole_seconds() % 86_400 != 0 || span.subsec_nanoseconds() != 0
}

/// Whether adding `span` to `anchor` stays within the representable range.
fn span_fits(span: Duration, anchor: PrimitiveDateTime) -> bool {
    if span.is_negative() {
        anchor - PrimitiveDateTime::MIN >= -span
    } else {
        PrimitiveDateTime::MAX - anchor >= span
    }
}

/// A built duration that can move dates and date-times.
pub trait DurationStep: Clone + fmt::Debug {
    fn from_values(values: &DurationValues) -> Result<Self, Error>;

    /// The step between two resolved interval ends.
    fn from_elapsed(elapsed: Duration) -> Self;

    /// Whether the step moves by anything smaller than a day.
    fn has_sub_day_part(&self) -> bool;

    fn negated(&self) -> Self;

    /// Proves that adding the step to `anchor` cannot leave the
    /// representable range.
    fn fits(&self, anchor: PrimitiveDateTime) -> bool;

    fn add_to_date(&self, date: Date) -> Option<Date>;

    fn add_to_datetime(&self, datetime: PrimitiveDateTime) -> Option<PrimitiveDateTime>;
}

impl DurationStep for Duration {
    fn from_values(values: &DurationValues) -> Result<Self, Error> {
        fixed_span(values.parts())
    }

    fn from_elapsed(elapsed: Duration) -> Self {
        elapsed
    }

    fn has_sub_day_part(&self) -> bool {
        is_sub_day(*self)
    }

    fn negated(&self) -> Self {
        -*self
    }

    fn fits(&self, anchor: PrimitiveDateTime) -> bool {
        span_fits(*self, anchor)
    }

    fn add_to_date(&self, date: Date) -> Option<Date> {
        date.checked_add(*self)
    }

    fn add_to_datetime(&self, datetime: PrimitiveDateTime) -> Option<PrimitiveDateTime> {
        datetime.checked_add(*self)
    }
}

/// A calendar-aware duration.
///
/// `years` and `months` are applied first, on the calendar, clamping the day
/// to the length of the target month; `span` is then added as a fixed
/// duration. `P1M` from January 31st therefore lands on the last day of
/// February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelativeDuration {
    pub years: i64,
    pub months: i64,
    pub span: Duration,
}

impl RelativeDuration {
    fn total_months(&self) -> Option<i64> {
        self.years.checked_mul(12)?.checked_add(self.months)
    }
}

/// Moves `date` by a whole number of months, clamping the day.
fn shift_months(date: Date, months: i64) -> Option<Date> {
    if months == 0 {
        return Some(date);
    }
    let index = i64::from(date.year())
        .checked_mul(12)?
        .checked_add(i64::from(u8::from(date.month())) - 1)?
        .checked_add(months)?;
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = Month::try_from(u8::try_from(index.rem_euclid(12) + 1).ok()?).ok()?;
    let day = date.day().min(days_in_month(year, month));
    Date::from_calendar_date(year, month, day).ok()
}

fn whole_count(value: Option<&Decimal>, unit: DurationResolution) -> Result<i64, Error> {
    let Some(value) = value else {
        return Ok(0);
    };
    if value.is_fractional() {
        return Err(Error::RelativeValue(format!(
            "fractional {} are not supported by calendar-aware durations",
            if unit == DurationResolution::Years { "years" } else { "months" }
        )));
    }
    value.whole().to_i64().ok_or_else(|| unit_overflow(unit))
}

impl DurationStep for RelativeDuration {
    fn from_values(values: &DurationValues) -> Result<Self, Error> {
        let years = whole_count(values.get(DurationResolution::Years), DurationResolution::Years)?;
        let months =
            whole_count(values.get(DurationResolution::Months), DurationResolution::Months)?;
        let relative = RelativeDuration {
            years,
            months,
            span: fixed_span(values.parts().iter().filter(|(unit, _)| {
                !matches!(unit, DurationResolution::Years | DurationResolution::Months)
            }))?,
        };
        if relative.total_months().is_none() {
            return Err(unit_overflow(DurationResolution::Years));
        }
        Ok(relative)
    }

    fn from_elapsed(elapsed: Duration) -> Self {
        RelativeDuration { years: 0, months: 0, span: elapsed }
    }

    fn has_sub_day_part(&self) -> bool {
        is_sub_day(self.span)
    }

    fn negated(&self) -> Self {
        RelativeDuration { years: -self.years, months: -self.months, span: -self.span }
    }

    fn fits(&self, anchor: PrimitiveDateTime) -> bool {
        let shifted = self
            .total_months()
            .and_then(|months| shift_months(anchor.date(), months));
        match shifted {
            Some(date) => span_fits(self.span, date.with_time(anchor.time())),
            None => false,
        }
    }

    fn add_to_date(&self, date: Date) -> Option<Date> {
        shift_months(date, self.total_months()?)?.checked_add(self.span)
    }

    fn add_to_datetime(&self, datetime: PrimitiveDateTime) -> Option<PrimitiveDateTime> {
        let date = shift_months(datetime.date(), self.total_months()?)?;
        date.with_time(datetime.time()).checked_add(self.span)
    }
}
