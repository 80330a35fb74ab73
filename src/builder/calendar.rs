// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The builder that range-checks components and constructs `time` values.

use super::repeat::Repetitions;
use super::step::{DurationStep, DurationValues, RelativeDuration};
use super::value::{Endpoint, Interval, IsoDateTime, IsoTime};
use super::Builder;
use crate::components::{
    DateComponents, DurationComponents, EndpointComponents, IntervalComponents,
    RepeatingIntervalComponents, TimeComponents, TimezoneComponents,
};
use crate::decimal::{split_clock, Decimal, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE, MICROS_PER_SECOND};
use crate::limits::{
    RangeLimits, DAY, DAY_OF_YEAR, HOUR, MINUTE, MONTH, OFFSET_HOUR, OFFSET_MINUTE, SECOND, WEEK,
    WEEKDAY,
};
use crate::Error;
use num::{ToPrimitive, Zero};
use num_bigint::BigInt;
use std::marker::PhantomData;
use time::util::is_leap_year;
use time::{Date, Duration, Month, PrimitiveDateTime, Time, UtcOffset};

/// Number of days in `month` of `year`.
pub(crate) fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// The Monday of ISO week 1, which is the week holding January 4th.
pub(crate) fn iso_week_one_monday(year: i32) -> Result<Date, Error> {
    let fourth = Date::from_calendar_date(year, Month::January, 4)
        .map_err(|err| Error::YearOutOfBounds(err.to_string()))?;
    fourth
        .checked_sub(Duration::days(i64::from(fourth.weekday().number_days_from_monday())))
        .ok_or_else(|| {
            Error::YearOutOfBounds(format!("ISO year {year} starts before the earliest date"))
        })
}

/// A time of day that passed its range checks.
struct CheckedTime {
    time: Time,
    offset: Option<UtcOffset>,
    /// Set for hour 24, which denotes midnight at the end of the day.
    end_of_day: bool,
}

/// Range-checks components and constructs values from the `time` crate.
///
/// The type parameter picks the duration representation: the default
/// [`time::Duration`] gives years and months fixed lengths, while
/// [`RelativeTimeBuilder`] keeps them calendar-aware.
///
/// ```
/// use chumsky_iso8601::builder::TimeBuilder;
/// use chumsky_iso8601::clock::parse_time_with;
/// use chumsky_iso8601::limits::RangeLimits;
/// use chumsky_iso8601::Error;
///
/// assert!(matches!(parse_time_with("23:59:60", &TimeBuilder::new()), Err(Error::LeapSecond(_))));
///
/// let builder = TimeBuilder::new().with_limits(RangeLimits::new().leap_seconds(true));
/// assert_eq!(parse_time_with("23:59:60", &builder).unwrap().time.second(), 59);
/// ```
#[derive(Debug, Clone)]
pub struct TimeBuilder<D = Duration> {
    limits: RangeLimits,
    step: PhantomData<fn() -> D>,
}

/// A [`TimeBuilder`] whose durations apply years and months on the calendar.
pub type RelativeTimeBuilder = TimeBuilder<RelativeDuration>;

impl TimeBuilder {
    pub fn new() -> Self {
        TimeBuilder { limits: RangeLimits::default(), step: PhantomData }
    }
}

impl<D> Default for TimeBuilder<D> {
    fn default() -> Self {
        TimeBuilder { limits: RangeLimits::default(), step: PhantomData }
    }
}

impl<D: DurationStep> TimeBuilder<D> {
    /// Replaces the range limits.
    pub fn with_limits(mut self, limits: RangeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &RangeLimits {
        &self.limits
    }

    fn check_year(&self, text: &str) -> Result<i32, Error> {
        // A truncated year keeps its leading digits: "19" is 1900.
        let padded = format!("{text:0<4}");
        let year = self.limits.year().check_integer(&padded)?;
        i32::try_from(year).map_err(|_| Error::YearOutOfBounds(format!("{year} is too large")))
    }

    fn check_date(&self, components: &DateComponents) -> Result<Date, Error> {
        let year_text = components
            .year
            .as_deref()
            .ok_or_else(|| Error::format("a date requires a year"))?;
        let year = self.check_year(year_text)?;

        let calendar = components.month.is_some() || components.day.is_some();
        let week = components.week.is_some() || components.weekday.is_some();
        let ordinal = components.day_of_year.is_some();
        if [calendar, week, ordinal].into_iter().filter(|path| *path).count() > 1 {
            return Err(Error::format(
                "a date must be a calendar, week or ordinal date, not a mix",
            ));
        }

        if let Some(day_of_year) = components.day_of_year.as_deref() {
            self.ordinal_date(year, day_of_year)
        } else if week {
            self.week_date(year, components.week.as_deref(), components.weekday.as_deref())
        } else {
            self.calendar_date(year, components.month.as_deref(), components.day.as_deref())
        }
    }

    fn calendar_date(&self, year: i32, month: Option<&str>, day: Option<&str>) -> Result<Date, Error> {
        if month.is_none() && day.is_some() {
            return Err(Error::format("a calendar day requires a month"));
        }
        let month = month.map(|month| MONTH.check_integer(month)).transpose()?.unwrap_or(1);
        let day = day.map(|day| DAY.check_integer(day)).transpose()?.unwrap_or(1);

        let month = u8::try_from(month)
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .ok_or_else(|| Error::MonthOutOfBounds(format!("{month} is not a month")))?;
        let length = days_in_month(year, month);
        if day > u32::from(length) {
            return Err(Error::DayOutOfBounds(format!(
                "{year:04}-{:02} has {length} days, {day} is invalid",
                u8::from(month)
            )));
        }
        Date::from_calendar_date(year, month, day as u8)
            .map_err(|err| Error::DayOutOfBounds(err.to_string()))
    }

    fn week_date(&self, year: i32, week: Option<&str>, weekday: Option<&str>) -> Result<Date, Error> {
        let week_text = week.ok_or_else(|| Error::format("a weekday requires a week"))?;
        if week_text.bytes().all(|b| b == b'0') {
            return Err(Error::WeekOutOfBounds(format!(
                "week {week_text} is invalid, ISO weeks start at 01"
            )));
        }
        let week = WEEK.check_integer(week_text)?;
        let weekday = weekday.map(|day| WEEKDAY.check_integer(day)).transpose()?.unwrap_or(1);

        let offset = i64::from((week - 1) * 7 + (weekday - 1));
        let date = iso_week_one_monday(year)?
            .checked_add(Duration::days(offset))
            .ok_or_else(|| Error::YearOutOfBounds(format!("{year} week {week} is out of range")))?;

        let (iso_year, iso_week, _) = date.to_iso_week_date();
        if iso_year != year || u32::from(iso_week) != week {
            return Err(Error::WeekOutOfBounds(format!("{year} has no ISO week {week}")));
        }
        Ok(date)
    }

    fn ordinal_date(&self, year: i32, day_of_year: &str) -> Result<Date, Error> {
        let ordinal = DAY_OF_YEAR.check_integer(day_of_year)?;
        if ordinal == 366 && !is_leap_year(year) {
            return Err(Error::DayOutOfBounds(format!(
                "{year:04} is not a leap year, day 366 is invalid"
            )));
        }
        let first = Date::from_calendar_date(year, Month::January, 1)
            .map_err(|err| Error::YearOutOfBounds(err.to_string()))?;
        first
            .checked_add(Duration::days(i64::from(ordinal - 1)))
            .filter(|date| date.year() == year)
            .ok_or_else(|| Error::DayOutOfBounds(format!("day {ordinal} is past the end of {year}")))
    }

    fn check_time(&self, components: &TimeComponents) -> Result<CheckedTime, Error> {
        let hour_text = components
            .hour
            .as_deref()
            .ok_or_else(|| Error::format("a time requires an hour"))?;
        if components.second.is_some() && components.minute.is_none() {
            return Err(Error::format("seconds require minutes"));
        }
        let hour = Decimal::parse(hour_text)?;
        let minute = components.minute.as_deref().map(Decimal::parse).transpose()?;
        let second = components.second.as_deref().map(Decimal::parse).transpose()?;

        let fraction_not_last = (hour.is_fractional() && minute.is_some())
            || minute.as_ref().is_some_and(|minute| minute.is_fractional() && second.is_some());
        if fraction_not_last {
            return Err(Error::format("only the lowest order time field may have a fraction"));
        }

        let offset = components
            .timezone
            .as_ref()
            .map(|timezone| self.check_offset(timezone))
            .transpose()?;

        if hour.whole_u64() == Some(24) {
            let nonzero = |value: &Option<Decimal>| value.as_ref().is_some_and(|v| !v.is_zero());
            if hour.has_remainder() || nonzero(&minute) || nonzero(&second) {
                return Err(Error::MidnightBounds(format!(
                    "hour 24 may only denote midnight, {hour_text} with non-zero minutes or seconds is invalid"
                )));
            }
            return Ok(CheckedTime { time: Time::MIDNIGHT, offset, end_of_day: true });
        }

        let leap = second.as_ref().is_some_and(|second| second.whole_u64() == Some(60));
        if leap {
            if !self.limits.allows_leap_seconds() {
                return Err(Error::LeapSecond("leap seconds are not supported".to_string()));
            }
            let at_day_end = hour.whole_u64() == Some(23)
                && minute.as_ref().and_then(Decimal::whole_u64) == Some(59);
            if !at_day_end {
                return Err(Error::SecondsOutOfBounds(
                    "a leap second is only valid at 23:59:60".to_string(),
                ));
            }
        }

        HOUR.check(&hour)?;
        minute.as_ref().map(|minute| MINUTE.check(minute)).transpose()?;
        second.as_ref().map(|second| SECOND.check(second)).transpose()?;

        let scaled = |value: &Option<Decimal>, factor: u64| {
            value.as_ref().map_or_else(BigInt::zero, |value| value.scaled(factor))
        };
        let mut total = hour.scaled(MICROS_PER_HOUR)
            + scaled(&minute, MICROS_PER_MINUTE)
            + scaled(&second, MICROS_PER_SECOND);
        if leap {
            // `time::Time` has no second 60; keep the fraction on second 59.
            total -= BigInt::from(MICROS_PER_SECOND);
        }
        let total = total
            .to_u64()
            .filter(|total| *total < MICROS_PER_DAY)
            .ok_or_else(|| Error::HoursOutOfBounds(format!("{hour_text} is past the end of the day")))?;

        let (h, m, s, us) = split_clock(total);
        let time = Time::from_hms_micro(h as u8, m as u8, s as u8, us as u32)
            .map_err(|err| Error::HoursOutOfBounds(err.to_string()))?;
        Ok(CheckedTime { time, offset, end_of_day: false })
    }

    fn check_offset(&self, components: &TimezoneComponents) -> Result<UtcOffset, Error> {
        if components.is_utc {
            return Ok(UtcOffset::UTC);
        }
        let hour_text = components
            .hour
            .as_deref()
            .ok_or_else(|| Error::format("a UTC offset requires an hour"))?;
        let hours = OFFSET_HOUR.check_integer(hour_text)? as i8;
        let minutes = components
            .minute
            .as_deref()
            .map(|minute| OFFSET_MINUTE.check_integer(minute))
            .transpose()?
            .unwrap_or(0) as i8;
        if components.negative && hours == 0 && minutes == 0 {
            return Err(Error::format("a zero UTC offset must not be negative"));
        }
        let sign = if components.negative { -1 } else { 1 };
        UtcOffset::from_hms(sign * hours, sign * minutes, 0)
            .map_err(|err| Error::HoursOutOfBounds(err.to_string()))
    }

    fn combine(&self, date: &DateComponents, time: &TimeComponents) -> Result<IsoDateTime, Error> {
        let mut date = self.check_date(date)?;
        let checked = self.check_time(time)?;
        if checked.end_of_day {
            date = date.next_day().ok_or_else(|| {
                Error::YearOutOfBounds(format!("{date} 24:00 is past the latest date"))
            })?;
        }
        Ok(IsoDateTime { datetime: PrimitiveDateTime::new(date, checked.time), offset: checked.offset })
    }

    fn endpoint(&self, components: &EndpointComponents) -> Result<Endpoint, Error> {
        match components {
            EndpointComponents::Date(date) => self.check_date(date).map(Endpoint::Date),
            EndpointComponents::DateTime(datetime) => {
                self.combine(&datetime.date, &datetime.time).map(Endpoint::DateTime)
            }
            EndpointComponents::Time(_) => {
                Err(Error::format("a time-only interval end needs a start to take its date from"))
            }
        }
    }

    /// Builds a duration step, and whether a date anchored on it must become
    /// a date-time.
    fn step(&self, components: &DurationComponents) -> Result<(D, bool), Error> {
        let values = DurationValues::from_components(components)?;
        let step = D::from_values(&values)?;
        let promote = values.has_time_units() || step.has_sub_day_part();
        Ok((step, promote))
    }

    fn resolve(&self, anchor: &Endpoint, step: &D, promote: bool) -> Result<Endpoint, Error> {
        if promote && matches!(anchor, Endpoint::Date(_)) {
            debug!("promoting {anchor:?} to a date-time for a sub-day step");
        }
        anchor.shifted(step, promote).ok_or_else(|| {
            Error::IntervalOutOfBounds(format!(
                "moving {} by {step:?} leaves the representable range",
                anchor.to_primitive()
            ))
        })
    }

    fn complete(end: EndpointComponents, start: &EndpointComponents) -> Result<EndpointComponents, Error> {
        if !end.is_concise() {
            return Ok(end);
        }
        let completed = end.complete_from(start)?;
        debug!("completed concise interval end to {completed:?}");
        Ok(completed)
    }

    fn repetitions(&self, count: Option<&str>, bounded: bool) -> Result<Option<u64>, Error> {
        match (bounded, count) {
            (false, None) => Ok(None),
            (false, Some(count)) => Err(Error::format(format!(
                "unbounded repetition must not have a count, found {count:?}"
            ))),
            (true, None) => Err(Error::format("bounded repetition requires a count")),
            (true, Some(count)) => {
                if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::format(format!(
                        "repetition count {count:?} must be a non-negative integer"
                    )));
                }
                count.parse::<u64>().map(Some).map_err(|_| {
                    Error::format(format!("repetition count {count:?} is too large"))
                })
            }
        }
    }
}

impl<D: DurationStep> Builder for TimeBuilder<D> {
    type Date = Date;
    type Time = IsoTime;
    type DateTime = IsoDateTime;
    type Timezone = UtcOffset;
    type Duration = D;
    type Interval = Interval;
    type RepeatingInterval = Repetitions<D>;

    fn build_date(&self, date: DateComponents) -> Result<Date, Error> {
        self.check_date(&date)
    }

    fn build_time(&self, time: TimeComponents) -> Result<IsoTime, Error> {
        let checked = self.check_time(&time)?;
        Ok(IsoTime { time: checked.time, offset: checked.offset })
    }

    fn build_datetime(&self, date: DateComponents, time: TimeComponents) -> Result<IsoDateTime, Error> {
        self.combine(&date, &time)
    }

    fn build_timezone(&self, timezone: TimezoneComponents) -> Result<UtcOffset, Error> {
        self.check_offset(&timezone)
    }

    fn build_duration(&self, duration: DurationComponents) -> Result<D, Error> {
        D::from_values(&DurationValues::from_components(&duration)?)
    }

    fn build_interval(&self, interval: IntervalComponents) -> Result<Interval, Error> {
        match (interval.start, interval.end, interval.duration) {
            (Some(start), Some(end), None) => {
                let end = Self::complete(end, &start)?;
                Ok(Interval { start: self.endpoint(&start)?, end: self.endpoint(&end)? })
            }
            (Some(start), None, Some(duration)) => {
                let start = self.endpoint(&start)?;
                let (step, promote) = self.step(&duration)?;
                let end = self.resolve(&start, &step, promote)?;
                Ok(Interval { start, end })
            }
            (None, Some(end), Some(duration)) => {
                let end = self.endpoint(&end)?;
                let (step, promote) = self.step(&duration)?;
                let start = self.resolve(&end, &step.negated(), promote)?;
                Ok(Interval { start, end })
            }
            _ => Err(Error::format(
                "an interval needs exactly two of a start, an end and a duration",
            )),
        }
    }

    fn build_repeating_interval(
        &self,
        repeating: RepeatingIntervalComponents,
    ) -> Result<Repetitions<D>, Error> {
        let remaining = self.repetitions(repeating.count.as_deref(), repeating.bounded)?;
        let interval = repeating.interval;

        let (anchor, step, promote) = match (interval.start, interval.end, interval.duration) {
            (Some(start), None, Some(duration)) => {
                let (step, promote) = self.step(&duration)?;
                (self.endpoint(&start)?, step, promote)
            }
            (None, Some(end), Some(duration)) => {
                let (step, promote) = self.step(&duration)?;
                (self.endpoint(&end)?, step.negated(), promote)
            }
            (Some(start), Some(end), None) => {
                let end = Self::complete(end, &start)?;
                let start = self.endpoint(&start)?;
                let end = self.endpoint(&end)?;
                let promote = matches!(start, Endpoint::DateTime(_))
                    || matches!(end, Endpoint::DateTime(_));
                (start, D::from_elapsed(start.elapsed_until(&end)), promote)
            }
            _ => {
                return Err(Error::format(
                    "a repeating interval needs exactly two of a start, an end and a duration",
                ))
            }
        };

        if promote && matches!(anchor, Endpoint::Date(_)) {
            debug!("promoting repetition anchor {anchor:?} to a date-time");
        }
        let anchor = if promote { anchor.promoted() } else { anchor };
        Ok(Repetitions::new(anchor, step, promote, remaining))
    }
}
