// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Component Tuples
//!
//! The tokenizers never build calendar values themselves. Each grammar scans
//! its input into one of the plain records below, holding the digit strings
//! exactly as written (`None` when a component is absent), and hands it to a
//! [`Builder`](crate::builder::Builder).
//!
//! The records are created fresh for every parse call and consumed once.

use crate::resolution::{DateResolution, DurationResolution, IntervalResolution, TimeResolution};
use crate::Error;

/// The pieces of a calendar, week or ordinal date.
///
/// Alongside `year`, at most one resolution path is populated: `month`/`day`,
/// `week`/`weekday`, or `day_of_year`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DateComponents {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub week: Option<String>,
    pub weekday: Option<String>,
    pub day_of_year: Option<String>,
}

impl DateComponents {
    pub fn resolution(&self) -> DateResolution {
        if self.day_of_year.is_some() {
            DateResolution::Ordinal
        } else if self.weekday.is_some() {
            DateResolution::Weekday
        } else if self.week.is_some() {
            DateResolution::Week
        } else if self.day.is_some() {
            DateResolution::Day
        } else if self.month.is_some() {
            DateResolution::Month
        } else {
            DateResolution::Year
        }
    }
}

/// The pieces of a time of day.
///
/// Fields go from coarse to fine; a field that is absent below a present one
/// means the time was truncated. Only the lowest present field may carry a
/// fraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TimeComponents {
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub second: Option<String>,
    pub timezone: Option<TimezoneComponents>,
}

impl TimeComponents {
    pub fn resolution(&self) -> TimeResolution {
        if self.second.is_some() {
            TimeResolution::Seconds
        } else if self.minute.is_some() {
            TimeResolution::Minutes
        } else {
            TimeResolution::Hours
        }
    }
}

/// The pieces of a UTC offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TimezoneComponents {
    pub negative: bool,
    /// Set for the `Z` designator, in which case `hour` and `minute` are empty.
    pub is_utc: bool,
    pub hour: Option<String>,
    pub minute: Option<String>,
    /// The offset exactly as written, e.g. `Z` or `-05:30`.
    pub designator: String,
}

/// The pieces of a duration.
///
/// `weeks` is its own dialect and never appears alongside the other fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DurationComponents {
    pub years: Option<String>,
    pub months: Option<String>,
    pub weeks: Option<String>,
    pub days: Option<String>,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

impl DurationComponents {
    pub fn resolution(&self) -> DurationResolution {
        if self.seconds.is_some() {
            DurationResolution::Seconds
        } else if self.minutes.is_some() {
            DurationResolution::Minutes
        } else if self.hours.is_some() {
            DurationResolution::Hours
        } else if self.days.is_some() {
            DurationResolution::Days
        } else if self.weeks.is_some() {
            DurationResolution::Weeks
        } else if self.months.is_some() {
            DurationResolution::Months
        } else {
            DurationResolution::Years
        }
    }

    /// Whether any time-of-day unit was given.
    pub fn has_time_units(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }

    /// The populated fields, from highest to lowest order.
    pub(crate) fn fields(&self) -> impl Iterator<Item = (DurationResolution, &str)> {
        [
            (DurationResolution::Years, &self.years),
            (DurationResolution::Months, &self.months),
            (DurationResolution::Weeks, &self.weeks),
            (DurationResolution::Days, &self.days),
            (DurationResolution::Hours, &self.hours),
            (DurationResolution::Minutes, &self.minutes),
            (DurationResolution::Seconds, &self.seconds),
        ]
        .into_iter()
        .filter_map(|(unit, value)| value.as_deref().map(|value| (unit, value)))
    }
}

/// A date and a time parsed from either side of a date-time delimiter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DateTimeComponents {
    pub date: DateComponents,
    pub time: TimeComponents,
}

/// One end of an interval.
///
/// `Time` only ever appears as a concise interval end, where the date is
/// inherited from the start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EndpointComponents {
    Date(DateComponents),
    DateTime(DateTimeComponents),
    Time(TimeComponents),
}

impl EndpointComponents {
    pub fn date(&self) -> Option<&DateComponents> {
        match self {
            EndpointComponents::Date(date) => Some(date),
            EndpointComponents::DateTime(datetime) => Some(&datetime.date),
            EndpointComponents::Time(_) => None,
        }
    }

    pub fn time(&self) -> Option<&TimeComponents> {
        match self {
            EndpointComponents::Date(_) => None,
            EndpointComponents::DateTime(datetime) => Some(&datetime.time),
            EndpointComponents::Time(time) => Some(time),
        }
    }

    /// Whether this end leaves out fields that must come from the start.
    pub fn is_concise(&self) -> bool {
        self.date().map_or(true, |date| date.year.is_none())
    }

    pub fn resolution(&self) -> IntervalResolution {
        match self {
            EndpointComponents::Date(date) => date.resolution().into(),
            EndpointComponents::DateTime(datetime) => datetime.time.resolution().into(),
            EndpointComponents::Time(time) => time.resolution().into(),
        }
    }

    /// Fills in the fields a concise end leaves out from the interval start.
    ///
    /// A missing year (and month) comes from the start's date, a time-only
    /// end takes the start's whole date, and an end time without an offset
    /// takes the start's offset. Complete ends are returned unchanged.
    pub fn complete_from(self, start: &EndpointComponents) -> Result<EndpointComponents, Error> {
        if !self.is_concise() {
            return Ok(self);
        }
        let start_date = start
            .date()
            .ok_or_else(|| Error::format("interval start must contain a date"))?;
        let start_offset = start.time().and_then(|time| time.timezone.clone());
        let inherit_offset = |mut time: TimeComponents| {
            if time.timezone.is_none() {
                time.timezone = start_offset.clone();
            }
            time
        };

        Ok(match self {
            EndpointComponents::Time(time) => EndpointComponents::DateTime(DateTimeComponents {
                date: start_date.clone(),
                time: inherit_offset(time),
            }),
            EndpointComponents::Date(date) => {
                EndpointComponents::Date(merge_concise_date(start_date, date)?)
            }
            EndpointComponents::DateTime(datetime) => {
                EndpointComponents::DateTime(DateTimeComponents {
                    date: merge_concise_date(start_date, datetime.date)?,
                    time: inherit_offset(datetime.time),
                })
            }
        })
    }
}

/// A month-day end needs the start's year; a day-only end also needs its month.
fn merge_concise_date(start: &DateComponents, end: DateComponents) -> Result<DateComponents, Error> {
    let month = match end.month {
        Some(month) => Some(month),
        None if start.month.is_some() => start.month.clone(),
        None => {
            return Err(Error::format(
                "a day-only interval end requires a start with a calendar month",
            ))
        }
    };
    if start.year.is_none() {
        return Err(Error::format("a concise interval end requires a start with a year"));
    }
    Ok(DateComponents { year: start.year.clone(), month, day: end.day, ..DateComponents::default() })
}

/// Two of start, end and duration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntervalComponents {
    pub start: Option<EndpointComponents>,
    pub end: Option<EndpointComponents>,
    pub duration: Option<DurationComponents>,
}

impl IntervalComponents {
    /// The finest resolution among the populated parts.
    pub fn resolution(&self) -> IntervalResolution {
        let endpoints = [&self.start, &self.end]
            .into_iter()
            .flatten()
            .map(EndpointComponents::resolution);
        let duration = self.duration.iter().map(|d| IntervalResolution::from(d.resolution()));
        endpoints.chain(duration).max().unwrap_or(IntervalResolution::Year)
    }
}

/// An interval with a repetition count.
///
/// `bounded == false` means unbounded repetition and `count` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RepeatingIntervalComponents {
    pub bounded: bool,
    pub count: Option<String>,
    pub interval: IntervalComponents,
}
