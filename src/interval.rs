// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Interval Parsing
//!
//! An interval is two of a start, an end and a duration, separated by the
//! interval delimiter: `<start>/<end>`, `<start>/<duration>` or
//! `<duration>/<end>`. The end of a `<start>/<end>` interval may be written
//! concisely, leaving out whatever it shares with the start:
//!
//! | Input | End |
//! |---|---|
//! | `2007-12-14T13:30/15:30` | `2007-12-14T15:30` |
//! | `2008-02-15/03-14` | `2008-03-14` |
//! | `2020-01-01/02` | `2020-01-02` |
//!
//! A repeating interval prefixes an interval with `R` (unbounded) or `Rn`
//! (exactly `n` values): `R5/2008-03-01T13:00:00Z/P1Y2M10DT2H30M`.
//!
//! ```
//! use chumsky_iso8601::builder::Endpoint;
//! use chumsky_iso8601::interval::parse_interval;
//! use time::macros::date;
//!
//! let interval = parse_interval("2020-01-01/02").unwrap();
//! assert_eq!(interval.end, Endpoint::Date(date!(2020 - 01 - 02)));
//! ```

use crate::builder::{Builder, ComponentsBuilder, Interval, Repetitions, TimeBuilder};
use crate::clock::{parse_datetime_with, parse_time_with, DATETIME_DELIMITER};
use crate::components::{
    DateComponents, DateTimeComponents, EndpointComponents, IntervalComponents,
    RepeatingIntervalComponents,
};
use crate::date::parse_date_with;
use crate::duration::parse_duration_with;
use crate::resolution::IntervalResolution;
use crate::scan::{as_text, digit, digits, format_error, Extra};
use crate::Error;
use chumsky::prelude::*;

/// The default separator between the parts of an interval.
pub const INTERVAL_DELIMITER: char = '/';

/// The characters separating the parts of an interval and the date and time
/// of each endpoint.
///
/// ```
/// use chumsky_iso8601::interval::Delimiters;
///
/// let delimiters = Delimiters::new().interval('-').datetime(' ');
/// assert_eq!(delimiters.interval_delimiter(), '-');
/// assert_eq!(Delimiters::default().datetime_delimiter(), 'T');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiters {
    interval: char,
    datetime: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters { interval: INTERVAL_DELIMITER, datetime: DATETIME_DELIMITER }
    }
}

impl Delimiters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the separator between start, end and duration.
    pub fn interval(mut self, delimiter: char) -> Self {
        self.interval = delimiter;
        self
    }

    /// Configure the separator between the date and time of an endpoint.
    pub fn datetime(mut self, delimiter: char) -> Self {
        self.datetime = delimiter;
        self
    }

    pub fn interval_delimiter(&self) -> char {
        self.interval
    }

    pub fn datetime_delimiter(&self) -> char {
        self.datetime
    }
}

/// Creates a parser for a concise end date: `DD`, `MMDD` or `MM-DD`.
fn concise_date_parser<'a>() -> impl Parser<'a, &'a str, DateComponents, Extra<'a>> {
    let month_day = digits(2)
        .then_ignore(just('-').or_not())
        .then(digits(2))
        .map(|(month, day)| DateComponents {
            month: Some(month),
            day: Some(day),
            ..DateComponents::default()
        });
    let day = digits(2).map(|day| DateComponents { day: Some(day), ..DateComponents::default() });

    choice((month_day.then_ignore(end()), day.then_ignore(end())))
}

/// Creates a parser for the `R` or `Rn` prefix of a repeating interval.
fn repeat_marker_parser<'a>() -> impl Parser<'a, &'a str, Option<String>, Extra<'a>> {
    just('R')
        .ignore_then(digit().repeated().at_least(1).to_slice().or_not())
        .then_ignore(end())
        .map(|count: Option<&str>| count.map(str::to_string))
}

fn split_halves(text: &str, delimiter: char) -> Result<(&str, &str), Error> {
    match text.split_once(delimiter) {
        Some((first, second))
            if !first.is_empty() && !second.is_empty() && !second.contains(delimiter) =>
        {
            Ok((first, second))
        }
        _ => Err(Error::format(format!(
            "interval {text:?} must have two non-empty parts separated by one {delimiter:?}"
        ))),
    }
}

/// Scans an interval start, or an end that is not concise.
fn tokenize_endpoint(text: &str, datetime: char) -> Result<EndpointComponents, Error> {
    if text.contains(datetime) {
        parse_datetime_with(text, datetime, &ComponentsBuilder).map(EndpointComponents::DateTime)
    } else {
        parse_date_with(text, &ComponentsBuilder).map(EndpointComponents::Date)
    }
}

/// Scans the date of an interval end, which may be concise.
fn tokenize_end_date(text: &str) -> Result<DateComponents, Error> {
    let hyphens = text.matches('-').count();
    let concise = (hyphens == 0 && text.len() <= 4) || hyphens == 1;
    if !concise {
        return parse_date_with(text, &ComponentsBuilder);
    }
    concise_date_parser()
        .parse(text)
        .into_result()
        .map_err(|errors| format_error(text, "concise interval end", errors))
}

/// Scans an interval end: a date or date-time, possibly concise, or a bare
/// time of day.
fn tokenize_end(text: &str, datetime: char) -> Result<EndpointComponents, Error> {
    if let Some((date, time)) = text.split_once(datetime) {
        let date = tokenize_end_date(date)?;
        let offset = text.len() - time.len();
        let time = parse_time_with(time, &ComponentsBuilder).map_err(|err| err.shifted(offset))?;
        return Ok(EndpointComponents::DateTime(DateTimeComponents { date, time }));
    }
    if text.contains(':') {
        return parse_time_with(text, &ComponentsBuilder).map(EndpointComponents::Time);
    }
    tokenize_end_date(text).map(EndpointComponents::Date)
}

pub(crate) fn tokenize_interval(text: &str, delimiters: &Delimiters) -> Result<IntervalComponents, Error> {
    if text.starts_with('R') {
        return Err(Error::format_at(
            format!("{text:?} is a repeating interval, not an interval"),
            0..1,
        ));
    }
    let (first, second) = split_halves(text, delimiters.interval)?;
    let second_offset = text.len() - second.len();
    let shift = |err: Error| err.shifted(second_offset);

    let components = match (first.starts_with('P'), second.starts_with('P')) {
        (true, true) => {
            return Err(Error::format(format!("interval {text:?} has no start or end")));
        }
        (true, false) => IntervalComponents {
            start: None,
            duration: Some(parse_duration_with(first, &ComponentsBuilder)?),
            end: Some(tokenize_endpoint(second, delimiters.datetime).map_err(shift)?),
        },
        (false, true) => IntervalComponents {
            start: Some(tokenize_endpoint(first, delimiters.datetime)?),
            duration: Some(parse_duration_with(second, &ComponentsBuilder).map_err(shift)?),
            end: None,
        },
        (false, false) => IntervalComponents {
            start: Some(tokenize_endpoint(first, delimiters.datetime)?),
            duration: None,
            end: Some(tokenize_end(second, delimiters.datetime).map_err(shift)?),
        },
    };
    trace!("tokenized interval {text:?} into {components:?}");
    Ok(components)
}

pub(crate) fn tokenize_repeating_interval(
    text: &str,
    delimiters: &Delimiters,
) -> Result<RepeatingIntervalComponents, Error> {
    if !text.starts_with('R') {
        return Err(Error::format_at(
            format!("repeating interval {text:?} must start with R"),
            0..text.len().min(1),
        ));
    }
    let Some((marker, body)) = text.split_once(delimiters.interval) else {
        return Err(Error::format(format!(
            "repeating interval {text:?} is missing its interval"
        )));
    };
    let count = repeat_marker_parser()
        .parse(marker)
        .into_result()
        .map_err(|errors| format_error(text, "repetition count", errors))?;
    let interval = tokenize_interval(body, delimiters)
        .map_err(|err| err.shifted(text.len() - body.len()))?;

    Ok(RepeatingIntervalComponents { bounded: count.is_some(), count, interval })
}

/// Parses an interval with the default delimiters.
///
/// The result is always ordered: for `<duration>/<end>` the start is found
/// by subtracting the duration from the end.
pub fn parse_interval<I: AsRef<[u8]>>(input: I) -> Result<Interval, Error> {
    parse_interval_with(input, &Delimiters::default(), &TimeBuilder::new())
}

pub fn parse_interval_with<I, B>(input: I, delimiters: &Delimiters, builder: &B) -> Result<B::Interval, Error>
where
    I: AsRef<[u8]>,
    B: Builder,
{
    let text = as_text(input.as_ref())?;
    builder.build_interval(tokenize_interval(text, delimiters)?)
}

/// Parses a repeating interval into a lazy sequence of endpoints.
///
/// ```
/// use chumsky_iso8601::builder::Endpoint;
/// use chumsky_iso8601::interval::parse_repeating_interval;
/// use time::macros::date;
///
/// let values: Vec<_> =
///     parse_repeating_interval("R3/1981-04-05/P1D").unwrap().collect::<Result<_, _>>().unwrap();
/// assert_eq!(values.len(), 3);
/// assert_eq!(values[2], Endpoint::Date(date!(1981 - 04 - 07)));
/// ```
pub fn parse_repeating_interval<I: AsRef<[u8]>>(input: I) -> Result<Repetitions<time::Duration>, Error> {
    parse_repeating_interval_with(input, &Delimiters::default(), &TimeBuilder::new())
}

pub fn parse_repeating_interval_with<I, B>(
    input: I,
    delimiters: &Delimiters,
    builder: &B,
) -> Result<B::RepeatingInterval, Error>
where
    I: AsRef<[u8]>,
    B: Builder,
{
    let text = as_text(input.as_ref())?;
    builder.build_repeating_interval(tokenize_repeating_interval(text, delimiters)?)
}

/// Reports the finest unit present anywhere in an interval.
pub fn get_interval_resolution<I: AsRef<[u8]>>(
    input: I,
    delimiters: &Delimiters,
) -> Result<IntervalResolution, Error> {
    Ok(parse_interval_with(input, delimiters, &ComponentsBuilder)?.resolution())
}

/// Reports the finest unit present in the interval of a repeating interval.
pub fn get_repeating_interval_resolution<I: AsRef<[u8]>>(
    input: I,
    delimiters: &Delimiters,
) -> Result<IntervalResolution, Error> {
    Ok(parse_repeating_interval_with(input, delimiters, &ComponentsBuilder)?.interval.resolution())
}
