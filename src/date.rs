// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Date Parsing
//!
//! Supported forms:
//!
//! | Form | Example |
//! |---|---|
//! | truncated year `Y` to `YYYY` | `19` (1900), `1981` |
//! | calendar date | `1981-04-05`, `19810405` |
//! | year and month | `1981-04` (the hyphen is required) |
//! | ISO week | `1981-W14`, `1981W14` |
//! | ISO week date | `1981-W14-7`, `1981W147` |
//! | ordinal date | `1981-095`, `1981095` |
//!
//! ```
//! use chumsky_iso8601::date::{get_date_resolution, parse_date};
//! use chumsky_iso8601::resolution::DateResolution;
//!
//! let date = parse_date("1981-W14-7").unwrap();
//! assert_eq!((date.year(), date.month(), date.day()), (1981, time::Month::April, 5));
//!
//! assert_eq!(get_date_resolution("1981095").unwrap(), DateResolution::Ordinal);
//! ```

use crate::builder::{Builder, ComponentsBuilder, TimeBuilder};
use crate::components::DateComponents;
use crate::resolution::DateResolution;
use crate::scan::{as_text, digit, digits, format_error, Extra};
use crate::Error;
use chumsky::prelude::*;
use time::Date;

/// Creates a parser for every supported date form.
///
/// Each form must consume the whole input, which is what tells `YYYY-MM`
/// apart from `YYYY-MM-DD` and `YYYYDDD` apart from `YYYYMMDD`. A `W` right
/// after the year selects the week grammar.
pub fn date_parser<'a>() -> impl Parser<'a, &'a str, DateComponents, Extra<'a>> {
    let week_extended = digits(4)
        .then_ignore(just("-W"))
        .then(digits(2))
        .then(just('-').ignore_then(digits(1)).or_not())
        .map(|((year, week), weekday)| week_date(year, week, weekday));

    let week_basic = digits(4)
        .then_ignore(just('W'))
        .then(digits(2))
        .then(digits(1).or_not())
        .map(|((year, week), weekday)| week_date(year, week, weekday));

    let calendar_extended = digits(4)
        .then_ignore(just('-'))
        .then(digits(2))
        .then_ignore(just('-'))
        .then(digits(2))
        .map(|((year, month), day)| calendar_date(year, Some(month), Some(day)));

    let ordinal_extended = digits(4)
        .then_ignore(just('-'))
        .then(digits(3))
        .map(|(year, day_of_year)| ordinal_date(year, day_of_year));

    let year_month = digits(4)
        .then_ignore(just('-'))
        .then(digits(2))
        .map(|(year, month)| calendar_date(year, Some(month), None));

    let calendar_basic = digits(4)
        .then(digits(2))
        .then(digits(2))
        .map(|((year, month), day)| calendar_date(year, Some(month), Some(day)));

    let ordinal_basic =
        digits(4).then(digits(3)).map(|(year, day_of_year)| ordinal_date(year, day_of_year));

    let year = digit()
        .repeated()
        .at_least(1)
        .at_most(4)
        .to_slice()
        .map(|year: &str| calendar_date(year.to_string(), None, None));

    choice((
        week_extended.then_ignore(end()),
        week_basic.then_ignore(end()),
        calendar_extended.then_ignore(end()),
        ordinal_extended.then_ignore(end()),
        year_month.then_ignore(end()),
        calendar_basic.then_ignore(end()),
        ordinal_basic.then_ignore(end()),
        year.then_ignore(end()),
    ))
}

fn calendar_date(year: String, month: Option<String>, day: Option<String>) -> DateComponents {
    DateComponents { year: Some(year), month, day, ..DateComponents::default() }
}

fn week_date(year: String, week: String, weekday: Option<String>) -> DateComponents {
    DateComponents { year: Some(year), week: Some(week), weekday, ..DateComponents::default() }
}

fn ordinal_date(year: String, day_of_year: String) -> DateComponents {
    DateComponents { year: Some(year), day_of_year: Some(day_of_year), ..DateComponents::default() }
}

/// Scans a date string into its components without validating ranges.
pub(crate) fn tokenize_date(text: &str) -> Result<DateComponents, Error> {
    if text.starts_with('+') || text.starts_with('-') {
        return Err(Error::ExtendedYear(format!(
            "{text:?} uses a signed, expanded year"
        )));
    }
    let components = date_parser()
        .parse(text)
        .into_result()
        .map_err(|errors| format_error(text, "date", errors))?;
    trace!("tokenized date {text:?} into {components:?}");
    Ok(components)
}

/// Parses an ISO 8601 date into a [`time::Date`].
///
/// ```
/// use chumsky_iso8601::date::parse_date;
///
/// let date = parse_date("19").unwrap();
/// assert_eq!((date.year(), date.ordinal()), (1900, 1));
///
/// assert!(parse_date("1981-02-29").is_err());
/// ```
pub fn parse_date<I: AsRef<[u8]>>(input: I) -> Result<Date, Error> {
    parse_date_with(input, &TimeBuilder::new())
}

/// Parses an ISO 8601 date and hands its components to `builder`.
pub fn parse_date_with<I, B>(input: I, builder: &B) -> Result<B::Date, Error>
where
    I: AsRef<[u8]>,
    B: Builder,
{
    let text = as_text(input.as_ref())?;
    builder.build_date(tokenize_date(text)?)
}

/// Reports the finest unit present in a date string without building it.
pub fn get_date_resolution<I: AsRef<[u8]>>(input: I) -> Result<DateResolution, Error> {
    Ok(parse_date_with(input, &ComponentsBuilder)?.resolution())
}
