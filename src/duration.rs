// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Duration Parsing
//!
//! Two notations are accepted:
//!
//! * the designator form `PnYnMnDTnHnMnS` (or `PnW` on its own), where any
//!   unit may be left out but the order is fixed and only the last unit may
//!   carry a fraction;
//! * the alternative form `PYYYY-MM-DDThh:mm:ss`, which reuses the date and
//!   time grammars. Its date part must be a full calendar date, basic or
//!   extended: `P0003-06T12:30` is rejected, as are week and ordinal dates
//!   and a UTC offset on the time.
//!
//! ```
//! use chumsky_iso8601::duration::{get_duration_resolution, parse_duration};
//! use chumsky_iso8601::resolution::DurationResolution;
//!
//! let duration = parse_duration("P1DT1H").unwrap();
//! assert_eq!(duration, time::Duration::hours(25));
//!
//! assert_eq!(get_duration_resolution("P1Y2M").unwrap(), DurationResolution::Months);
//! ```

use crate::builder::{Builder, ComponentsBuilder, TimeBuilder};
use crate::clock::parse_time_with;
use crate::components::DurationComponents;
use crate::date::parse_date_with;
use crate::decimal::normalize;
use crate::resolution::DurationResolution;
use crate::scan::{as_text, decimal_number, format_error, Extra};
use crate::Error;
use chumsky::prelude::*;

const UNIT_LETTERS: [char; 6] = ['Y', 'M', 'D', 'H', 'S', 'W'];

type UnitItems<'a> = Vec<(&'a str, char)>;

/// Creates a parser for the designator form.
///
/// Units are accepted in any order here; ordering and combination rules are
/// checked on the scanned items.
fn designator_parser<'a>() -> impl Parser<'a, &'a str, (UnitItems<'a>, Option<UnitItems<'a>>), Extra<'a>> {
    let date_item = decimal_number().then(one_of("YMWD"));
    let time_item = decimal_number().then(one_of("HMS"));

    just('P')
        .ignore_then(date_item.repeated().collect::<Vec<_>>())
        .then(
            just('T')
                .ignore_then(time_item.repeated().at_least(1).collect::<Vec<_>>())
                .or_not(),
        )
        .then_ignore(end())
}

fn unit_of(letter: char, in_time: bool) -> DurationResolution {
    match (letter, in_time) {
        ('Y', _) => DurationResolution::Years,
        ('M', false) => DurationResolution::Months,
        ('W', _) => DurationResolution::Weeks,
        ('D', _) => DurationResolution::Days,
        ('H', _) => DurationResolution::Hours,
        ('M', true) => DurationResolution::Minutes,
        _ => DurationResolution::Seconds,
    }
}

fn tokenize_designators(text: &str) -> Result<DurationComponents, Error> {
    if text.contains('-') {
        return Err(Error::NegativeDuration(format!(
            "{text:?} is signed, durations must not be negative"
        )));
    }
    if !text.ends_with(&UNIT_LETTERS[..]) {
        let last = text.len().saturating_sub(1);
        return Err(Error::format_at(
            format!("duration {text:?} must end with a unit designator"),
            last..text.len(),
        ));
    }

    let normalized = normalize(text);
    let (date_items, time_items) = designator_parser()
        .parse(&*normalized)
        .into_result()
        .map_err(|errors| format_error(text, "duration", errors))?;

    let items: Vec<(DurationResolution, &str)> = date_items
        .into_iter()
        .map(|(value, letter)| (unit_of(letter, false), value))
        .chain(
            time_items
                .into_iter()
                .flatten()
                .map(|(value, letter)| (unit_of(letter, true), value)),
        )
        .collect();

    if items.len() > 1 && items.iter().any(|(unit, _)| *unit == DurationResolution::Weeks) {
        return Err(Error::format(format!(
            "duration {text:?} combines weeks with other units"
        )));
    }
    if items.windows(2).any(|pair| pair[1].0 <= pair[0].0) {
        return Err(Error::format(format!(
            "duration {text:?} has units out of order or repeated"
        )));
    }
    if items.iter().rev().skip(1).any(|(_, value)| value.contains('.')) {
        return Err(Error::format(format!(
            "duration {text:?} has a fraction on a unit that is not the last"
        )));
    }

    let mut components = DurationComponents::default();
    for (unit, value) in items {
        let slot = match unit {
            DurationResolution::Years => &mut components.years,
            DurationResolution::Months => &mut components.months,
            DurationResolution::Weeks => &mut components.weeks,
            DurationResolution::Days => &mut components.days,
            DurationResolution::Hours => &mut components.hours,
            DurationResolution::Minutes => &mut components.minutes,
            DurationResolution::Seconds => &mut components.seconds,
        };
        *slot = Some(value.to_string());
    }
    Ok(components)
}

fn tokenize_alternative(text: &str) -> Result<DurationComponents, Error> {
    let body = &text[1..];
    let Some((date_text, time_text)) = body.split_once('T') else {
        return Err(Error::format(format!("duration {text:?} is missing its time part")));
    };
    if date_text.starts_with('-') || time_text.starts_with('-') {
        return Err(Error::NegativeDuration(format!(
            "{text:?} is signed, durations must not be negative"
        )));
    }
    if date_text.starts_with('+') {
        return Err(Error::format(format!("duration {text:?} must not carry a sign")));
    }

    let date = parse_date_with(date_text, &ComponentsBuilder).map_err(|err| err.shifted(1))?;
    if date.month.is_none() || date.day.is_none() {
        return Err(Error::format(format!(
            "duration {text:?} must use a full calendar date for its date part"
        )));
    }
    let time = parse_time_with(time_text, &ComponentsBuilder)
        .map_err(|err| err.shifted(text.len() - time_text.len()))?;
    if time.timezone.is_some() {
        return Err(Error::format(format!("duration {text:?} must not carry a UTC offset")));
    }

    Ok(DurationComponents {
        years: date.year,
        months: date.month,
        weeks: None,
        days: date.day,
        hours: time.hour,
        minutes: time.minute,
        seconds: time.second,
    })
}

/// Scans either duration notation into its components.
pub(crate) fn tokenize_duration(text: &str) -> Result<DurationComponents, Error> {
    let Some(body) = text.strip_prefix('P') else {
        return Err(Error::format_at(
            format!("duration {text:?} must start with P"),
            0..text.len().min(1),
        ));
    };
    let components = if body.contains(&UNIT_LETTERS[..]) {
        tokenize_designators(text)?
    } else if body.contains('T') {
        tokenize_alternative(text)?
    } else {
        return Err(Error::format(format!("{text:?} is not a valid ISO 8601 duration")));
    };
    trace!("tokenized duration {text:?} into {components:?}");
    Ok(components)
}

/// Parses a duration into a [`time::Duration`].
///
/// Years count as 365 days and months as 30 days. Use
/// [`RelativeTimeBuilder`](crate::builder::RelativeTimeBuilder) to keep them
/// calendar-aware instead.
pub fn parse_duration<I: AsRef<[u8]>>(input: I) -> Result<time::Duration, Error> {
    parse_duration_with(input, &TimeBuilder::new())
}

pub fn parse_duration_with<I, B>(input: I, builder: &B) -> Result<B::Duration, Error>
where
    I: AsRef<[u8]>,
    B: Builder,
{
    let text = as_text(input.as_ref())?;
    builder.build_duration(tokenize_duration(text)?)
}

/// Reports the lowest-order unit present in a duration.
pub fn get_duration_resolution<I: AsRef<[u8]>>(input: I) -> Result<DurationResolution, Error> {
    Ok(parse_duration_with(input, &ComponentsBuilder)?.resolution())
}
