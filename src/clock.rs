// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Time of Day and Combined Date-Time Parsing
//!
//! Times come in extended (`hh:mm:ss`) or basic (`hhmmss`) form and may be
//! truncated to `hh:mm` or `hh`. The lowest present field may carry a decimal
//! fraction (`14.5`, `14:30,25`), and a UTC offset may follow.
//!
//! ```
//! use chumsky_iso8601::clock::{parse_datetime, parse_time};
//!
//! let time = parse_time("14.9999999999999999").unwrap();
//! assert_eq!(time.time, time::Time::from_hms_micro(14, 59, 59, 999_999).unwrap());
//!
//! let datetime = parse_datetime("1981-04-05T23:21:28+02:00").unwrap();
//! assert_eq!(datetime.datetime.hour(), 23);
//! assert_eq!(datetime.offset.map(|offset| offset.whole_hours()), Some(2));
//! ```

use crate::builder::{Builder, ComponentsBuilder, IsoDateTime, IsoTime, TimeBuilder};
use crate::components::{DateTimeComponents, TimeComponents};
use crate::date::tokenize_date;
use crate::decimal::normalize;
use crate::resolution::TimeResolution;
use crate::scan::{as_text, digit, digits, format_error, Extra};
use crate::timezone::tokenize_timezone;
use crate::Error;
use chumsky::prelude::*;

/// The default separator between the date and the time.
pub const DATETIME_DELIMITER: char = 'T';

type ClockFields = (String, Option<String>, Option<String>);

/// Creates a parser for the clock part of a time, without any UTC offset.
///
/// Expects `,` to have been normalised to `.` already.
fn clock_parser<'a>() -> impl Parser<'a, &'a str, ClockFields, Extra<'a>> {
    let extended = digits(2)
        .then_ignore(just(':'))
        .then(digits(2))
        .then(just(':').ignore_then(digits(2)).or_not())
        .map(|((hour, minute), second)| (hour, Some(minute), second));

    let basic = digits(2)
        .then(digits(2).then(digits(2).or_not()).or_not())
        .map(|(hour, rest)| match rest {
            Some((minute, second)) => (hour, Some(minute), second),
            None => (hour, None, None),
        });

    let fraction = just('.').ignore_then(digit().repeated().at_least(1).to_slice());

    choice((extended, basic))
        .then(fraction.or_not())
        .then_ignore(end())
        .map(|((hour, minute, second), fraction): (ClockFields, Option<&str>)| {
            let Some(fraction) = fraction else {
                return (hour, minute, second);
            };
            let attach = |field: String| format!("{field}.{fraction}");
            match (minute, second) {
                (minute, Some(second)) => (hour, minute, Some(attach(second))),
                (Some(minute), None) => (hour, Some(attach(minute)), None),
                (None, None) => (attach(hour), None, None),
            }
        })
}

/// Scans a time of day, with an optional trailing UTC offset.
pub(crate) fn tokenize_time(text: &str) -> Result<TimeComponents, Error> {
    let normalized = normalize(text);
    let split = normalized
        .char_indices()
        .skip(1)
        .find(|(_, c)| matches!(c, 'Z' | '+' | '-'))
        .map(|(index, _)| index);
    let (clock, zone) = match split {
        Some(index) => (&normalized[..index], Some(&normalized[index..])),
        None => (&*normalized, None),
    };

    let (hour, minute, second) = clock_parser()
        .parse(clock)
        .into_result()
        .map_err(|errors| format_error(text, "time", errors))?;
    let timezone = zone
        .map(|zone| tokenize_timezone(zone).map_err(|err| err.shifted(clock.len())))
        .transpose()?;

    let components = TimeComponents { hour: Some(hour), minute, second, timezone };
    trace!("tokenized time {text:?} into {components:?}");
    Ok(components)
}

/// Scans `date<delimiter>time`.
pub(crate) fn tokenize_datetime(text: &str, delimiter: char) -> Result<DateTimeComponents, Error> {
    let Some((date, time)) = text.split_once(delimiter) else {
        return Err(Error::format(format!(
            "{text:?} is missing the date-time delimiter {delimiter:?}"
        )));
    };
    let date = tokenize_date(date)?;
    let offset = text.len() - time.len();
    let time = tokenize_time(time).map_err(|err| err.shifted(offset))?;
    Ok(DateTimeComponents { date, time })
}

/// Parses a time of day, truncating any fraction to microseconds.
///
/// `24:00:00` (and any truncation of it) is midnight.
pub fn parse_time<I: AsRef<[u8]>>(input: I) -> Result<IsoTime, Error> {
    parse_time_with(input, &TimeBuilder::new())
}

pub fn parse_time_with<I, B>(input: I, builder: &B) -> Result<B::Time, Error>
where
    I: AsRef<[u8]>,
    B: Builder,
{
    let text = as_text(input.as_ref())?;
    builder.build_time(tokenize_time(text)?)
}

/// Parses a combined date and time separated by `T`.
///
/// An hour of 24 rolls the date over to the following day.
pub fn parse_datetime<I: AsRef<[u8]>>(input: I) -> Result<IsoDateTime, Error> {
    parse_datetime_with(input, DATETIME_DELIMITER, &TimeBuilder::new())
}

/// Parses a combined date and time separated by `delimiter`.
pub fn parse_datetime_with<I, B>(input: I, delimiter: char, builder: &B) -> Result<B::DateTime, Error>
where
    I: AsRef<[u8]>,
    B: Builder,
{
    let text = as_text(input.as_ref())?;
    let DateTimeComponents { date, time } = tokenize_datetime(text, delimiter)?;
    builder.build_datetime(date, time)
}

pub fn get_time_resolution<I: AsRef<[u8]>>(input: I) -> Result<TimeResolution, Error> {
    Ok(parse_time_with(input, &ComponentsBuilder)?.resolution())
}

/// The resolution of a combined date-time is that of its time part.
pub fn get_datetime_resolution<I: AsRef<[u8]>>(
    input: I,
    delimiter: char,
) -> Result<TimeResolution, Error> {
    Ok(parse_datetime_with(input, delimiter, &ComponentsBuilder)?.time.resolution())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::RangeLimits;
    use proptest::prelude::*;
    use test_case::test_case;
    use time::{Month, Time, UtcOffset};

    fn hms_micro(hour: u8, minute: u8, second: u8, micro: u32) -> Time {
        Time::from_hms_micro(hour, minute, second, micro).unwrap()
    }

    #[test_case("23:21:28", None, Some("21"), Some("28") ; "extended")]
    #[test_case("232128", None, Some("21"), Some("28") ; "basic")]
    #[test_case("23:21", None, Some("21"), None ; "extended minutes")]
    #[test_case("2321", None, Some("21"), None ; "basic minutes")]
    #[test_case("23", None, None, None ; "hours")]
    #[test_case("23:21:28.512400", None, Some("21"), Some("28.512400") ; "fractional seconds")]
    #[test_case("23:21,5", None, Some("21.5"), None ; "fractional minutes")]
    #[test_case("23.5", Some("23.5"), None, None ; "fractional hours")]
    fn tokenizes(input: &str, hour: Option<&str>, minute: Option<&str>, second: Option<&str>) {
        let components = parse_time_with(input, &ComponentsBuilder).unwrap();
        assert_eq!(components.hour.as_deref(), hour.or(Some("23")));
        assert_eq!(components.minute.as_deref(), minute);
        assert_eq!(components.second.as_deref(), second);
        assert_eq!(components.timezone, None);
    }

    #[test_case("" ; "empty")]
    #[test_case("2" ; "single digit")]
    #[test_case("23:2128" ; "mixed forms")]
    #[test_case("2321:28" ; "mixed forms reversed")]
    #[test_case("23:21:" ; "dangling colon")]
    #[test_case("23." ; "dangling mark")]
    #[test_case("23:21:28.5.1" ; "two marks")]
    #[test_case("23:21:28+" ; "dangling sign")]
    #[test_case("T23:21" ; "leading delimiter")]
    fn rejects_malformed(input: &str) {
        assert!(
            matches!(parse_time(input), Err(Error::Format { .. })),
            "expected format error for {input:?}"
        );
    }

    #[test]
    fn builds_times() {
        assert_eq!(parse_time("23:21:28.512400").unwrap().time, hms_micro(23, 21, 28, 512_400));
        assert_eq!(parse_time("1430").unwrap().time, hms_micro(14, 30, 0, 0));
        assert_eq!(parse_time("14:30.5").unwrap().time, hms_micro(14, 30, 30, 0));
        assert_eq!(parse_time("14,25").unwrap().time, hms_micro(14, 15, 0, 0));
    }

    #[test]
    fn fractions_truncate_to_microseconds() {
        let time = parse_time("14.9999999999999999").unwrap().time;
        assert_eq!(time, hms_micro(14, 59, 59, 999_999));
        let time = parse_time("00:00:00.0000019").unwrap().time;
        assert_eq!(time, hms_micro(0, 0, 0, 1));
    }

    #[test]
    fn hour_24_is_midnight() {
        assert_eq!(parse_time("24:00:00").unwrap().time, Time::MIDNIGHT);
        assert_eq!(parse_time("24").unwrap().time, Time::MIDNIGHT);
        assert_eq!(parse_time("2400").unwrap().time, Time::MIDNIGHT);
        assert!(matches!(parse_time("24:00:01"), Err(Error::MidnightBounds(_))));
        assert!(matches!(parse_time("24:01"), Err(Error::MidnightBounds(_))));
        assert!(matches!(parse_time("24.1"), Err(Error::MidnightBounds(_))));
    }

    #[test]
    fn range_errors() {
        assert!(matches!(parse_time("25"), Err(Error::HoursOutOfBounds(_))));
        assert!(matches!(parse_time("12:60"), Err(Error::MinutesOutOfBounds(_))));
        assert!(matches!(parse_time("12:30:61"), Err(Error::SecondsOutOfBounds(_))));
    }

    #[test]
    fn leap_seconds() {
        assert!(matches!(parse_time("23:59:60"), Err(Error::LeapSecond(_))));

        let builder = TimeBuilder::new().with_limits(RangeLimits::new().leap_seconds(true));
        let time = parse_time_with("23:59:60", &builder).unwrap().time;
        assert_eq!(time, hms_micro(23, 59, 59, 0));
        let time = parse_time_with("23:59:60.25", &builder).unwrap().time;
        assert_eq!(time, hms_micro(23, 59, 59, 250_000));
        assert!(matches!(
            parse_time_with("12:30:60", &builder),
            Err(Error::SecondsOutOfBounds(_))
        ));
    }

    #[test]
    fn offsets() {
        let time = parse_time("23:21:28Z").unwrap();
        assert_eq!(time.offset, Some(UtcOffset::UTC));
        let time = parse_time("232128-0530").unwrap();
        assert_eq!(time.offset, Some(UtcOffset::from_hms(-5, -30, 0).unwrap()));
        assert!(matches!(parse_time("23:21:28-00:00"), Err(Error::Format { .. })));
        assert_eq!(parse_time("23:21").unwrap().offset, None);
    }

    #[test]
    fn offset_error_span_points_into_input() {
        let err = parse_time("23:21:28+0x").unwrap_err();
        let span = err.span().unwrap();
        assert!(span.start >= 8, "span {span:?} should point at the offset");
    }

    #[test]
    fn datetimes() {
        let value = parse_datetime("1981-04-05T23:21:28.512400Z").unwrap();
        assert_eq!(value.datetime.date().month(), Month::April);
        assert_eq!(value.datetime.time(), hms_micro(23, 21, 28, 512_400));
        assert_eq!(value.offset, Some(UtcOffset::UTC));

        let value = parse_datetime_with("1981-095 23:21", ' ', &TimeBuilder::new()).unwrap();
        assert_eq!(value.datetime.date().ordinal(), 95);

        assert!(matches!(parse_datetime("1981-04-05 23:21"), Err(Error::Format { .. })));
    }

    #[test]
    fn datetime_hour_24_rolls_over() {
        let value = parse_datetime("1981-04-05T24:00").unwrap();
        assert_eq!(value.datetime.date().day(), 6);
        assert_eq!(value.datetime.time(), Time::MIDNIGHT);
        assert!(matches!(parse_datetime("9999-12-31T24:00"), Err(Error::YearOutOfBounds(_))));
    }

    #[test]
    fn resolutions() {
        assert_eq!(get_time_resolution("23"), Ok(TimeResolution::Hours));
        assert_eq!(get_time_resolution("2321.5"), Ok(TimeResolution::Minutes));
        assert_eq!(get_time_resolution("23:21:28Z"), Ok(TimeResolution::Seconds));
        assert_eq!(get_datetime_resolution("1981-04-05T23:21", 'T'), Ok(TimeResolution::Minutes));
    }

    proptest! {
        #[test]
        fn prop_basic_and_extended_agree(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
            let extended = parse_time(format!("{h:02}:{m:02}:{s:02}")).unwrap();
            let basic = parse_time(format!("{h:02}{m:02}{s:02}")).unwrap();
            prop_assert_eq!(extended, basic);
            prop_assert_eq!(extended.time, Time::from_hms(h, m, s).unwrap());
        }

        #[test]
        fn prop_fraction_never_rounds_up(h in 0u8..24, frac in "[0-9]{1,20}") {
            let time = parse_time(format!("{h:02}.{frac}")).unwrap().time;
            prop_assert_eq!(time.hour(), h);
        }
    }
}
