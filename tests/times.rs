use chumsky_iso8601::builder::{IsoTime, TimeBuilder};
use chumsky_iso8601::limits::RangeLimits;
use chumsky_iso8601::resolution::TimeResolution;
use chumsky_iso8601::{
    get_datetime_resolution, get_time_resolution, parse_datetime, parse_datetime_with, parse_time,
    parse_time_with, parse_timezone, Error,
};
use rstest::rstest;
use time::macros::{datetime, offset, time};
use time::{Time, UtcOffset};
mod common;

fn local(time: Time) -> IsoTime {
    IsoTime { time, offset: None }
}

#[rstest]
#[case("01:23:45", time!(1:23:45))]
#[case("012345", time!(1:23:45))]
#[case("01:23", time!(1:23))]
#[case("0123", time!(1:23))]
#[case("01", time!(1:00))]
#[case("01:23:45.678901", time!(1:23:45.678901))]
#[case("01:23:45,678901", time!(1:23:45.678901))]
#[case("01:23.5", time!(1:23:30))]
#[case("01.5", time!(1:30))]
#[case("14.9999999999999999", time!(14:59:59.999999))]
#[case("235959.9999999", time!(23:59:59.999999))]
#[case("24:00:00", time!(0:00))]
#[case("24:00", time!(0:00))]
#[case("24", time!(0:00))]
#[case("24:00:00.000", time!(0:00))]
fn parses_times(#[case] input: &str, #[case] expected: Time) {
    assert_parses_to!(parse_time, input, local(expected));
}

#[rstest]
#[case("24:00:01")]
#[case("24:01")]
#[case("24:00:00.1")]
#[case("2400.5")]
fn midnight_bounds(#[case] input: &str) {
    assert_fails_with!(parse_time, input, Error::MidnightBounds(_));
}

#[rstest]
#[case("25", "hours")]
#[case("12:60", "minutes")]
#[case("12:30:61", "seconds")]
fn range_errors_name_the_field(#[case] input: &str, #[case] field: &str) {
    let err = parse_time(input).unwrap_err();
    assert!(err.is_range_error());
    assert!(err.to_string().starts_with(field), "{err}");
}

#[test]
fn leap_second_policy() {
    assert_fails_with!(parse_time, "23:59:60", Error::LeapSecond(_));
    assert_fails_with!(parse_time, "235960", Error::LeapSecond(_));

    let builder = TimeBuilder::new().with_limits(RangeLimits::new().leap_seconds(true));
    let parse = |input: &str| parse_time_with(input, &builder);
    assert_parses_to!(parse, "23:59:60", local(time!(23:59:59)));
    assert_fails_with!(parse, "12:59:60", Error::SecondsOutOfBounds(_));
    assert_fails_with!(parse, "23:58:60", Error::SecondsOutOfBounds(_));
}

#[rstest]
#[case("Z", UtcOffset::UTC)]
#[case("+00:00", UtcOffset::UTC)]
#[case("+01", offset!(+1))]
#[case("+0130", offset!(+1:30))]
#[case("-12:00", offset!(-12))]
fn parses_offsets(#[case] input: &str, #[case] expected: UtcOffset) {
    assert_parses_to!(parse_timezone, input, expected);
}

#[rstest]
#[case("-00:00")]
#[case("-0000")]
#[case("-00")]
#[case("+1")]
#[case("+01:")]
fn offset_format_errors(#[case] input: &str) {
    assert_fails_with!(parse_timezone, input, Error::Format { .. });
}

#[test]
fn times_with_offsets() {
    let value = parse_time("01:23:45+05:30").unwrap();
    assert_eq!(value, IsoTime { time: time!(1:23:45), offset: Some(offset!(+5:30)) });
    let value = parse_time("0123-03").unwrap();
    assert_eq!(value.offset, Some(offset!(-3)));
}

#[test]
fn datetimes() {
    let value = parse_datetime("1981-04-05T23:21:28.512400Z").unwrap();
    assert_eq!(value.datetime, datetime!(1981-04-05 23:21:28.512400));
    assert_eq!(value.to_offset_datetime(), Some(datetime!(1981-04-05 23:21:28.512400 UTC)));

    let value = parse_datetime("1981W147T0000").unwrap();
    assert_eq!(value.datetime, datetime!(1981-04-05 0:00));

    let value = parse_datetime_with("1981-095 23:21", ' ', &TimeBuilder::new()).unwrap();
    assert_eq!(value.datetime, datetime!(1981-04-05 23:21));
}

#[test]
fn datetime_hour_24_rolls_into_next_day() {
    let value = parse_datetime("1981-12-31T24:00:00").unwrap();
    assert_eq!(value.datetime, datetime!(1982-01-01 0:00));
}

#[rstest]
#[case("1981-04-05")]
#[case("1981-04-05 23:21")]
#[case("1981-04-05T")]
#[case("T23:21")]
fn datetime_format_errors(#[case] input: &str) {
    assert_fails_with!(parse_datetime, input, Error::Format { .. });
}

#[test]
fn resolutions() {
    assert_eq!(get_time_resolution("01"), Ok(TimeResolution::Hours));
    assert_eq!(get_time_resolution("01:23"), Ok(TimeResolution::Minutes));
    assert_eq!(get_time_resolution("01:23:45.5+01"), Ok(TimeResolution::Seconds));
    assert_eq!(get_datetime_resolution("1981-04-05T01", 'T'), Ok(TimeResolution::Hours));
    assert_eq!(get_datetime_resolution("1981-04-05 0123", ' '), Ok(TimeResolution::Minutes));
}
