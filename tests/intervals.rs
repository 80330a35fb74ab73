use chumsky_iso8601::builder::{
    ComponentsBuilder, Endpoint, Interval, IsoDateTime, RelativeTimeBuilder, TimeBuilder,
};
use chumsky_iso8601::components::{DateComponents, EndpointComponents};
use chumsky_iso8601::resolution::IntervalResolution;
use chumsky_iso8601::{
    get_interval_resolution, get_repeating_interval_resolution, parse_interval,
    parse_interval_with, parse_repeating_interval, parse_repeating_interval_with, Delimiters,
    Error,
};
use rstest::rstest;
use time::macros::{date, datetime, offset};
mod common;
use common::naive;

fn repeated(input: &str) -> Result<Vec<Endpoint>, Error> {
    parse_repeating_interval(input)?.collect()
}

#[rstest]
#[case("2020-01-01/2020-01-05", date!(2020 - 01 - 01), date!(2020 - 01 - 05))]
#[case("2008-02-15/03-14", date!(2008 - 02 - 15), date!(2008 - 03 - 14))]
#[case("2008-02-15/0314", date!(2008 - 02 - 15), date!(2008 - 03 - 14))]
#[case("2020-01-01/02", date!(2020 - 01 - 01), date!(2020 - 01 - 02))]
#[case("2020-01-01/P1D", date!(2020 - 01 - 01), date!(2020 - 01 - 02))]
#[case("P1D/2020-01-02", date!(2020 - 01 - 01), date!(2020 - 01 - 02))]
#[case("2020-01-31/P1M", date!(2020 - 01 - 31), date!(2020 - 03 - 01))]
#[case("2020-01/15", date!(2020 - 01 - 01), date!(2020 - 01 - 15))]
#[case("2020/03-14", date!(2020 - 01 - 01), date!(2020 - 03 - 14))]
fn date_intervals(#[case] input: &str, #[case] start: time::Date, #[case] end: time::Date) {
    assert_parses_to!(
        parse_interval,
        input,
        Interval { start: Endpoint::Date(start), end: Endpoint::Date(end) }
    );
}

#[test]
fn datetime_intervals() {
    assert_parses_to!(
        parse_interval,
        "2007-12-14T13:30/15:30",
        Interval {
            start: naive(datetime!(2007-12-14 13:30)),
            end: naive(datetime!(2007-12-14 15:30)),
        }
    );
    assert_parses_to!(
        parse_interval,
        "2007-11-13T09:00/15T17:00",
        Interval {
            start: naive(datetime!(2007-11-13 9:00)),
            end: naive(datetime!(2007-11-15 17:00)),
        }
    );
    assert_parses_to!(
        parse_interval,
        "2020-01-01/PT1H",
        Interval {
            start: Endpoint::Date(date!(2020 - 01 - 01)),
            end: naive(datetime!(2020-01-01 1:00)),
        }
    );
}

#[test]
fn concise_end_inherits_the_offset() {
    let interval = parse_interval("2007-12-14T13:30+01:00/15:30").unwrap();
    assert_eq!(interval.end.offset(), Some(offset!(+1)));
    assert_eq!(
        interval.end,
        Endpoint::DateTime(IsoDateTime {
            datetime: datetime!(2007-12-14 15:30),
            offset: Some(offset!(+1)),
        })
    );

    let interval = parse_interval("2007-12-14T13:30Z/15:30-02:00").unwrap();
    assert_eq!(interval.end.offset(), Some(offset!(-2)));
}

#[rstest]
#[case("2020-01-01")]
#[case("2020-01-01/")]
#[case("/2020-01-01")]
#[case("P1D/P1D")]
#[case("2020-01-01/2020-01-02/2020-01-03")]
#[case("R2/2020-01-01/P1D")]
#[case("2020-W01-1/02")]
#[case("2020-01-01T10:00/P1X")]
#[case("2020-01-01/2021-02")]
#[case("2020-01-01/2021-032")]
#[case("2020-01-01/2021-W05")]
#[case("2020-W01/15")]
fn interval_format_errors(#[case] input: &str) {
    assert_fails_with!(parse_interval, input, Error::Format { .. });
}

#[test]
fn interval_range_errors() {
    assert_fails_with!(parse_interval, "9999-12-31/P1D", Error::IntervalOutOfBounds(_));
    assert_fails_with!(parse_interval, "2020-01-01/2020-13-01", Error::MonthOutOfBounds(_));
    assert_fails_with!(parse_interval, "2020-02-01/30", Error::DayOutOfBounds(_));
}

#[test]
fn concise_ends_stay_concise_in_components() {
    let components =
        parse_interval_with("2020-01-01/02", &Delimiters::default(), &ComponentsBuilder).unwrap();
    assert_eq!(
        components.end,
        Some(EndpointComponents::Date(DateComponents {
            day: Some("02".to_string()),
            ..DateComponents::default()
        }))
    );
    assert!(components.duration.is_none());
}

#[test]
fn custom_delimiters() {
    let delimiters = Delimiters::new().interval('~').datetime(' ');
    let interval = parse_interval_with("2020-01-01 10:00~12:00", &delimiters, &TimeBuilder::new()).unwrap();
    assert_eq!(interval.start, naive(datetime!(2020-01-01 10:00)));
    assert_eq!(interval.end, naive(datetime!(2020-01-01 12:00)));
}

#[test]
fn relative_durations_follow_the_calendar() {
    let builder = RelativeTimeBuilder::default();
    let interval = parse_interval_with("2020-01-31/P1M", &Delimiters::default(), &builder).unwrap();
    assert_eq!(interval.end, Endpoint::Date(date!(2020 - 02 - 29)));
    let interval = parse_interval_with("P1Y/2021-02-28", &Delimiters::default(), &builder).unwrap();
    assert_eq!(interval.start, Endpoint::Date(date!(2020 - 02 - 28)));
}

#[test]
fn bounded_repetitions() {
    assert_parses_to!(
        repeated,
        "R3/1981-04-05/P1D",
        vec![
            Endpoint::Date(date!(1981 - 04 - 05)),
            Endpoint::Date(date!(1981 - 04 - 06)),
            Endpoint::Date(date!(1981 - 04 - 07)),
        ]
    );
    assert_parses_to!(
        repeated,
        "R2/2020-01-03/2020-01-05",
        vec![Endpoint::Date(date!(2020 - 01 - 03)), Endpoint::Date(date!(2020 - 01 - 05))]
    );
    assert_parses_to!(
        repeated,
        "R3/P1D/2020-01-03",
        vec![
            Endpoint::Date(date!(2020 - 01 - 03)),
            Endpoint::Date(date!(2020 - 01 - 02)),
            Endpoint::Date(date!(2020 - 01 - 01)),
        ]
    );

    assert_eq!(parse_repeating_interval("R0/2020-01-01/P1D").unwrap().count(), 0);
}

#[test]
fn unbounded_repetitions() {
    let values = parse_repeating_interval("R/2020-01-01T23:00Z/PT2H").unwrap();
    assert!(!values.is_bounded());
    let values: Vec<_> = values.take(2).collect();
    assert_eq!(
        values[1],
        Ok(Endpoint::DateTime(IsoDateTime {
            datetime: datetime!(2020-01-02 1:00),
            offset: Some(time::UtcOffset::UTC),
        }))
    );
}

#[rstest]
#[case("R5/9999-12-30/P1D")]
#[case("R/9999-12-30/P1D")]
fn repetitions_past_the_range_edge(#[case] input: &str) {
    let values: Vec<_> = parse_repeating_interval(input).unwrap().collect();
    let (last, rest) = values.split_last().unwrap();
    assert!(matches!(last, Err(Error::IntervalOutOfBounds(_))), "{values:?}");
    assert!(rest.iter().all(Result::is_ok), "{values:?}");
}

#[test]
fn relative_repetitions() {
    let values: Vec<_> = parse_repeating_interval_with(
        "R3/2020-01-31/P1M",
        &Delimiters::default(),
        &RelativeTimeBuilder::default(),
    )
    .unwrap()
    .collect();
    assert_eq!(values[1], Ok(Endpoint::Date(date!(2020 - 02 - 29))));
}

#[rstest]
#[case("R/P1D")]
#[case("Rx/2020-01-01/P1D")]
#[case("2020-01-01/P1D")]
#[case("R2")]
fn repeating_format_errors(#[case] input: &str) {
    assert_fails_with!(parse_repeating_interval, input, Error::Format { .. });
}

#[rstest]
#[case("2020-01/P1M", IntervalResolution::Month)]
#[case("2020-01-01/P1D", IntervalResolution::Day)]
#[case("2020-01-01T10/P1D", IntervalResolution::Hours)]
#[case("2007-12-14T13:30/15:30", IntervalResolution::Minutes)]
#[case("2020-01-01/PT1S", IntervalResolution::Seconds)]
fn interval_resolutions(#[case] input: &str, #[case] expected: IntervalResolution) {
    assert_eq!(get_interval_resolution(input, &Delimiters::default()), Ok(expected));
}

#[test]
fn repeating_interval_resolution() {
    assert_eq!(
        get_repeating_interval_resolution("R5/2020-01-01/PT1M", &Delimiters::default()),
        Ok(IntervalResolution::Minutes)
    );
}
