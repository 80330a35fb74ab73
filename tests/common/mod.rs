use chumsky_iso8601::builder::{Endpoint, IsoDateTime};
use time::PrimitiveDateTime;

/// Wrap a naive date-time as an interval endpoint.
#[allow(dead_code)]
pub fn naive(datetime: PrimitiveDateTime) -> Endpoint {
    Endpoint::DateTime(IsoDateTime { datetime, offset: None })
}

// -------------------------------------------------------------------------------------------------
// Macro helpers used by many test modules so we keep them in a common place.
// -------------------------------------------------------------------------------------------------

/// Assert that parsing `src` with `parse` succeeds and yields `want`.
///
/// Example:
/// ```
/// assert_parses_to!(parse_date, "1981-04-05", date!(1981 - 04 - 05));
/// ```
#[macro_export]
macro_rules! assert_parses_to {
    ($parse:expr, $src:expr, $want:expr $(,)?) => {{
        match $parse($src) {
            Ok(got) => assert_eq!(got, $want, "on input {:?}", $src),
            Err(err) => panic!("unexpected error on input {:?}: {err}", $src),
        }
    }};
}

/// Assert that parsing `src` with `parse` fails with an error matching `pattern`.
#[macro_export]
macro_rules! assert_fails_with {
    ($parse:expr, $src:expr, $pattern:pat $(,)?) => {{
        let got = $parse($src);
        assert!(
            matches!(got, Err($pattern)),
            "expected {} on input {:?}, got {:?}",
            stringify!($pattern),
            $src,
            got
        );
    }};
}
