// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! UTC offsets: `Z`, `±hh`, `±hhmm` and `±hh:mm`.

use crate::builder::{Builder, TimeBuilder};
use crate::components::TimezoneComponents;
use crate::scan::{as_text, digits, format_error, Extra};
use crate::Error;
use chumsky::prelude::*;
use time::UtcOffset;

/// Creates a parser for a complete UTC offset designator.
///
/// The `designator` field is left empty; callers fill it with the raw text.
pub fn timezone_parser<'a>() -> impl Parser<'a, &'a str, TimezoneComponents, Extra<'a>> {
    let utc = just('Z').to(TimezoneComponents { is_utc: true, ..TimezoneComponents::default() });

    let sign = choice((just('+').to(false), just('-').to(true)));
    let offset = sign
        .then(digits(2))
        .then(just(':').or_not().ignore_then(digits(2)).or_not())
        .try_map(|((negative, hour), minute), span| {
            let zero = hour == "00" && minute.as_deref().map_or(true, |minute| minute == "00");
            if negative && zero {
                return Err(Rich::custom(span, "a zero UTC offset must be written with +"));
            }
            Ok(TimezoneComponents {
                negative,
                is_utc: false,
                hour: Some(hour),
                minute,
                designator: String::new(),
            })
        });

    choice((utc, offset)).then_ignore(end())
}

pub(crate) fn tokenize_timezone(text: &str) -> Result<TimezoneComponents, Error> {
    let mut components = timezone_parser()
        .parse(text)
        .into_result()
        .map_err(|errors| format_error(text, "UTC offset", errors))?;
    components.designator = text.to_string();
    trace!("tokenized UTC offset {text:?} into {components:?}");
    Ok(components)
}

/// Parses a UTC offset such as `Z` or `-05:30`.
///
/// ```
/// use chumsky_iso8601::timezone::parse_timezone;
/// use time::UtcOffset;
///
/// assert_eq!(parse_timezone("+05:30").unwrap(), UtcOffset::from_hms(5, 30, 0).unwrap());
/// assert_eq!(parse_timezone("Z").unwrap(), UtcOffset::UTC);
/// assert!(parse_timezone("-00:00").is_err());
/// ```
pub fn parse_timezone<I: AsRef<[u8]>>(input: I) -> Result<UtcOffset, Error> {
    parse_timezone_with(input, &TimeBuilder::new())
}

pub fn parse_timezone_with<I, B>(input: I, builder: &B) -> Result<B::Timezone, Error>
where
    I: AsRef<[u8]>,
    B: Builder,
{
    let text = as_text(input.as_ref())?;
    builder.build_timezone(tokenize_timezone(text)?)
}
