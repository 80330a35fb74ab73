// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Small combinators shared by the tokenizers, plus the conversion from
//! chumsky's [`Rich`] errors into [`Error::Format`].

use crate::Error;
use chumsky::{error::Rich, extra, prelude::*};

/// The parser extra used by every tokenizer in this crate.
pub(crate) type Extra<'a> = extra::Err<Rich<'a, char>>;

/// A single ASCII digit.
pub(crate) fn digit<'a>() -> impl Parser<'a, &'a str, char, Extra<'a>> {
    any().filter(|c: &char| c.is_ascii_digit()).labelled("digit")
}

/// Exactly `count` ASCII digits, returned as an owned string.
pub(crate) fn digits<'a>(count: usize) -> impl Parser<'a, &'a str, String, Extra<'a>> {
    digit().repeated().exactly(count).to_slice().map(|s: &str| s.to_string())
}

/// One or more digits with an optional `.` fraction, returned as a slice.
///
/// Callers normalise `,` to `.` before scanning.
pub(crate) fn decimal_number<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> {
    digit()
        .repeated()
        .at_least(1)
        .then(just('.').then(digit().repeated().at_least(1)).or_not())
        .to_slice()
        .labelled("number")
}

/// Interprets entry point input as text.
///
/// Entry points accept raw bytes so that the "not a string" failure is a
/// value rather than a type error.
pub(crate) fn as_text(input: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(input).map_err(|_| Error::NotAString)
}

/// Folds the errors of a failed combinator parse into a single format error.
///
/// The message names the whole input and the grammar that was expected; the
/// span is taken from the first chumsky error.
pub(crate) fn format_error(input: &str, grammar: &str, errors: Vec<Rich<'_, char>>) -> Error {
    match errors.into_iter().next() {
        Some(err) => {
            let span = err.span();
            Error::format_at(
                format!("{input:?} is not a valid ISO 8601 {grammar}: {err}"),
                span.start..span.end,
            )
        }
        None => Error::format(format!("{input:?} is not a valid ISO 8601 {grammar}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_take_exact_count() {
        let parser = digits(2).then_ignore(end());
        assert_eq!(parser.parse("12").into_result(), Ok("12".to_string()));
        assert!(parser.parse("1").has_errors());
        assert!(parser.parse("123").has_errors());
        assert!(parser.parse("1a").has_errors());
    }

    #[test]
    fn decimal_number_keeps_fraction() {
        let parser = decimal_number().then_ignore(end());
        assert_eq!(parser.parse("12.50").into_result(), Ok("12.50"));
        assert_eq!(parser.parse("7").into_result(), Ok("7"));
        assert!(parser.parse("7.").has_errors());
        assert!(parser.parse(".5").has_errors());
    }

    #[test]
    fn invalid_utf8_is_not_a_string() {
        assert_eq!(as_text(&[0xff, 0xfe]), Err(Error::NotAString));
        assert_eq!(as_text(b"2024"), Ok("2024"));
    }

    #[test]
    fn format_error_carries_span() {
        let errors = digits(4).then_ignore(end()).parse("20x4").into_errors();
        let err = format_error("20x4", "date", errors);
        assert_eq!(err.span().map(|span| span.start), Some(2));
        assert!(err.to_string().contains("\"20x4\""));
    }
}
