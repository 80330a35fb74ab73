// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

use std::ops::Range;

/// Every way a parse or build can fail.
///
/// Format problems are reported separately from range problems, and every
/// range problem names the field that was out of bounds. Nothing is retried
/// or recovered internally: the first failure is returned to the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not match any recognised grammar shape.
    #[error("{message}")]
    Format {
        message: String,
        /// Byte range of the offending text in the input, when known.
        span: Option<Range<usize>>,
    },

    /// A duration carried a sign. ISO 8601 durations are unsigned here.
    #[error("negative duration: {0}")]
    NegativeDuration(String),

    /// A date used the `+YYYYY` / `-YYYYY` expanded year representation.
    #[error("extended year representation is not supported: {0}")]
    ExtendedYear(String),

    #[error("year out of bounds: {0}")]
    YearOutOfBounds(String),

    #[error("month out of bounds: {0}")]
    MonthOutOfBounds(String),

    #[error("day out of bounds: {0}")]
    DayOutOfBounds(String),

    #[error("week out of bounds: {0}")]
    WeekOutOfBounds(String),

    #[error("weekday out of bounds: {0}")]
    WeekdayOutOfBounds(String),

    #[error("hours out of bounds: {0}")]
    HoursOutOfBounds(String),

    #[error("minutes out of bounds: {0}")]
    MinutesOutOfBounds(String),

    #[error("seconds out of bounds: {0}")]
    SecondsOutOfBounds(String),

    /// Hour 24 was combined with a non-zero minute, second or fraction.
    #[error("midnight bounds: {0}")]
    MidnightBounds(String),

    /// Second 60 was given but the active limits do not allow leap seconds.
    #[error("leap second: {0}")]
    LeapSecond(String),

    /// Resolving an interval or repetition would leave the representable range.
    #[error("interval out of bounds: {0}")]
    IntervalOutOfBounds(String),

    /// A calendar-aware duration was asked to hold fractional years or months.
    #[error("relative duration: {0}")]
    RelativeValue(String),

    /// The input bytes are not a UTF-8 string.
    #[error("input is not a valid UTF-8 string")]
    NotAString,
}

impl Error {
    /// Creates a format error without a span.
    pub fn format(message: impl Into<String>) -> Self {
        Error::Format { message: message.into(), span: None }
    }

    /// Creates a format error pointing at `span` within the input.
    pub fn format_at(message: impl Into<String>, span: Range<usize>) -> Self {
        Error::Format { message: message.into(), span: Some(span) }
    }

    /// Returns the byte span of the error within the input, if it has one.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Error::Format { span, .. } => span.clone(),
            _ => None,
        }
    }

    /// Returns true for the per-field range errors.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Error::YearOutOfBounds(_)
                | Error::MonthOutOfBounds(_)
                | Error::DayOutOfBounds(_)
                | Error::WeekOutOfBounds(_)
                | Error::WeekdayOutOfBounds(_)
                | Error::HoursOutOfBounds(_)
                | Error::MinutesOutOfBounds(_)
                | Error::SecondsOutOfBounds(_)
        )
    }

    /// Moves a format span forward by `offset` bytes.
    ///
    /// Sub-grammars are scanned on slices of the original input; this maps
    /// their spans back onto it.
    pub(crate) fn shifted(self, offset: usize) -> Self {
        match self {
            Error::Format { message, span } => Error::Format {
                message,
                span: span.map(|s| s.start + offset..s.end + offset),
            },
            other => other,
        }
    }
}
