// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Human readable reports for parse failures.
//!
//! ```
//! use chumsky_iso8601::date::parse_date;
//! use chumsky_iso8601::diagnostic::render_report;
//!
//! let input = "1981-04-3x";
//! let err = parse_date(input).unwrap_err();
//! let report = render_report(input, &err);
//! assert!(report.contains("1981-04-3x"));
//! ```

use crate::Error;
use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use std::ops::Range;

/// The part of `input` an error refers to.
///
/// Format errors carry their own span; everything else covers the whole
/// input.
pub fn error_span(input: &str, error: &Error) -> Range<usize> {
    match error.span() {
        Some(span) => {
            let start = span.start.min(input.len());
            start..span.end.clamp(start, input.len())
        }
        None => 0..input.len(),
    }
}

/// Renders `error` against the `input` it came from as a plain text report.
pub fn render_report(input: &str, error: &Error) -> String {
    if input.is_empty() {
        return format!("Error: {error}");
    }
    let span = error_span(input, error);
    let label = if error.span().is_some() { "not expected here" } else { "in this value" };

    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, span.clone())
        .with_config(Config::default().with_color(false).with_index_type(IndexType::Byte))
        .with_message(error.to_string())
        .with_label(Label::new(span).with_message(label))
        .finish()
        .write(Source::from(input), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("Error: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::parse_time;
    use crate::date::parse_date;

    #[test]
    fn range_errors_cover_the_input() {
        let input = "1981-13-01";
        let err = parse_date(input).unwrap_err();
        assert_eq!(error_span(input, &err), 0..10);
        let report = render_report(input, &err);
        assert!(report.contains("month out of bounds"), "{report}");
        assert!(report.contains(input), "{report}");
    }

    #[test]
    fn format_errors_point_at_the_span() {
        let input = "23:21:28+0x";
        let err = parse_time(input).unwrap_err();
        let span = error_span(input, &err);
        assert!(span.start >= 8 && span.end <= input.len(), "{span:?}");
        assert!(render_report(input, &err).contains("Error"));
    }

    #[test]
    fn spans_are_clamped() {
        let err = Error::format_at("bad", 5..40);
        assert_eq!(error_span("abc", &err), 3..3);
        assert_eq!(render_report("", &err), "Error: bad");
    }
}
