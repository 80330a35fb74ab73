// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

use super::step::DurationStep;
use super::value::Endpoint;
use crate::Error;
use std::iter::FusedIterator;

/// The values of a repeating interval: `anchor`, `anchor + step`, and so on.
///
/// Each value is computed when it is asked for, so an unbounded repetition
/// can be consumed a prefix at a time. A bounded repetition yields exactly
/// its count. When the next value would leave the representable range, a
/// single [`Error::IntervalOutOfBounds`] is yielded in its place and the
/// iterator ends.
///
/// ```
/// use chumsky_iso8601::interval::parse_repeating_interval;
/// use chumsky_iso8601::builder::Endpoint;
/// use chumsky_iso8601::Error;
/// use time::macros::date;
///
/// let dates: Vec<_> = parse_repeating_interval("R/2020-01-30/P1D").unwrap().take(3).collect();
/// assert_eq!(dates.last(), Some(&Ok(Endpoint::Date(date!(2020 - 02 - 01)))));
///
/// let dates: Result<Vec<_>, _> = parse_repeating_interval("R5/9999-12-30/P1D").unwrap().collect();
/// assert!(matches!(dates, Err(Error::IntervalOutOfBounds(_))));
/// ```
#[derive(Debug, Clone)]
pub struct Repetitions<D> {
    cursor: Cursor,
    step: D,
    promote: bool,
    remaining: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
enum Cursor {
    Anchor(Endpoint),
    After(Endpoint),
    Exhausted,
}

impl<D: DurationStep> Repetitions<D> {
    pub(crate) fn new(anchor: Endpoint, step: D, promote: bool, remaining: Option<u64>) -> Self {
        Repetitions { cursor: Cursor::Anchor(anchor), step, promote, remaining }
    }

    /// The signed step between values.
    pub fn step(&self) -> &D {
        &self.step
    }

    /// How many values are left, or `None` for an unbounded repetition.
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    pub fn is_bounded(&self) -> bool {
        self.remaining.is_some()
    }
}

impl<D: DurationStep> Iterator for Repetitions<D> {
    type Item = Result<Endpoint, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }
        let current = match self.cursor {
            Cursor::Anchor(anchor) => anchor,
            Cursor::After(previous) => match previous.shifted(&self.step, self.promote) {
                Some(current) => current,
                None => {
                    warn!("repetition stopped after {previous:?}, the next value is out of range");
                    self.cursor = Cursor::Exhausted;
                    return Some(Err(Error::IntervalOutOfBounds(format!(
                        "repeating {} by {:?} leaves the representable range",
                        previous.to_primitive(),
                        self.step
                    ))));
                }
            },
            Cursor::Exhausted => return None,
        };
        self.cursor = Cursor::After(current);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(Ok(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.remaining.map(|remaining| usize::try_from(remaining).unwrap_or(usize::MAX));
        match (self.cursor, self.remaining) {
            (Cursor::Exhausted, _) | (_, Some(0)) => (0, Some(0)),
            (Cursor::Anchor(_), _) => (1, upper),
            (Cursor::After(_), _) => (0, upper),
        }
    }
}

impl<D: DurationStep> FusedIterator for Repetitions<D> {}
